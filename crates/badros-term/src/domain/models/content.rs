//! Fixed portfolio copy rendered by the screens.

use super::PanelId;

pub const BOOT_MESSAGES: [&str; 6] = [
    "> Initializing BadrOS v2.5...",
    "> Loading core modules...",
    "> Checking system integrity...",
    "> Loading modules: Study | Work | Health | Humor",
    "> System online.",
    "> Welcome to Badr's Digital Universe.",
];

pub const ABOUT_LINES: [&str; 8] = [
    "$ cat about.txt",
    "name:      Badr",
    "role:      Software engineer & perpetual student",
    "location:  Somewhere between a terminal and a coffee cup",
    "study:     Computer science, one rabbit hole at a time",
    "work:      Building tools that make other people faster",
    "health:    Runs, lifts, and the occasional long walk to debug in my head",
    "humor:     Enabled. Cannot be disabled.",
];

pub struct Project {
    pub name: &'static str,
    pub stack: &'static str,
    pub summary: &'static str,
}

pub const PROJECTS: [Project; 4] = [
    Project {
        name: "BadrOS",
        stack: "Rust, ratatui",
        summary: "This very terminal. A portfolio pretending to be an operating system.",
    },
    Project {
        name: "Study Tracker",
        stack: "TypeScript, SQLite",
        summary: "Spaced-repetition planner that schedules revision around exams.",
    },
    Project {
        name: "Pulse",
        stack: "Python, FastAPI",
        summary: "Self-hosted dashboard for workouts, sleep and resting heart rate.",
    },
    Project {
        name: "Pun Engine",
        stack: "Go",
        summary: "Generates groan-worthy puns from commit messages. Nobody asked for it.",
    },
];

pub struct Skill {
    pub name: &'static str,
    pub level: &'static str,
    pub percent: u16,
}

pub const SKILLS: [Skill; 8] = [
    Skill {
        name: "Rust",
        level: "Advanced",
        percent: 80,
    },
    Skill {
        name: "TypeScript",
        level: "Advanced",
        percent: 85,
    },
    Skill {
        name: "Python",
        level: "Advanced",
        percent: 80,
    },
    Skill {
        name: "SQL",
        level: "Intermediate",
        percent: 65,
    },
    Skill {
        name: "Linux",
        level: "Advanced",
        percent: 75,
    },
    Skill {
        name: "Docker",
        level: "Intermediate",
        percent: 60,
    },
    Skill {
        name: "Git",
        level: "Advanced",
        percent: 85,
    },
    Skill {
        name: "Explaining things to rubber ducks",
        level: "Expert",
        percent: 99,
    },
];

pub const FUN_FACTS: [&str; 4] = [
    "There are 10 types of people: those who understand binary and those who don't.",
    "My code doesn't have bugs. It has surprise features.",
    "I would tell you a UDP joke, but you might not get it.",
    "It works on my machine. Ship the machine.",
];

pub const EGG_HINT: &str = "[ ? ]  something is hidden here... click it";

pub const EASTER_EGG_TITLE: &str = "Easter Egg Found!";
pub const EASTER_EGG_QUOTE: &str =
    "\"Debugging is like being a detective in a crime movie where you are also the murderer.\"";

/// Number of items a panel reveals when opened. `None` means the panel has no
/// reveal target at all.
pub fn reveal_len(panel: PanelId) -> Option<usize> {
    match panel {
        PanelId::About => Some(ABOUT_LINES.len()),
        PanelId::Skills => Some(SKILLS.len()),
        _ => None,
    }
}
