#[cfg(test)]
#[path = "render_test.rs"]
mod tests;

use ratatui::layout::Alignment;
use ratatui::layout::Constraint;
use ratatui::layout::Layout;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::style::Modifier;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::text::Span;
use ratatui::widgets::Block;
use ratatui::widgets::Clear;
use ratatui::widgets::Gauge;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Wrap;
use ratatui::Frame;
use strum::IntoEnumIterator;

use crate::domain::models::content;
use crate::domain::models::FormResponseKind;
use crate::domain::models::HistoryKind;
use crate::domain::models::PanelId;
use crate::domain::services::AppState;
use crate::domain::services::BootSequence;
use crate::domain::services::FormField;
use crate::domain::services::Hitbox;

const PROMPT: &str = "badros@portfolio:~$";
const ACCENT: Color = Color::Green;
const HIGHLIGHT: Color = Color::Cyan;

type Hitboxes = Vec<(Rect, Hitbox)>;

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    return Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    );
}

/// Draws the whole screen and records the clickable regions for the frame.
pub fn draw(frame: &mut Frame, app_state: &mut AppState) {
    let mut hitboxes: Hitboxes = vec![];
    let area = frame.area();

    if let Some(boot) = &app_state.boot {
        draw_boot(frame, area, boot);
        app_state.hitboxes = hitboxes;
        return;
    }

    let [header_area, main_area, history_area, input_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(8),
        Constraint::Length(8),
        Constraint::Length(3),
    ])
    .areas(area);

    draw_header(frame, header_area, app_state);
    match app_state.panels.active() {
        None => draw_dashboard(frame, main_area, app_state, &mut hitboxes),
        Some(panel) => draw_panel(frame, main_area, app_state, panel, &mut hitboxes),
    }
    draw_history(frame, history_area, app_state);
    draw_input(frame, input_area, app_state);

    if app_state.easter_egg.overlay_visible() {
        draw_easter_egg(frame, area);
    }

    app_state.hitboxes = hitboxes;
}

fn draw_boot(frame: &mut Frame, area: Rect, boot: &BootSequence) {
    let style = if boot.fading {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().fg(ACCENT)
    };

    let mut lines = boot
        .lines()
        .iter()
        .map(|e| return Line::from(e.as_str()))
        .collect::<Vec<Line>>();
    if boot.cursor_shown {
        lines.push(Line::from("> _").style(Style::default().add_modifier(Modifier::SLOW_BLINK)));
    }

    let width = content::BOOT_MESSAGES
        .iter()
        .map(|e| return e.len() as u16)
        .max()
        .unwrap_or_default()
        + 4;
    let rect = centered_rect(width, content::BOOT_MESSAGES.len() as u16 + 3, area);
    let paragraph = Paragraph::new(lines)
        .style(style)
        .block(Block::bordered().title(" BadrOS ").border_style(style));

    frame.render_widget(paragraph, rect);
}

fn draw_header(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let hint = match app_state.panels.active() {
        None => "←/→ select  Enter open  type \"help\"",
        Some(PanelId::Contact) => "Tab move  Ctrl+S send  Esc dashboard",
        Some(_) => "type \"exit\" or Esc for the dashboard",
    };

    let title = Line::from(vec![
        Span::styled("BadrOS v2.5", Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::raw("  ::  Study | Work | Health | Humor"),
    ]);
    let block = Block::bordered()
        .border_style(Style::default().fg(ACCENT))
        .title_bottom(Line::from(format!(" {hint} ")).right_aligned());

    frame.render_widget(Paragraph::new(title).block(block), area);
}

fn draw_dashboard(frame: &mut Frame, area: Rect, app_state: &AppState, hitboxes: &mut Hitboxes) {
    let panels = PanelId::iter().collect::<Vec<PanelId>>();
    let [cards_area] = Layout::vertical([Constraint::Length(6)]).areas(area);
    let card_areas = Layout::horizontal(
        panels
            .iter()
            .map(|_| return Constraint::Ratio(1, panels.len() as u32)),
    )
    .split(cards_area);

    for (index, (panel, rect)) in panels.iter().zip(card_areas.iter()).enumerate() {
        let border_style = if index == app_state.selected_card {
            Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(ACCENT)
        };

        let card = Paragraph::new(panel.card_hint())
            .wrap(Wrap { trim: true })
            .block(
                Block::bordered()
                    .title(format!(" {} ", panel.card_label()))
                    .border_style(border_style),
            );

        frame.render_widget(card, *rect);
        hitboxes.push((*rect, Hitbox::Card(*panel)));
    }
}

fn draw_panel(
    frame: &mut Frame,
    area: Rect,
    app_state: &AppState,
    panel: PanelId,
    hitboxes: &mut Hitboxes,
) {
    let title = if app_state.animator.is_glitching(panel) {
        Span::styled(
            format!(" ▓▒░ {} ░▒▓ ", panel.title()),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::RAPID_BLINK | Modifier::BOLD),
        )
    } else {
        Span::styled(
            format!(" {} ", panel.title()),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )
    };

    let block = Block::bordered()
        .title(title)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if area.width > 6 {
        let close = Rect::new(area.x + area.width - 5, area.y, 3, 1);
        frame.render_widget(
            Paragraph::new("[x]").style(Style::default().fg(Color::Red)),
            close,
        );
        hitboxes.push((close, Hitbox::Close));
    }

    match panel {
        PanelId::About => draw_about(frame, inner, app_state),
        PanelId::Projects => draw_projects(frame, inner),
        PanelId::Skills => draw_skills(frame, inner, app_state),
        PanelId::FunZone => draw_fun_zone(frame, inner, hitboxes),
        PanelId::Contact => draw_contact(frame, inner, app_state, hitboxes),
    }
}

fn draw_about(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let lines = content::ABOUT_LINES
        .iter()
        .enumerate()
        .map(|(index, text)| {
            if app_state.animator.is_visible(PanelId::About, index) {
                return Line::from(*text);
            }
            return Line::default();
        })
        .collect::<Vec<Line>>();

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_projects(frame: &mut Frame, area: Rect) {
    let mut lines = vec![];
    for project in content::PROJECTS.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                project.name,
                Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  [{}]", project.stack),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::from(format!("  {}", project.summary)));
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn draw_skills(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let rows = Layout::vertical(content::SKILLS.iter().map(|_| return Constraint::Length(1)))
        .split(area);

    for (index, (skill, rect)) in content::SKILLS.iter().zip(rows.iter()).enumerate() {
        if !app_state.animator.is_visible(PanelId::Skills, index) {
            continue;
        }

        let gauge = Gauge::default()
            .gauge_style(Style::default().fg(ACCENT).bg(Color::Black))
            .percent(skill.percent)
            .label(format!("{} · {} · {}%", skill.name, skill.level, skill.percent));
        frame.render_widget(gauge, *rect);
    }
}

fn draw_fun_zone(frame: &mut Frame, area: Rect, hitboxes: &mut Hitboxes) {
    let facts_height = content::FUN_FACTS.len() as u16 * 2;
    let [facts_area, egg_area] =
        Layout::vertical([Constraint::Length(facts_height), Constraint::Length(3)]).areas(area);

    let lines = content::FUN_FACTS
        .iter()
        .flat_map(|e| return [Line::from(format!("* {e}")), Line::default()])
        .collect::<Vec<Line>>();
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), facts_area);

    let egg = Paragraph::new(content::EGG_HINT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::bordered().border_style(Style::default().fg(Color::DarkGray)));
    frame.render_widget(egg, egg_area);
    hitboxes.push((egg_area, Hitbox::EggTrigger));
}

fn draw_contact(frame: &mut Frame, area: Rect, app_state: &AppState, hitboxes: &mut Hitboxes) {
    let form = &app_state.contact_form;
    let [name_area, email_area, subject_area, message_area, submit_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Min(4),
        Constraint::Length(3),
    ])
    .areas(area);

    for (field, rect) in [
        (FormField::Name, name_area),
        (FormField::Email, email_area),
        (FormField::Subject, subject_area),
        (FormField::Message, message_area),
    ] {
        let Some(textarea) = form.textarea(field) else {
            continue;
        };

        let focused = form.focus == field;
        let mut textarea = textarea.clone();
        if !focused {
            textarea.set_cursor_style(Style::default());
        }
        textarea.set_cursor_line_style(Style::default());
        textarea.set_block(
            Block::bordered()
                .title(format!(" {} ", field.label()))
                .border_style(if focused {
                    Style::default().fg(HIGHLIGHT)
                } else {
                    Style::default().fg(ACCENT)
                }),
        );

        frame.render_widget(&textarea, rect);
        hitboxes.push((rect, Hitbox::Field(field)));
    }

    let [button_area, response_area] =
        Layout::horizontal([Constraint::Length(20), Constraint::Min(0)]).areas(submit_area);

    let label = if form.is_pending() {
        "Sending..."
    } else {
        "Send Message"
    };
    let mut button_style = Style::default().fg(ACCENT);
    if form.focus == FormField::Submit {
        button_style = button_style.add_modifier(Modifier::REVERSED);
    }
    let button = Paragraph::new(label)
        .alignment(Alignment::Center)
        .style(button_style)
        .block(Block::bordered());
    frame.render_widget(button, button_area);
    hitboxes.push((button_area, Hitbox::Field(FormField::Submit)));

    if let Some(response) = form.response() {
        let color = match response.kind {
            FormResponseKind::Success => Color::Green,
            FormResponseKind::Error => Color::Red,
        };
        let paragraph = Paragraph::new(response.text.as_str())
            .style(Style::default().fg(color))
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, response_area.inner(ratatui::layout::Margin::new(1, 0)));
    }
}

fn draw_history(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let block = Block::bordered()
        .title(" output ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let mut lines = vec![];
    for entry in app_state.command_line.history() {
        match entry.kind {
            HistoryKind::Input => lines.push(Line::from(Span::styled(
                format!("> {}", entry.text),
                Style::default().fg(HIGHLIGHT),
            ))),
            HistoryKind::Response => {
                for text in entry.text.lines() {
                    lines.push(Line::from(text.to_string()));
                }
            }
        }
    }

    let skip = lines.len().saturating_sub(inner.height as usize);
    let lines = lines.into_iter().skip(skip).collect::<Vec<Line>>();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_input(frame: &mut Frame, area: Rect, app_state: &AppState) {
    let contact = app_state.panels.is_active(PanelId::Contact);
    let block = Block::bordered()
        .title(format!(" {PROMPT} "))
        .border_style(if contact {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(HIGHLIGHT)
        });

    if contact {
        let paragraph = Paragraph::new("Command line paused while the contact form is open.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app_state.command_input, inner);
}

fn draw_easter_egg(frame: &mut Frame, area: Rect) {
    let block = Block::bordered()
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);

    let lines = vec![
        Line::from(Span::styled(
            content::EASTER_EGG_TITLE,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(content::EASTER_EGG_QUOTE),
    ];
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(Clear, area);
    frame.render_widget(block, area);
    frame.render_widget(paragraph, centered_rect(inner.width, 5, inner));
}
