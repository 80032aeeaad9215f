use std::time::Duration;

use super::*;

fn run_until(egg: &mut EasterEgg, scheduler: &mut Scheduler, until: Duration) {
    while let Some(step) = scheduler.pop_due(until) {
        if let Step::EasterEggExpire { generation } = step {
            egg.expire(generation);
        }
    }
    scheduler.settle(until);
}

#[test]
fn it_does_nothing_visible_below_the_threshold() {
    let mut scheduler = Scheduler::default();
    let mut egg = EasterEgg::default();

    for n in 1..EGG_THRESHOLD {
        assert!(!egg.click(&mut scheduler));
        assert_eq!(egg.clicks(), n);
    }
    assert!(!egg.overlay_visible());
    assert!(scheduler.is_empty());
}

#[test]
fn it_triggers_on_the_fifth_click_and_resets() {
    let mut scheduler = Scheduler::default();
    let mut egg = EasterEgg::default();

    for _ in 1..EGG_THRESHOLD {
        egg.click(&mut scheduler);
    }
    assert!(egg.click(&mut scheduler));
    assert!(egg.overlay_visible());
    assert_eq!(egg.clicks(), 0);
    assert_eq!(scheduler.len(), 1);

    run_until(&mut egg, &mut scheduler, Duration::from_millis(3999));
    assert!(egg.overlay_visible());

    run_until(&mut egg, &mut scheduler, EGG_DURATION);
    assert!(!egg.overlay_visible());
}

#[test]
fn it_treats_the_sixth_click_like_the_first() {
    let mut scheduler = Scheduler::default();
    let mut egg = EasterEgg::default();
    for _ in 0..EGG_THRESHOLD {
        egg.click(&mut scheduler);
    }

    assert!(!egg.click(&mut scheduler));
    assert_eq!(egg.clicks(), 1);
}

#[test]
fn it_keeps_a_retriggered_overlay_for_its_full_duration() {
    let mut scheduler = Scheduler::default();
    let mut egg = EasterEgg::default();
    for _ in 0..EGG_THRESHOLD {
        egg.click(&mut scheduler);
    }

    run_until(&mut egg, &mut scheduler, Duration::from_secs(3));
    for _ in 0..EGG_THRESHOLD {
        egg.click(&mut scheduler);
    }

    run_until(&mut egg, &mut scheduler, Duration::from_secs(5));
    assert!(egg.overlay_visible());

    run_until(&mut egg, &mut scheduler, Duration::from_secs(7));
    assert!(!egg.overlay_visible());
}
