// Tests for index-based playback navigation

use dsviz::build_steps;
use dsviz::generator::Family;
use dsviz::step::{Playback, StepTag};

fn playback_for(source: &str) -> Playback {
    Playback::new(build_steps(source, Family::Array).expect("Pipeline failed"))
}

#[test]
fn test_starts_at_first_step() {
    let playback = playback_for("let arr = [1, 2];\nswap(0, 1);");

    assert_eq!(playback.position(), 0);
    assert_eq!(playback.current().unwrap().tag, StepTag::Initial);
    assert_eq!(playback.len(), 4); // initial, create, pre-swap, swap
}

#[test]
fn test_forward_and_backward() {
    let mut playback = playback_for("let arr = [1, 2];\nswap(0, 1);");

    assert!(playback.step_forward());
    assert_eq!(playback.current().unwrap().tag, StepTag::Create);

    assert!(playback.step_backward());
    assert_eq!(playback.position(), 0);

    // Can't retreat past the first step
    assert!(!playback.step_backward());
    assert_eq!(playback.position(), 0);
}

#[test]
fn test_forward_stops_at_end() {
    let mut playback = playback_for("let arr = [9];");

    assert!(playback.step_forward());
    assert!(playback.is_at_end());
    assert!(!playback.step_forward());
    assert_eq!(playback.position(), 1);
}

#[test]
fn test_jump_and_rewind() {
    let mut playback = playback_for("let arr = [1, 2];\nswap(0, 1);");

    assert!(playback.jump_to(3));
    assert_eq!(playback.current().unwrap().tag, StepTag::Swap);

    assert!(!playback.jump_to(99));
    assert_eq!(playback.position(), 3);

    playback.rewind_to_start();
    assert_eq!(playback.position(), 0);
}

#[test]
fn test_navigation_does_not_mutate_steps() {
    let mut playback = playback_for("let arr = [4, 5];\nupdateAt(0, 6);");

    let before: Vec<_> = playback.as_slice().to_vec();

    while playback.step_forward() {}
    playback.rewind_to_start();
    playback.jump_to(playback.len() - 1);

    assert_eq!(playback.as_slice(), &before[..]);
}
