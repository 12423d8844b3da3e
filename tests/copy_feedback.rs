use std::time::{Duration, Instant};

use neumorphic_studio::copy_feedback::{CopyFeedback, DEFAULT_COPIED_DURATION};

#[test]
fn default_duration_is_two_seconds() {
    assert_eq!(CopyFeedback::default().duration(), Duration::from_secs(2));
    assert_eq!(DEFAULT_COPIED_DURATION, Duration::from_millis(2000));
}

/// 期限ちょうどで not-copied に戻ることを確認する。
#[test]
fn flag_expires_at_deadline() {
    let mut feedback = CopyFeedback::default();
    let t0 = Instant::now();
    assert!(!feedback.is_copied(t0));

    feedback.mark_copied(t0);
    assert!(feedback.is_copied(t0));
    assert!(feedback.is_copied(t0 + Duration::from_millis(1999)));
    assert!(!feedback.tick(t0 + Duration::from_millis(1999)));

    let deadline = t0 + Duration::from_secs(2);
    assert!(!feedback.is_copied(deadline));
    assert!(feedback.tick(deadline));
    // 2 回目の tick では遷移しない
    assert!(!feedback.tick(deadline));
    assert_eq!(feedback.remaining(deadline), None);
}

#[test]
fn second_copy_moves_the_deadline() {
    let mut feedback = CopyFeedback::default();
    let t0 = Instant::now();
    feedback.mark_copied(t0);
    feedback.mark_copied(t0 + Duration::from_millis(1500));

    assert!(feedback.is_copied(t0 + Duration::from_millis(3000)));
    assert_eq!(
        feedback.remaining(t0 + Duration::from_millis(3000)),
        Some(Duration::from_millis(500))
    );
    assert!(!feedback.is_copied(t0 + Duration::from_millis(3500)));
}

#[test]
fn cancel_clears_immediately() {
    let mut feedback = CopyFeedback::new(Duration::from_millis(500));
    let t0 = Instant::now();
    feedback.mark_copied(t0);
    feedback.cancel();

    assert!(!feedback.is_copied(t0));
    assert!(!feedback.tick(t0 + Duration::from_secs(1)));
}
