use super::*;

#[test]
fn test_zero_budget_expires_immediately() {
    let deadline = Deadline::start(Duration::ZERO);
    assert!(deadline.expired());
}

#[test]
fn test_generous_budget_is_not_expired() {
    let deadline = Deadline::start(Duration::from_secs(60));
    assert!(!deadline.expired());
}

#[test]
fn test_unlimited_never_expires() {
    let deadline = Deadline::unlimited();
    assert!(!deadline.expired());
    assert!(deadline.elapsed() < Duration::from_secs(60));
}
