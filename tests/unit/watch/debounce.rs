use super::*;

const WINDOW: Duration = Duration::from_millis(160);

#[test]
fn fires_once_after_window() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(WINDOW);
    d.trigger(t0);
    assert!(!d.fire(t0 + Duration::from_millis(159)));
    assert!(d.fire(t0 + WINDOW));
    assert!(!d.fire(t0 + WINDOW * 2));
    assert!(!d.is_pending());
}

#[test]
fn burst_collapses_to_last_trigger() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(WINDOW);
    for ms in [0u64, 40, 80, 120] {
        d.trigger(t0 + Duration::from_millis(ms));
    }
    assert_eq!(d.coalesced(), 3);
    assert_eq!(d.deadline(), Some(t0 + Duration::from_millis(280)));
    assert!(!d.fire(t0 + Duration::from_millis(200)));
    assert!(d.fire(t0 + Duration::from_millis(280)));
}

#[test]
fn cancel_discards_pending() {
    let t0 = Instant::now();
    let mut d = Debouncer::new(WINDOW);
    d.trigger(t0);
    d.cancel();
    assert!(!d.fire(t0 + WINDOW * 4));
}

#[test]
fn idle_debouncer_never_fires() {
    let mut d = Debouncer::new(WINDOW);
    assert_eq!(d.window(), WINDOW);
    assert!(!d.fire(Instant::now()));
}
