use dashplot::telemetry::init_default_tracing;

#[test]
#[cfg(not(feature = "telemetry"))]
fn init_is_a_no_op_without_the_telemetry_feature() {
    assert!(!init_default_tracing());
    // Idempotent either way.
    assert!(!init_default_tracing());
}

#[test]
#[cfg(feature = "telemetry")]
fn init_installs_a_subscriber_at_most_once() {
    // First call may win or lose the race against another test binary's
    // subscriber; the second call must report the already-set state.
    let _ = init_default_tracing();
    assert!(!init_default_tracing());
}
