use std::sync::Once;

static INIT: Once = Once::new();

/// Routes `log` output through the test harness's captured stdout. Safe to call from every test.
pub fn init() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}
