
/// Route `log` output through the test harness so warnings show up on failing tests.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}
