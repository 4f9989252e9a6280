use log::LevelFilter;

/// Installs `env_logger` for unit tests, showing this crate's debug messages.
///
/// `RUST_LOG` overrides the default filter. Safe to call from every test.
pub fn init_logger() {
    env_logger::Builder::new()
        .filter(Some(env!("CARGO_CRATE_NAME")), LevelFilter::Debug)
        .parse_default_env()
        .is_test(true)
        .try_init()
        .ok();
}
