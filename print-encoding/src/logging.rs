use log::LevelFilter;

/// Name of the environment variable holding an env_logger style
/// filter spec, eg: `PRINT_ENCODING_LOG=debug`
pub const LOG_ENV: &str = "PRINT_ENCODING_LOG";

fn builder(spec: Option<&str>) -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    if let Some(spec) = spec {
        // Fatal errors are reported through the log, so they must survive
        // a spec that only names other targets. Naming this crate in the
        // spec replaces this directive.
        builder.filter_module(env!("CARGO_CRATE_NAME"), LevelFilter::Error);
        builder.parse_filters(spec);
    } else {
        builder.filter_level(LevelFilter::Info);
    }
    builder
        .format_timestamp(None)
        .target(env_logger::Target::Stderr);
    builder
}

/// Log to stderr, leaving stdout for the records themselves
pub fn setup_logger() {
    let spec = std::env::var(LOG_ENV).ok();
    let _ = builder(spec.as_deref()).try_init();
}
