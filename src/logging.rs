use tracing_subscriber::EnvFilter;

/// Installs the global subscriber. Stdout carries protocol traffic, so
/// everything goes to stderr without ANSI colors.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|e| {
        eprintln!("invalid log filter {level:?} ({e}); falling back to info");
        EnvFilter::new("info")
    });
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
