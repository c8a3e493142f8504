use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "POAI_LOG";

pub fn default_directive(verbose: u8, quiet: bool) -> &'static str {
    if quiet {
        return "poai_dashboard=error";
    }
    match verbose {
        0 => "poai_dashboard=info",
        1 => "poai_dashboard=debug",
        _ => "poai_dashboard=trace",
    }
}

pub fn init_logging(verbose: u8, quiet: bool) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, quiet)));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
