use tracing_subscriber::EnvFilter;

/// Install the stderr log subscriber.  Stdout stays free for progress
/// messages and reports.
///
/// `RUST_LOG` wins when set; otherwise `info,roadnet=debug`, or `debug`
/// everywhere with `--verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info,roadnet=debug" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
