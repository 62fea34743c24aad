use tracing_subscriber::EnvFilter;

/// Targets that log at the `-v` level; everything else stays quiet.
const CRATE_TARGETS: &[&str] = &["luach", "luach_core"];

/// Installs the subscriber. `-v` is info, `-vv` debug, `-vvv` trace, and
/// `RUST_LOG` wins over all of them.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directives: Vec<String> =
            CRATE_TARGETS.iter().map(|target| format!("{target}={level}")).collect();
        EnvFilter::new(directives.join(","))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        // stdout carries `--json` and exported reports.
        .with_writer(std::io::stderr)
        .init();
}
