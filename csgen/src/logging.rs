//! Tracing setup for the command line.
//!
//! Events go to stderr so generated code on stdout can be piped straight
//! into a file.
//!
//! ```bash
//! CSGEN_LOG=debug csgen generate
//! CSGEN_LOG="csgen_csharp=debug,csgen_core=warn" csgen check
//! ```

use tracing_subscriber::EnvFilter;

/// Environment variable holding the filter directives.
pub const LOG_ENV: &str = "CSGEN_LOG";

/// Install the global subscriber.
///
/// `CSGEN_LOG` wins when set; otherwise `verbose` picks between `debug` and
/// `warn`.
pub fn init(verbose: bool) {
    let filter = build_filter(std::env::var(LOG_ENV).ok().as_deref(), verbose);

    // A subscriber may already be installed when running under a test harness.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn build_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    match directives {
        Some(directives) => EnvFilter::builder().parse_lossy(directives),
        None => EnvFilter::new(default_level(verbose)),
    }
}

fn default_level(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "warn" }
}
