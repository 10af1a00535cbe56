//! Diagnostic logging to stderr.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count.
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "nfl_data_bridge=warn",
        1 => "nfl_data_bridge=info",
        _ => "nfl_data_bridge=debug",
    }
}

/// Install the global subscriber. `RUST_LOG` wins over `verbosity` when set.
///
/// Output goes to stderr; stdout is reserved for the JSON document. Calling
/// this twice is harmless.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_by_verbosity() {
        assert_eq!(default_directive(0), "nfl_data_bridge=warn");
        assert_eq!(default_directive(1), "nfl_data_bridge=info");
        assert_eq!(default_directive(2), "nfl_data_bridge=debug");
        assert_eq!(default_directive(9), "nfl_data_bridge=debug");
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(0);
        init_logging(2);
    }
}
