use tracing::Subscriber;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable that switches the binaries to JSON log lines.
pub const LOG_FORMAT_ENV: &str = "NBA_ALERT_LOG_FORMAT";

/// `RUST_LOG` wins; otherwise our crate logs at info, or debug when verbose.
fn env_filter(verbose: bool) -> EnvFilter {
    let default_directives = if verbose {
        "close_nba_games=debug,info"
    } else {
        "close_nba_games=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives))
}

/// Terse line prefix shared by both output formats.
fn base_layer<S>() -> fmt::Layer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
}

pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(base_layer().compact())
        .init();
}

/// One JSON object per line for log collectors.
pub fn init_json_logger() {
    tracing_subscriber::registry()
        .with(env_filter(false))
        .with(base_layer().json())
        .init();
}

/// Picks the JSON or compact logger from `NBA_ALERT_LOG_FORMAT`.
pub fn init_from_env(verbose: bool) {
    match std::env::var(LOG_FORMAT_ENV).as_deref() {
        Ok("json") => init_json_logger(),
        _ => init_cli_logger(verbose),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_filter_defaults() {
        // RUST_LOG would override the defaults checked below.
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        assert_eq!(env_filter(false).to_string(), "close_nba_games=info");
        assert!(env_filter(true).to_string().contains("close_nba_games=debug"));
    }
}
