//! Logger setup for the `trirast` binary.
//!
//! The library itself only talks to the `log` facade: per-batch summaries at
//! `debug`, per-triangle coverage at `trace`. This module wires those to
//! `env_logger` with a default that keeps dependencies quiet.

use std::sync::Once;

/// Filter used when neither an explicit filter nor `RUST_LOG` is given.
pub const DEFAULT_FILTER: &str = "warn,trirast=info";

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter string; wins over `RUST_LOG` and `verbosity`
    pub filter: Option<String>,
    /// 0 = info, 1 = debug, 2+ = trace for this crate
    pub verbosity: u8,
    /// Prefix lines with a timestamp
    pub timestamps: bool,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: None,
            verbosity: 0,
            timestamps: false,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Filter string this config resolves to, given the `RUST_LOG` value
    pub fn resolve_filter(&self, rust_log: Option<&str>) -> String {
        if let Some(filter) = &self.filter {
            return filter.clone();
        }
        match (self.verbosity, rust_log) {
            (0, Some(env)) => env.to_string(),
            (0, None) => DEFAULT_FILTER.to_string(),
            (1, _) => "warn,trirast=debug".to_string(),
            (_, _) => "warn,trirast=trace".to_string(),
        }
    }
}

static INIT: Once = Once::new();

/// Install the global logger. Only the first call has any effect.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let rust_log = std::env::var("RUST_LOG").ok();
        let filter = config.resolve_filter(rust_log.as_deref());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        if !config.timestamps {
            builder.format_timestamp(None);
        }
        builder.init();

        log::debug!("log filter: {}", filter);
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_filter_wins() {
        let config = LoggingConfig {
            filter: Some("trirast=trace".to_string()),
            verbosity: 1,
            ..Default::default()
        };
        assert_eq!(config.resolve_filter(Some("error")), "trirast=trace");
    }

    #[test]
    fn test_rust_log_then_default() {
        let config = LoggingConfig::default();
        assert_eq!(config.resolve_filter(Some("error")), "error");
        assert_eq!(config.resolve_filter(None), DEFAULT_FILTER);
    }

    #[test]
    fn test_verbosity_raises_crate_level() {
        let debug = LoggingConfig { verbosity: 1, ..Default::default() };
        assert_eq!(debug.resolve_filter(Some("error")), "warn,trirast=debug");
        let trace = LoggingConfig { verbosity: 3, ..Default::default() };
        assert_eq!(trace.resolve_filter(None), "warn,trirast=trace");
    }
}
