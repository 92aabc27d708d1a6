//! Log output setup.
//!
//! The library only emits `tracing` events. Binaries install a subscriber
//! with [`init_tracing_subscriber`] (feature `cli`); `RUST_LOG` overrides the
//! configured level.

/// Tracing configuration.
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    pub level: TracingLevel,
    pub ansi: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TracingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl TracingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TracingLevel::Error => "error",
            TracingLevel::Warn => "warn",
            TracingLevel::Info => "info",
            TracingLevel::Debug => "debug",
            TracingLevel::Trace => "trace",
        }
    }
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Level from a `-v` count: none is `warn`, `-v` is `info`, `-vv` is
    /// `debug`, more is `trace`.
    pub fn from_verbosity(verbose: u8) -> Self {
        let level = match verbose {
            0 => TracingLevel::Warn,
            1 => TracingLevel::Info,
            2 => TracingLevel::Debug,
            _ => TracingLevel::Trace,
        };
        Self { level, ansi: false }
    }

    pub fn level(mut self, level: TracingLevel) -> Self {
        self.level = level;
        self
    }

    pub fn ansi(mut self, ansi: bool) -> Self {
        self.ansi = ansi;
        self
    }

    /// Filter directive used when `RUST_LOG` is unset.
    pub fn default_directive(&self) -> String {
        let level = self.level.as_str();
        format!("module_bundles={level},generate_bundles={level}")
    }
}

/// Installs a global fmt subscriber writing to stderr.
#[cfg(feature = "cli")]
pub fn init_tracing_subscriber(config: &TracingConfig) -> crate::Result<()> {
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directive()));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(config.ansi)
        .try_init()
        .map_err(|e| crate::Error::Observability(format!("Failed to init subscriber: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_verbosity() {
        assert_eq!(TracingConfig::from_verbosity(0).level, TracingLevel::Warn);
        assert_eq!(TracingConfig::from_verbosity(1).level, TracingLevel::Info);
        assert_eq!(TracingConfig::from_verbosity(2).level, TracingLevel::Debug);
        assert_eq!(TracingConfig::from_verbosity(9).level, TracingLevel::Trace);
    }

    #[test]
    fn test_default_directive() {
        let config = TracingConfig::new().level(TracingLevel::Debug).ansi(true);
        assert_eq!(
            config.default_directive(),
            "module_bundles=debug,generate_bundles=debug"
        );
        assert_eq!(
            TracingConfig::new().default_directive(),
            "module_bundles=info,generate_bundles=info"
        );
        assert!(config.ansi);
    }
}
