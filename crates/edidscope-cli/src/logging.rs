use clap::ValueEnum;

/// Minimum log level printed to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    #[default]
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => Self::Off,
            LogLevel::Error => Self::Error,
            LogLevel::Warn => Self::Warn,
            LogLevel::Info => Self::Info,
            LogLevel::Debug => Self::Debug,
            LogLevel::Trace => Self::Trace,
        }
    }
}

/// Initialise logging from `--log-level`; `RUST_LOG` still overrides it.
pub fn init_logger(level: LogLevel) {
    env_logger::Builder::default()
        .filter_level(level.into())
        .parse_default_env()
        .init();

    log::trace!("logging initialized");
}
