//! Global `tracing` subscriber setup for the command line front end

use std::path::Path;

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use crate::config::LoggingConfig;

/// Environment variable that overrides the configured filter
pub const LOG_ENV_VAR: &str = "MUTIL_LOG";

type BoxedSubscriber = Box<dyn tracing::Subscriber + Send + Sync>;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter: {0}")]
    InvalidFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("Invalid log file path: {0:?}")]
    InvalidPath(std::path::PathBuf),

    #[error("Failed to initialize logging: {0}")]
    Init(String),
}

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes the file
/// writer.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let env_value = std::env::var(LOG_ENV_VAR).ok();

    let (writer, guard) = match &config.file {
        Some(path) => {
            let (writer, guard) = file_writer(path)?;
            (BoxMakeWriter::new(writer), Some(guard))
        }
        None => (BoxMakeWriter::new(std::io::stderr), None),
    };

    let subscriber = build_subscriber(config, env_value.as_deref(), writer, guard.is_none())?;
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| LoggingError::Init(e.to_string()))?;

    tracing::debug!("Logging initialized: {:?}", config);
    Ok(guard)
}

fn build_subscriber(
    config: &LoggingConfig,
    env_value: Option<&str>,
    writer: BoxMakeWriter,
    ansi: bool,
) -> Result<BoxedSubscriber, LoggingError> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(create_env_filter(config, env_value)?)
        .with_writer(writer)
        .with_target(true);

    Ok(if config.json {
        Box::new(builder.json().with_ansi(false).finish())
    } else {
        Box::new(builder.with_ansi(ansi).finish())
    })
}

/// A non-empty `MUTIL_LOG` value wins over the configured level. Both must
/// parse.
fn create_env_filter(
    config: &LoggingConfig,
    env_value: Option<&str>,
) -> Result<EnvFilter, LoggingError> {
    let directives = env_value
        .filter(|value| !value.is_empty())
        .unwrap_or(config.level.as_str());
    Ok(EnvFilter::try_new(directives)?)
}

fn file_writer(
    path: &Path,
) -> Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard), LoggingError> {
    let file_name = path
        .file_name()
        .ok_or_else(|| LoggingError::InvalidPath(path.to_path_buf()))?;
    let dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let appender = tracing_appender::rolling::never(dir, file_name);
    Ok(tracing_appender::non_blocking(appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::CapturedOutput;
    use rstest::rstest;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn level(level: &str) -> LoggingConfig {
        LoggingConfig {
            level: level.to_string(),
            ..LoggingConfig::default()
        }
    }

    fn capturing_subscriber(
        config: &LoggingConfig,
        env_value: Option<&str>,
    ) -> (BoxedSubscriber, CapturedOutput) {
        let output = CapturedOutput::default();
        let sink = output.clone();
        let subscriber =
            build_subscriber(config, env_value, BoxMakeWriter::new(move || sink.clone()), false)
                .unwrap();
        (subscriber, output)
    }

    #[rstest]
    #[case("mutil=verbose", None)] // bad configured level
    #[case("info", Some("mutil=verbose"))] // bad override
    fn create_env_filter_rejects_invalid_directives(
        #[case] configured: &str,
        #[case] env_value: Option<&str>,
    ) {
        assert!(matches!(
            create_env_filter(&level(configured), env_value),
            Err(LoggingError::InvalidFilter(_))
        ));
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    fn create_env_filter_uses_configured_level_without_override(#[case] env_value: Option<&str>) {
        assert!(create_env_filter(&level("debug"), env_value).is_ok());
    }

    #[test]
    fn subscriber_drops_events_below_configured_level() {
        let (subscriber, output) = capturing_subscriber(&level("warn"), None);

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("quiet event");
            tracing::warn!("loud event");
        });

        let contents = output.contents();
        assert!(contents.contains("loud event"));
        assert!(!contents.contains("quiet event"));
    }

    #[test]
    fn env_value_overrides_configured_level() {
        let (subscriber, output) = capturing_subscriber(&level("warn"), Some("debug"));

        tracing::subscriber::with_default(subscriber, || tracing::debug!("detail event"));

        assert!(output.contents().contains("detail event"));
    }

    #[test]
    fn json_subscriber_writes_one_object_per_event() {
        let config = LoggingConfig {
            json: true,
            ..LoggingConfig::default()
        };
        let (subscriber, output) = capturing_subscriber(&config, None);

        tracing::subscriber::with_default(subscriber, || tracing::info!("hello"));

        let contents = output.contents();
        let line = contents.lines().next().unwrap();
        let event: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(event["fields"]["message"], "hello");
        assert_eq!(event["level"], "INFO");
    }

    #[test]
    fn file_writer_writes_events_to_configured_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mutil.log");
        let (writer, guard) = file_writer(&path).unwrap();
        let subscriber =
            build_subscriber(&level("info"), None, BoxMakeWriter::new(writer), false).unwrap();

        tracing::subscriber::with_default(subscriber, || tracing::info!("written to file"));
        drop(guard);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("written to file"));
    }

    #[test]
    fn file_writer_rejects_path_without_file_name() {
        let result = file_writer(&PathBuf::from("/"));

        assert!(matches!(result, Err(LoggingError::InvalidPath(_))));
    }
}
