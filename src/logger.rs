use anyhow::Result;
use flexi_logger::{Logger, LoggerHandle, detailed_format};

/// Starts the global logger. `RUST_LOG` takes precedence over `spec`.
///
/// Keep the returned handle alive for as long as logging is needed.
pub fn init(spec: &str) -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str(spec)?
        .format(detailed_format)
        .start()?;

    Ok(handle)
}
