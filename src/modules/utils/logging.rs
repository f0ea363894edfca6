use env_logger::{Builder, WriteStyle};
use log::{error, info, warn, LevelFilter};
use std::fs::OpenOptions;
use std::path::Path;

/// Initialize the logging system, writing records to the given file
pub fn initialize_logging(path: &Path, level: LevelFilter) -> Result<(), Box<dyn std::error::Error>> {
    // Create or append to log file
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    build_logger(level, file).try_init()?;

    info!("Logging system initialized");
    Ok(())
}

fn build_logger(level: LevelFilter, file: std::fs::File) -> Builder {
    let mut builder = Builder::new();
    builder
        // Set default log level
        .filter_level(level)
        // RUST_LOG still wins when set
        .parse_default_env()
        // Enable timestamps
        .format_timestamp_secs()
        // Enable module path in logs
        .format_module_path(true)
        .write_style(WriteStyle::Never)
        .target(env_logger::Target::Pipe(Box::new(file)));
    builder
}

/// Helper function to format sensitive data for logging
pub fn format_sensitive(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..2].iter().collect();
    let tail: String = chars[chars.len() - 2..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Structured logging for authentication events
pub fn log_auth_event(event_type: &str, username: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            "Auth event: type={}, user={}, success=true, details={:?}",
            event_type,
            format_sensitive(username),
            details
        );
    } else {
        warn!(
            "Auth event: type={}, user={}, success=false, details={:?}",
            event_type,
            format_sensitive(username),
            details
        );
    }
}

/// Structured logging for directory mutations
pub fn log_data_operation(operation: &str, user: &str, success: bool, details: Option<&str>) {
    if success {
        info!(
            "Data operation: op={}, user={}, success=true, details={:?}",
            operation,
            format_sensitive(user),
            details
        );
    } else {
        error!(
            "Data operation: op={}, user={}, success=false, details={:?}",
            operation,
            format_sensitive(user),
            details
        );
    }
}
