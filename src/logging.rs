/// Structured logging for the particulate analysis service.
///
/// Provides context-rich logging with station identifiers, timestamps, and
/// severity levels. Supports both console output and file-based logging for
/// unattended operation.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Data Source Types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    AirKorea,
    Fixture,
    System,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::AirKorea => write!(f, "AIRKOREA"),
            DataSource::Fixture => write!(f, "FIXTURE"),
            DataSource::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - station may be offline or under maintenance
    Expected,
    /// Unexpected failure - indicates service degradation or a config issue
    Unexpected,
    /// Unknown - cannot determine if this is expected or not
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger Configuration
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
    /// Whether to include timestamps in console output
    console_timestamps: bool,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>, console_timestamps: bool) {
        let logger = Logger {
            min_level,
            log_file,
            console_timestamps,
        };

        *LOGGER.lock().unwrap() = Some(logger);
    }

    /// Log a message with the global logger
    fn log(&self, level: LogLevel, source: &DataSource, station: Option<&str>, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");

        // Format the log entry
        let station_part = station.map(|s| format!(" [{}]", s)).unwrap_or_default();
        let log_entry = format!(
            "{} {} {}{}: {}",
            timestamp, level, source, station_part, message
        );

        // Console output
        if self.console_timestamps {
            match level {
                LogLevel::Error => eprintln!("{}", log_entry),
                LogLevel::Warning => eprintln!("   {}", log_entry),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => println!("   [DEBUG] {}", message),
            }
        } else {
            match level {
                LogLevel::Error => eprintln!("   ✗ {}{}: {}", source, station_part, message),
                LogLevel::Warning => eprintln!("   ⚠ {}{}: {}", source, station_part, message),
                LogLevel::Info => println!("   {}", message),
                LogLevel::Debug => {} // Skip debug in non-timestamp mode
            }
        }

        // File output
        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>, console_timestamps: bool) {
    Logger::init(min_level, log_file.map(String::from), console_timestamps);
}

/// Log a general informational message
pub fn info(source: DataSource, station: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, &source, station, message);
    }
}

/// Log a warning message
pub fn warn(source: DataSource, station: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, &source, station, message);
    }
}

/// Log an error message
pub fn error(source: DataSource, station: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, &source, station, message);
    }
}

/// Log a debug message
pub fn debug(source: DataSource, station: Option<&str>, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, &source, station, message);
    }
}

// ---------------------------------------------------------------------------
// Failure Classification Helpers
// ---------------------------------------------------------------------------

/// Classify an AirKorea fetch failure based on the error text.
pub fn classify_airkorea_failure(_station: &str, error_message: &str) -> FailureType {
    // Empty item lists usually mean the station is offline or renamed;
    // the portal also drops stations during sensor maintenance windows.
    if error_message.contains("No data available") {
        FailureType::Unknown
    }
    // HTTP and transport errors indicate service issues
    else if error_message.contains("HTTP error") || error_message.contains("Request error") {
        FailureType::Unexpected
    }
    // Parse errors suggest API changes or bugs
    else if error_message.contains("Parse error") {
        FailureType::Unexpected
    }
    // Explicit service result codes are the portal telling us what's wrong
    else if error_message.contains("service error") {
        FailureType::Unexpected
    } else {
        FailureType::Unknown
    }
}

/// Log an AirKorea failure with automatic classification.
pub fn log_airkorea_failure(station: &str, operation: &str, err: &dyn std::error::Error) {
    let error_msg = err.to_string();
    let failure_type = classify_airkorea_failure(station, &error_msg);

    let message = format!("{} failed [{}]: {}", operation, failure_type, error_msg);

    match failure_type {
        FailureType::Expected => debug(DataSource::AirKorea, Some(station), &message),
        FailureType::Unexpected => error(DataSource::AirKorea, Some(station), &message),
        FailureType::Unknown => warn(DataSource::AirKorea, Some(station), &message),
    }
}

// ---------------------------------------------------------------------------
// Parse Summary Logging
// ---------------------------------------------------------------------------

/// Log how many of the fetched rows survived cleaning.
///
/// Malformed rows are dropped silently by the series builder; this summary
/// is the one place the drop count is made visible.
pub fn log_parse_summary(station: &str, requested: usize, valid: usize) {
    let message = format!(
        "Parse complete: {} of {} rows usable",
        valid, requested
    );

    if valid == requested {
        info(DataSource::AirKorea, Some(station), &message);
    } else if valid == 0 {
        error(DataSource::AirKorea, Some(station), &message);
    } else {
        warn(DataSource::AirKorea, Some(station), &message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_failure_classification() {
        let no_data = "No data available for station: 강남구";
        assert_eq!(
            classify_airkorea_failure("강남구", no_data),
            FailureType::Unknown
        );

        let http_error = "HTTP error: 500";
        assert_eq!(
            classify_airkorea_failure("강남구", http_error),
            FailureType::Unexpected
        );

        let parse_error = "Parse error: missing field `response`";
        assert_eq!(
            classify_airkorea_failure("강남구", parse_error),
            FailureType::Unexpected
        );
    }
}
