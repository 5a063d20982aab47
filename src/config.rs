// Configuration for lexicount analysis host and UI components

use std::path::PathBuf;

/// Results display configuration
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayConfig {
    /// Rows the result panels move per PageUp/PageDown
    pub scroll_step: u16,

    /// Show the activity console at startup
    pub show_activity: bool,

    /// Activity console height in rows
    pub activity_rows: u16,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            scroll_step: 5,
            show_activity: false,
            activity_rows: 8,
        }
    }
}

/// Activity log configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ActivityConfig {
    /// Entries retained in memory (oldest dropped first)
    pub capacity: usize,

    /// Title recorded with the startup page view
    pub title: String,
}

impl Default for ActivityConfig {
    fn default() -> Self {
        Self {
            capacity: 200,
            title: "lexicount".to_string(),
        }
    }
}

/// Logging configuration; the TUI owns stdout so logs go to a file
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingConfig {
    /// Destination file (default: lexicount.log in the temp dir)
    pub file: PathBuf,

    /// Filter directive used when RUST_LOG is unset
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: std::env::temp_dir().join("lexicount.log"),
            level: "info".to_string(),
        }
    }
}

/// Master configuration combining all lexicount settings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    pub display: DisplayConfig,
    pub activity: ActivityConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.display.scroll_step, 5);
        assert!(!config.display.show_activity);
        assert_eq!(config.activity.capacity, 200);
        assert_eq!(config.logging.level, "info");
        assert!(config.logging.file.ends_with("lexicount.log"));
    }
}
