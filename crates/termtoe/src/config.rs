//! Front-end configuration loaded from TOML.

use crate::ui::Theme;
use derive_getters::Getters;
use derive_more::{Display, Error};
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "termtoe.toml";

/// Settings for the terminal front end.
///
/// Every field is optional in the file; missing ones take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TuiConfig {
    /// Where log output goes. The terminal itself is owned by the game.
    log_file: PathBuf,

    /// Also accept `h`, `j`, `k`, `l` for cursor movement.
    vim_keys: bool,

    /// Colours for marks and the cursor.
    theme: ThemeConfig,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            log_file: PathBuf::from("termtoe.log"),
            vim_keys: true,
            theme: ThemeConfig::default(),
        }
    }
}

impl TuiConfig {
    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.theme.resolve()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::parse(&content)?;
        info!(log_file = %config.log_file.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise falls back to defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Loads an explicitly requested file, or the default file if present.
    ///
    /// An explicit path that cannot be read is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => Self::from_file_or_default(DEFAULT_CONFIG_FILE),
        }
    }

    /// Replaces the log file location.
    pub fn with_log_file(mut self, log_file: PathBuf) -> Self {
        self.log_file = log_file;
        self
    }

    /// Enables or disables the `h/j/k/l` bindings.
    pub fn with_vim_keys(mut self, vim_keys: bool) -> Self {
        self.vim_keys = vim_keys;
        self
    }
}

/// Colour names as written in the config file.
///
/// Accepts anything ratatui parses as a [`Color`]: names such as `"blue"`,
/// hex `"#5f5faf"`, or a 256-colour index such as `"61"`.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThemeConfig {
    /// Foreground of the highlighted square.
    cursor_fg: String,
    /// Background of the highlighted square.
    cursor_bg: String,
    /// Colour of X marks.
    x: String,
    /// Colour of O marks.
    o: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            cursor_fg: "white".to_string(),
            cursor_bg: "61".to_string(),
            x: "blue".to_string(),
            o: "red".to_string(),
        }
    }
}

impl ThemeConfig {
    /// Turns colour names into render styles.
    #[instrument(skip(self))]
    pub fn resolve(&self) -> Result<Theme, ConfigError> {
        let cursor = Style::default()
            .fg(parse_color("cursor_fg", &self.cursor_fg)?)
            .bg(parse_color("cursor_bg", &self.cursor_bg)?)
            .add_modifier(Modifier::BOLD);
        let bold = Style::default().add_modifier(Modifier::BOLD);
        Ok(Theme {
            cursor,
            x: bold.fg(parse_color("x", &self.x)?),
            o: bold.fg(parse_color("o", &self.o)?),
            ..Theme::default()
        })
    }
}

fn parse_color(field: &str, value: &str) -> Result<Color, ConfigError> {
    value
        .parse::<Color>()
        .map_err(|_| ConfigError::new(format!("Invalid colour for {}: {:?}", field, value)))
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config = TuiConfig::parse("").unwrap();
        assert_eq!(config, TuiConfig::default());
        assert!(*config.vim_keys());
        assert_eq!(config.log_file(), &PathBuf::from("termtoe.log"));
    }

    #[test]
    fn test_overrides() {
        let config = TuiConfig::parse(
            r##"
            log_file = "/tmp/game.log"
            vim_keys = false

            [theme]
            cursor_bg = "#5f5faf"
            x = "green"
            "##,
        )
        .unwrap();
        assert!(!*config.vim_keys());
        assert_eq!(config.log_file(), &PathBuf::from("/tmp/game.log"));
        assert_eq!(config.theme().x(), "green");
        assert_eq!(config.theme().o(), "red");

        let theme = config.theme().resolve().unwrap();
        assert_eq!(theme.cursor.bg, Some(Color::Rgb(0x5f, 0x5f, 0xaf)));
        assert_eq!(theme.x.fg, Some(Color::Green));
    }

    #[test]
    fn test_default_cursor_is_indexed() {
        let theme = ThemeConfig::default().resolve().unwrap();
        assert_eq!(theme.cursor.bg, Some(Color::Indexed(61)));
    }

    #[test]
    fn test_invalid_colour_rejected() {
        let err = TuiConfig::parse("[theme]\no = \"not-a-colour\"").unwrap_err();
        assert!(err.message.contains("Invalid colour for o"), "{err}");
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(TuiConfig::parse("board_size = 4").is_err());
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "vim_keys = false").unwrap();
        let config = TuiConfig::from_file(file.path()).unwrap();
        assert!(!*config.vim_keys());
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(TuiConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_missing_default_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = TuiConfig::from_file_or_default(dir.path().join(DEFAULT_CONFIG_FILE)).unwrap();
        assert_eq!(config, TuiConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = TuiConfig::default()
            .with_log_file(PathBuf::from("other.log"))
            .with_vim_keys(false);
        assert_eq!(config.log_file(), &PathBuf::from("other.log"));
        assert!(!*config.vim_keys());
    }
}
