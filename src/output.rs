//! # Output Configuration
//!
//! Controls whether status lines use emoji glyphs or plain-text markers.
//!
//! ## Respecting User Preferences
//!
//! - `--color=never|always|auto` - CLI flag for color control
//! - `NO_COLOR` - Disables colors when set (per https://no-color.org/)
//! - `CLICOLOR=0` - Disables colors
//! - `CLICOLOR_FORCE=1` - Forces colors even in non-TTY
//! - `TERM=dumb` - Disables colors for dumb terminals

use std::env;

/// The value of the `--color` flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect from the environment and terminal.
    #[default]
    Auto,
    /// Always decorate output.
    Always,
    /// Never decorate output.
    Never,
}

/// Output configuration for controlling emoji decoration.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
}

impl OutputConfig {
    pub fn new(choice: ColorChoice) -> Self {
        let use_color = match choice {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => detect_color_support(),
        };
        Self { use_color }
    }

    /// Marker for a completed action.
    pub fn ok(&self) -> &'static str {
        self.pick("✅", "[OK]")
    }

    /// Marker for an item that was skipped or failed.
    pub fn warn(&self) -> &'static str {
        self.pick("⚠️ ", "[WARN]")
    }

    /// Marker for a link added to a collection.
    pub fn link(&self) -> &'static str {
        self.pick("🔗", "[LINK]")
    }

    fn pick(&self, emoji: &'static str, plain: &'static str) -> &'static str {
        if self.use_color {
            emoji
        } else {
            plain
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self::new(ColorChoice::Auto)
    }
}

fn detect_color_support() -> bool {
    // The presence of the variable (even if empty) disables colors
    if env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if env::var("CLICOLOR").is_ok_and(|v| v == "0") {
        return false;
    }
    if env::var("CLICOLOR_FORCE").is_ok_and(|v| v != "0" && !v.is_empty()) {
        return true;
    }
    if env::var("TERM").is_ok_and(|v| v == "dumb") {
        return false;
    }
    console::Term::stdout().features().colors_supported()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_color_always() {
        let config = OutputConfig::new(ColorChoice::Always);
        assert!(config.use_color);
        assert_eq!(config.ok(), "✅");
    }

    #[test]
    fn test_color_never() {
        let config = OutputConfig::new(ColorChoice::Never);
        assert!(!config.use_color);
        assert_eq!(config.ok(), "[OK]");
        assert_eq!(config.warn(), "[WARN]");
        assert_eq!(config.link(), "[LINK]");
    }

    #[test]
    #[serial]
    fn test_no_color_disables_auto() {
        env::set_var("NO_COLOR", "1");
        let config = OutputConfig::new(ColorChoice::Auto);
        env::remove_var("NO_COLOR");
        assert!(!config.use_color);
    }
}
