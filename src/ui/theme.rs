//! Visual theme and styling.

use console::Style;

/// ezbp's visual theme.
#[derive(Debug, Clone)]
pub struct EzbpTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for dim/secondary text such as usage counts.
    pub dim: Style,
    /// Style for boilerplate names (bold).
    pub name: Style,
}

impl Default for EzbpTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl EzbpTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            dim: Style::new().dim(),
            name: Style::new().bold(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        Self {
            success: Style::new(),
            warning: Style::new(),
            error: Style::new(),
            dim: Style::new(),
            name: Style::new(),
        }
    }

    /// Pick the colored or plain theme for the current environment.
    pub fn detect() -> Self {
        if should_use_colors() {
            Self::new()
        } else {
            Self::plain()
        }
    }

    /// Format a success message (icon + text in green).
    pub fn format_success(&self, msg: &str) -> String {
        format!("{}", self.success.apply_to(format!("✓ {}", msg)))
    }

    /// Format a warning message (icon + text in orange).
    pub fn format_warning(&self, msg: &str) -> String {
        format!("{}", self.warning.apply_to(format!("⚠ {}", msg)))
    }

    /// Format an error message (icon + text in red bold).
    pub fn format_error(&self, msg: &str) -> String {
        format!("{}", self.error.apply_to(format!("✗ {}", msg)))
    }

    /// Format one `list` row: usage count, name, first body line.
    pub fn format_listing(&self, count: u64, name: &str, preview: &str) -> String {
        format!(
            "{} {}  {}",
            self.dim.apply_to(format!("{:>5}", count)),
            self.name.apply_to(name),
            self.dim.apply_to(preview)
        )
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env var (https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Status output goes to stderr
    console::Term::stderr().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_formats_success() {
        let msg = EzbpTheme::plain().format_success("Added");
        assert_eq!(msg, "✓ Added");
    }

    #[test]
    fn theme_formats_warning() {
        let msg = EzbpTheme::plain().format_warning("Caution");
        assert!(msg.contains("⚠"));
        assert!(msg.contains("Caution"));
    }

    #[test]
    fn theme_formats_error() {
        let msg = EzbpTheme::plain().format_error("Failed");
        assert!(msg.contains("✗"));
        assert!(msg.contains("Failed"));
    }

    #[test]
    fn theme_formats_listing() {
        let msg = EzbpTheme::plain().format_listing(7, "sig", "-- Ada");
        assert_eq!(msg, "    7 sig  -- Ada");
    }

    #[test]
    fn default_impl_matches_new() {
        assert_eq!(
            EzbpTheme::default().format_success("test"),
            EzbpTheme::new().format_success("test")
        );
    }
}
