//! User preferences: theme and private mode

use crate::domain::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Preferences {
    pub theme: Theme,
    pub private_mode: bool,
}

impl Preferences {
    /// Flip private mode and return the new value
    pub fn toggle_private_mode(&mut self) -> bool {
        self.private_mode = !self.private_mode;
        self.private_mode
    }

    /// Icon and title of the private-mode toggle
    pub fn private_toggle_label(&self) -> (&'static str, &'static str) {
        if self.private_mode {
            ("eye-slash", "Show Diary")
        } else {
            ("eye", "Private Mode")
        }
    }
}

/// Parse a stored private-mode flag. Only the exact string "true" enables it.
pub fn parse_private_flag(value: &str) -> bool {
    value == "true"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_private_mode() {
        let mut prefs = Preferences::default();
        assert!(!prefs.private_mode);
        assert!(prefs.toggle_private_mode());
        assert_eq!(prefs.private_toggle_label(), ("eye-slash", "Show Diary"));
        assert!(!prefs.toggle_private_mode());
        assert_eq!(prefs.private_toggle_label(), ("eye", "Private Mode"));
    }

    #[test]
    fn test_parse_private_flag() {
        assert!(parse_private_flag("true"));
        assert!(!parse_private_flag("false"));
        assert!(!parse_private_flag("TRUE"));
        assert!(!parse_private_flag(""));
    }
}
