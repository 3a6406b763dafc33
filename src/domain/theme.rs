//! Cosmetic themes

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Cosmetic theme, persisted by its kebab-case name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    CherryBlossom,
    NightSky,
    Forest,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::CherryBlossom, Theme::NightSky, Theme::Forest];

    /// Stored name of the theme
    pub fn name(&self) -> &'static str {
        match self {
            Theme::CherryBlossom => "cherry-blossom",
            Theme::NightSky => "night-sky",
            Theme::Forest => "forest",
        }
    }

    /// Icon shown on the theme toggle
    pub fn icon(&self) -> &'static str {
        match self {
            Theme::CherryBlossom => "leaf",
            Theme::NightSky => "moon",
            Theme::Forest => "tree",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Theme::ALL
            .into_iter()
            .find(|theme| theme.name() == wanted)
            .ok_or_else(|| {
                format!(
                    "Invalid theme: '{}'. Valid themes are: cherry-blossom, night-sky, forest",
                    s
                )
            })
    }
}
