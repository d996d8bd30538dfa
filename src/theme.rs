//! Display themes and their rotation.

use crate::error::{Error, Result};
use crate::storage::{Storage, THEME_KEY};
use owo_colors::Style;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Visual theme. Cycles dark → light → blue → dark.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Blue,
}

/// Terminal styles for one theme.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    /// Running expression line (muted).
    pub expression: Style,
    /// Current operand.
    pub operand: Style,
    /// Current operand when it shows `Error` or `NaN`.
    pub error: Style,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Blue,
            Self::Blue => Self::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
            Self::Blue => "blue",
        }
    }

    /// Saved theme, or `default` when nothing usable is stored.
    pub fn load(storage: &impl Storage, default: Theme) -> Self {
        match storage.get(THEME_KEY) {
            Some(saved) => saved.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring saved theme");
                default
            }),
            None => default,
        }
    }

    pub fn save(self, storage: &mut impl Storage) -> Result<()> {
        storage.set(THEME_KEY, self.as_str())
    }

    pub fn palette(self) -> Palette {
        match self {
            Self::Dark => Palette {
                expression: Style::new().bright_black(),
                operand: Style::new().bold().bright_white(),
                error: Style::new().bold().bright_red(),
            },
            Self::Light => Palette {
                expression: Style::new().dimmed(),
                operand: Style::new().bold().black().on_bright_white(),
                error: Style::new().bold().red().on_bright_white(),
            },
            Self::Blue => Palette {
                expression: Style::new().cyan(),
                operand: Style::new().bold().bright_blue(),
                error: Style::new().bold().yellow(),
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            "blue" => Ok(Self::Blue),
            other => Err(Error::UnknownTheme(other.to_string())),
        }
    }
}
