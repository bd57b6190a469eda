use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::I18nError;

/// Supported display languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Locale {
    /// English, the default
    #[default]
    En = 0,
    /// Tamil
    Ta = 1,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ta];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ta => "ta",
        }
    }

    /// Case-insensitive parse that tolerates region tags (`ta-IN`, `en_GB`)
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        let language = value
            .split(|c| c == '-' || c == '_')
            .next()
            .unwrap_or(value);

        match language.to_ascii_lowercase().as_str() {
            "en" => Some(Locale::En),
            "ta" => Some(Locale::Ta),
            _ => None,
        }
    }

    pub(crate) fn from_u8(value: u8) -> Self {
        match value {
            1 => Locale::Ta,
            _ => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Locale::parse(s).ok_or_else(|| I18nError::UnsupportedLocale(s.to_string()))
    }
}
