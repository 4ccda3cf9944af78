//! File naming styles for generated modules.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Naming style applied to generated file names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NamingStyle {
    /// `user-profile`
    Kebab,
    /// `userProfile`
    #[default]
    Camel,
    /// `UserProfile`
    Pascal,
    /// `user_profile`
    Snake,
}

impl NamingStyle {
    /// All styles, in the order they are listed to users.
    pub const ALL: [NamingStyle; 4] = [
        NamingStyle::Kebab,
        NamingStyle::Camel,
        NamingStyle::Pascal,
        NamingStyle::Snake,
    ];

    /// Names accepted by [`FromStr`].
    pub const NAMES: [&'static str; 4] = ["kebab", "camel", "pascal", "snake"];

    /// Returns the style identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            NamingStyle::Kebab => "kebab",
            NamingStyle::Camel => "camel",
            NamingStyle::Pascal => "pascal",
            NamingStyle::Snake => "snake",
        }
    }
}

impl fmt::Display for NamingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NamingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NamingStyle::ALL
            .into_iter()
            .find(|style| style.as_str() == s)
            .ok_or_else(|| format!("unknown naming style '{}'", s))
    }
}
