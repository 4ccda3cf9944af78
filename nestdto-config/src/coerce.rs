//! Total coercions from raw option values to typed values.
//!
//! Every function takes the raw value (`None` when the option is absent)
//! and a default used whenever the raw value does not carry a usable value.

use crate::{Error, NamingStyle, RawOption, Result};

/// Option key holding the file naming style.
pub const FILE_NAMING_STYLE: &str = "fileNamingStyle";

/// Default file naming style name.
pub const DEFAULT_FILE_NAMING_STYLE: &str = "camel";

/// Coerce to a boolean.
///
/// Only the exact strings `"true"` and `"false"` are recognized; anything
/// else, sequences included, yields `default`.
pub fn option_to_bool(input: Option<&RawOption>, default: bool) -> bool {
    match input {
        Some(RawOption::Single(s)) if s == "true" => true,
        Some(RawOption::Single(s)) if s == "false" => false,
        _ => default,
    }
}

/// Coerce to a string.
///
/// A sequence yields its first element; an absent value (or an empty
/// sequence) yields `default`.
pub fn option_to_string(input: Option<&RawOption>, default: &str) -> String {
    match input {
        Some(RawOption::Single(s)) => s.clone(),
        Some(RawOption::Multiple(values)) => values
            .first()
            .cloned()
            .unwrap_or_else(|| default.to_string()),
        None => default.to_string(),
    }
}

/// Coerce to a [`NamingStyle`].
///
/// # Errors
///
/// Returns [`Error::InvalidConfigValue`] when the resolved string is not one
/// of the supported styles.
pub fn option_to_file_naming_style(
    input: Option<&RawOption>,
    default: &str,
) -> Result<NamingStyle> {
    let name = option_to_string(input, default);
    name.parse().map_err(|_| {
        Error::invalid_value(
            FILE_NAMING_STYLE,
            "file naming style",
            name,
            &NamingStyle::NAMES,
        )
    })
}
