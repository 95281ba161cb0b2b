//! Method name representation
//!
//! Koans that inspect an object's method list compare against names in one
//! of two representations. The style is resolved once at startup and then
//! carried by value; nothing re-checks it per call.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How method names are rendered (`each` vs `:each`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NameStyle {
    /// Plain strings: `each`
    String,
    /// Symbols: `:each`
    #[default]
    Symbol,
}

impl NameStyle {
    /// Render a bare method name in this style
    pub fn render(self, name: &str) -> String {
        match self {
            NameStyle::String => name.to_string(),
            NameStyle::Symbol => format!(":{}", name),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NameStyle::String => "string",
            NameStyle::Symbol => "symbol",
        }
    }
}

impl fmt::Display for NameStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NameStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "string" | "str" => Ok(NameStyle::String),
            "symbol" | "sym" => Ok(NameStyle::Symbol),
            other => Err(ConfigError::InvalidValue {
                field: "names.style".to_string(),
                reason: format!("must be 'string' or 'symbol', got '{}'", other),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_styles() {
        assert_eq!(NameStyle::String.render("each"), "each");
        assert_eq!(NameStyle::Symbol.render("each"), ":each");
    }

    #[test]
    fn test_parse_style() {
        assert_eq!("string".parse::<NameStyle>().unwrap(), NameStyle::String);
        assert_eq!(" Symbol ".parse::<NameStyle>().unwrap(), NameStyle::Symbol);
        assert!("atom".parse::<NameStyle>().is_err());
    }

    #[test]
    fn test_default_is_symbol() {
        assert_eq!(NameStyle::default(), NameStyle::Symbol);
    }
}
