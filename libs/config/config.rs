use serde_derive::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DisplayConfig {
    /// Locale used to format dates, e.g. "en_US" or "fr_FR" (default: en_US)
    pub locale: Option<String>,

    /// One of "short", "medium", "long" or "full" (default: long)
    pub date_style: Option<String>,
}

impl DisplayConfig {
    /// Values set on `other` take precedence over the ones in `self`.
    pub fn merge(self, other: DisplayConfig) -> DisplayConfig {
        DisplayConfig {
            locale: other.locale.or(self.locale),
            date_style: other.date_style.or(self.date_style),
        }
    }
}
