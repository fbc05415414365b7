//! Human readable, locale aware dates.

use std::str::FromStr;

use chrono::{Locale, NaiveDate};
use hobby_config::DisplayConfig;
use strum_macros::{Display, EnumString};

use crate::{Error, Result};

pub const DEFAULT_LOCALE: &str = "en_US";

/// Locales writing the month before the day.
const MONTH_FIRST_LOCALES: &[&str] = &["en_US", "en_CA", "en_PH"];

/// How much of the date is spelled out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, EnumString)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DateStyle {
    /// 1/15/24
    Short,
    /// Jan 15, 2024
    Medium,
    /// January 15, 2024
    #[default]
    Long,
    /// Monday, January 15, 2024
    Full,
}

#[derive(Debug, Clone)]
pub struct DateFormatter {
    locale: Locale,
    locale_name: String,
    style: DateStyle,
}

impl Default for DateFormatter {
    fn default() -> Self {
        Self {
            locale: Locale::en_US,
            locale_name: DEFAULT_LOCALE.to_owned(),
            style: DateStyle::default(),
        }
    }
}

impl DateFormatter {
    pub fn new(locale_name: &str, style: DateStyle) -> Result<Self> {
        let locale = Locale::try_from(locale_name)
            .map_err(|_| Error::UnknownLocale(locale_name.to_owned()))?;

        Ok(Self {
            locale,
            locale_name: locale_name.to_owned(),
            style,
        })
    }

    /// Builds a formatter from the `[display]` section, unset values fall
    /// back to en_US and the long style.
    pub fn from_config(config: &DisplayConfig) -> Result<Self> {
        let style = match config.date_style.as_deref() {
            Some(name) => DateStyle::from_str(name)
                .map_err(|_| Error::UnknownDateStyle(name.to_owned()))?,
            None => DateStyle::default(),
        };
        let locale = config.locale.as_deref().unwrap_or(DEFAULT_LOCALE);

        Self::new(locale, style)
    }

    pub fn locale_name(&self) -> &str {
        &self.locale_name
    }

    pub fn style(&self) -> DateStyle {
        self.style
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format_localized(self.pattern(), self.locale).to_string()
    }

    fn pattern(&self) -> &'static str {
        let month_first = MONTH_FIRST_LOCALES.contains(&self.locale_name.as_str());
        match (self.style, month_first) {
            (DateStyle::Short, true) => "%-m/%-d/%y",
            (DateStyle::Medium, true) => "%b %-d, %Y",
            (DateStyle::Long, true) => "%B %-d, %Y",
            (DateStyle::Full, true) => "%A, %B %-d, %Y",
            (DateStyle::Short, false) => "%d/%m/%Y",
            (DateStyle::Medium, false) => "%-d %b %Y",
            (DateStyle::Long, false) => "%-d %B %Y",
            (DateStyle::Full, false) => "%A %-d %B %Y",
        }
    }
}
