// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::fmt;
use std::num::NonZeroU32;

use serde::de;

use crate::{EventKind, TimeOfDayRange, event::DEFAULT_MIN_BLOCK_MINUTES};

/// The name of the application.
pub const APP_NAME: &str = "meetslot";

/// Defaults applied to new event drafts.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
pub struct Config {
    /// Shortest time block participants may select.
    #[serde(default = "default_min_block", deserialize_with = "deserialize_min_block")]
    pub min_block_minutes: NonZeroU32,

    /// Kind of event a new draft starts as.
    #[serde(default)]
    pub default_kind: EventKind,

    /// Range given to every selected day when none is requested.
    #[serde(default, deserialize_with = "deserialize_range")]
    pub default_range: Option<TimeOfDayRange>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_block_minutes: DEFAULT_MIN_BLOCK_MINUTES,
            default_kind: EventKind::default(),
            default_range: None,
        }
    }
}

fn default_min_block() -> NonZeroU32 {
    DEFAULT_MIN_BLOCK_MINUTES
}

fn deserialize_min_block<'de, D>(deserializer: D) -> Result<NonZeroU32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct MinBlockVisitor;

    impl de::Visitor<'_> for MinBlockVisitor {
        type Value = NonZeroU32;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str(
                r#"a positive number of minutes or a duration like "30m", "1h" or "01:30""#,
            )
        }

        fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u32::try_from(value)
                .ok()
                .and_then(NonZeroU32::new)
                .ok_or_else(|| de::Error::invalid_value(de::Unexpected::Unsigned(value), &self))
        }

        fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            u64::try_from(value)
                .map_err(|_| de::Error::invalid_value(de::Unexpected::Signed(value), &self))
                .and_then(|v| self.visit_u64(v))
        }

        fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            parse_minutes(value).map_err(|e| de::Error::custom(e.to_string()))
        }
    }

    deserializer.deserialize_any(MinBlockVisitor)
}

fn deserialize_range<'de, D>(deserializer: D) -> Result<Option<TimeOfDayRange>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    value
        .map(|s| s.parse().map_err(de::Error::custom))
        .transpose()
}

/// Parse a duration string in the format "HH:MM" / "2h" / "45m" into minutes.
fn parse_minutes(s: &str) -> Result<NonZeroU32, Box<dyn Error>> {
    let s = s.trim();
    let minutes: u32 = if let Some((h, m)) = s.split_once(':') {
        let hours: u32 = h.trim().parse()?;
        let minutes: u32 = m.trim().parse()?;
        if minutes >= 60 {
            return Err(format!("Minutes must be below 60: {s}").into());
        }
        hours
            .checked_mul(60)
            .and_then(|v| v.checked_add(minutes))
            .ok_or_else(|| format!("Duration too long: {s}"))?
    } else if let Some(rest) = s.strip_suffix('h') {
        let hours: u32 = rest.trim().parse()?;
        hours
            .checked_mul(60)
            .ok_or_else(|| format!("Duration too long: {s}"))?
    } else if let Some(rest) = s.strip_suffix('m') {
        rest.trim().parse()?
    } else {
        return Err(format!("Invalid duration format: {s}").into());
    };
    NonZeroU32::new(minutes).ok_or_else(|| "Block length must be positive".into())
}
