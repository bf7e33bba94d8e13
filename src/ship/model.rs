//! The stored ship record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShipError;

/// Identifier assigned by storage on first save.
pub type ShipId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipType {
    Transport,
    Military,
    Merchant,
}

impl ShipType {
    pub const ALL: [ShipType; 3] = [ShipType::Transport, ShipType::Military, ShipType::Merchant];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShipType::Transport => "TRANSPORT",
            ShipType::Military => "MILITARY",
            ShipType::Merchant => "MERCHANT",
        }
    }
}

impl fmt::Display for ShipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ShipType {
    type Err = ShipError;

    /// Case-insensitive; accepts the serialized names only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShipType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                ShipError::invalid(format!(
                    "unknown ship type '{}' (expected TRANSPORT, MILITARY or MERCHANT)",
                    s
                ))
            })
    }
}

/// A validated ship record.
///
/// `id` is `None` until the record has been saved. `rating` is derived from
/// `speed`, `used` and the production year and is never set by callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ship {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<ShipId>,
    pub name: String,
    pub planet: String,
    pub ship_type: ShipType,
    /// Serialized as epoch milliseconds.
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub prod_date: DateTime<Utc>,
    #[serde(rename = "isUsed")]
    pub used: bool,
    pub speed: f64,
    pub crew_size: u32,
    pub rating: f64,
}

impl Ship {
    /// Production date as epoch milliseconds.
    pub fn prod_millis(&self) -> i64 {
        self.prod_date.timestamp_millis()
    }
}
