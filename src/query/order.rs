//! Sort keys for query results.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ShipError;
use crate::ship::Ship;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipOrder {
    Id,
    Speed,
    Date,
    Rating,
}

impl ShipOrder {
    /// Ascending comparison on this key alone; there is no secondary key.
    pub fn compare(&self, a: &Ship, b: &Ship) -> Ordering {
        match self {
            ShipOrder::Id => a.id.cmp(&b.id),
            ShipOrder::Speed => a.speed.total_cmp(&b.speed),
            ShipOrder::Date => a.prod_date.cmp(&b.prod_date),
            ShipOrder::Rating => a.rating.total_cmp(&b.rating),
        }
    }

    /// Stable ascending sort: ships with equal keys keep their relative order.
    pub fn sort(&self, ships: &mut [Ship]) {
        ships.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for ShipOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipOrder::Id => write!(f, "ID"),
            ShipOrder::Speed => write!(f, "SPEED"),
            ShipOrder::Date => write!(f, "DATE"),
            ShipOrder::Rating => write!(f, "RATING"),
        }
    }
}

impl FromStr for ShipOrder {
    type Err = ShipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" => Ok(ShipOrder::Id),
            "speed" => Ok(ShipOrder::Speed),
            "date" => Ok(ShipOrder::Date),
            "rating" => Ok(ShipOrder::Rating),
            _ => Err(ShipError::invalid(format!(
                "unknown order '{}' (expected ID, SPEED, DATE or RATING)",
                s
            ))),
        }
    }
}
