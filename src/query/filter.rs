//! Optional predicates over ship attributes.

use serde::{Deserialize, Serialize};

use crate::ship::{Ship, ShipType};

/// Criteria a ship must meet to stay in a query result.
///
/// `None` means "no constraint". Present criteria are combined with AND.
/// Range bounds are inclusive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipFilter {
    /// Case-sensitive substring of the name
    pub name: Option<String>,
    /// Case-sensitive substring of the planet
    pub planet: Option<String>,
    pub ship_type: Option<ShipType>,
    /// Earliest production date, epoch millis
    pub after: Option<i64>,
    /// Latest production date, epoch millis
    pub before: Option<i64>,
    pub is_used: Option<bool>,
    pub min_speed: Option<f64>,
    pub max_speed: Option<f64>,
    pub min_crew_size: Option<i64>,
    pub max_crew_size: Option<i64>,
    pub min_rating: Option<f64>,
    pub max_rating: Option<f64>,
}

impl ShipFilter {
    /// True when no criterion is set.
    pub fn is_empty(&self) -> bool {
        *self == ShipFilter::default()
    }

    /// Whether `ship` satisfies every present criterion.
    pub fn matches(&self, ship: &Ship) -> bool {
        if let Some(name) = &self.name {
            if !ship.name.contains(name.as_str()) {
                return false;
            }
        }

        if let Some(planet) = &self.planet {
            if !ship.planet.contains(planet.as_str()) {
                return false;
            }
        }

        if let Some(ship_type) = self.ship_type {
            if ship.ship_type != ship_type {
                return false;
            }
        }

        let millis = ship.prod_millis();
        if self.after.is_some_and(|after| millis < after) {
            return false;
        }
        if self.before.is_some_and(|before| millis > before) {
            return false;
        }

        if self.is_used.is_some_and(|used| ship.used != used) {
            return false;
        }

        within(ship.speed, self.min_speed, self.max_speed)
            && within(
                i64::from(ship.crew_size),
                self.min_crew_size,
                self.max_crew_size,
            )
            && within(ship.rating, self.min_rating, self.max_rating)
    }

    /// Drop every ship that does not match, keeping the order of the rest.
    pub fn apply(&self, ships: &mut Vec<Ship>) {
        if self.is_empty() {
            return;
        }
        ships.retain(|ship| self.matches(ship));
    }
}

/// Keeps `value` only when it satisfies each present bound. A NaN bound is
/// satisfied by nothing.
fn within<T: PartialOrd>(value: T, min: Option<T>, max: Option<T>) -> bool {
    min.map_or(true, |min| value >= min) && max.map_or(true, |max| value <= max)
}
