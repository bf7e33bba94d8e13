//! The derived ship rating.
//!
//! ```text
//! rating = round2( 80 * speed * k / (3019 - year + 1) )
//! k      = 0.5 for used ships, 1.0 otherwise
//! ```
//!
//! `year` is bounded to `2800..=3019` by validation, so the denominator is
//! at least 1.

use super::date::year_of;
use super::model::Ship;

/// Last production year a ship may have. Also the reference year of the
/// rating formula.
pub const CURRENT_YEAR: i32 = 3019;

const USED_COEFFICIENT: f64 = 0.5;
const NEW_COEFFICIENT: f64 = 1.0;

/// Rating of `ship`, computed from its speed, used flag and production year.
/// Any stored rating is ignored.
pub fn compute_rating(ship: &Ship) -> f64 {
    rating_for(ship.speed, ship.used, year_of(&ship.prod_date))
}

pub fn rating_for(speed: f64, used: bool, year: i32) -> f64 {
    let k = if used {
        USED_COEFFICIENT
    } else {
        NEW_COEFFICIENT
    };
    let age = f64::from(CURRENT_YEAR - year + 1);
    round_hundredths((80.0 * speed * k) / age)
}

/// Round to two decimals, ties toward positive infinity.
fn round_hundredths(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}
