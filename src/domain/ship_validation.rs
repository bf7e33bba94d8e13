//! Pure validation and normalization of ship records.
//!
//! Both entry points work on values and never touch storage. An update is
//! built on a copy of the existing record, so a rejected update leaves the
//! caller's record as it was.

use crate::error::{Result, ShipError};
use crate::ship::rating::CURRENT_YEAR;
use crate::ship::{compute_rating, year_of, Ship, ShipDraft, ShipId};

use chrono::{DateTime, Utc};

pub const MAX_TEXT_LEN: usize = 50;
pub const MIN_SPEED: f64 = 0.01;
pub const MAX_SPEED: f64 = 0.99;
pub const MIN_CREW_SIZE: i64 = 1;
pub const MAX_CREW_SIZE: i64 = 9999;
pub const MIN_PROD_YEAR: i32 = 2800;
pub const MAX_PROD_YEAR: i32 = CURRENT_YEAR;

/// Validate a candidate for creation and turn it into a ship record.
///
/// `name`, `planet`, `ship_type`, `prod_date`, `speed` and `crew_size` are
/// required. A missing `used` flag becomes `false`. The rating is always
/// computed here; any rating on the draft is dropped.
///
/// # Returns
///
/// An unsaved [`Ship`] (`id` is `None`).
pub fn normalize_for_create(draft: &ShipDraft) -> Result<Ship> {
    let name = required(draft.name.as_deref(), "name")?;
    let planet = required(draft.planet.as_deref(), "planet")?;
    let ship_type = required(draft.ship_type, "shipType")?;
    let prod_date = required(draft.prod_date, "prodDate")?;
    let speed = required(draft.speed, "speed")?;
    let crew_size = required(draft.crew_size, "crewSize")?;

    check_text("name", name)?;
    check_text("planet", planet)?;
    check_speed(speed)?;
    let crew_size = check_crew_size(crew_size)?;
    check_prod_date(&prod_date)?;

    let mut ship = Ship {
        id: None,
        name: name.to_string(),
        planet: planet.to_string(),
        ship_type,
        prod_date,
        used: draft.used.unwrap_or(false),
        speed,
        crew_size,
        rating: 0.0,
    };
    ship.rating = compute_rating(&ship);

    Ok(ship)
}

/// Apply the fields present on `draft` to a copy of `existing`.
///
/// Each provided field is checked with the same rule as on create; absent
/// fields keep their current value. `ship_type` and `used` have no range and
/// replace unconditionally. The rating is recomputed from the result even
/// when nothing changed.
pub fn normalize_for_update(existing: &Ship, draft: &ShipDraft) -> Result<Ship> {
    let mut ship = existing.clone();

    if let Some(name) = &draft.name {
        check_text("name", name)?;
        ship.name = name.clone();
    }

    if let Some(planet) = &draft.planet {
        check_text("planet", planet)?;
        ship.planet = planet.clone();
    }

    if let Some(ship_type) = draft.ship_type {
        ship.ship_type = ship_type;
    }

    if let Some(used) = draft.used {
        ship.used = used;
    }

    if let Some(prod_date) = draft.prod_date {
        check_prod_date(&prod_date)?;
        ship.prod_date = prod_date;
    }

    if let Some(speed) = draft.speed {
        check_speed(speed)?;
        ship.speed = speed;
    }

    if let Some(crew_size) = draft.crew_size {
        ship.crew_size = check_crew_size(crew_size)?;
    }

    ship.rating = compute_rating(&ship);

    Ok(ship)
}

/// Whether `id` is present and positive.
pub fn is_valid_id(id: Option<i64>) -> bool {
    matches!(id, Some(id) if id > 0)
}

/// Check an identifier and convert it to a [`ShipId`].
///
/// Existence in storage is not checked here.
pub fn check_id(id: Option<i64>) -> Result<ShipId> {
    match id {
        Some(id) if id > 0 => Ok(id as ShipId),
        Some(id) => Err(ShipError::invalid(format!(
            "id must be a positive integer, got {}",
            id
        ))),
        None => Err(ShipError::invalid("id is required")),
    }
}

/// Parse an identifier as received from outside (path segment, CLI arg).
///
/// Integral numbers written with a zero fraction (`"4.0"`) are accepted;
/// anything with a fractional part, non-numeric or not positive is rejected.
pub fn parse_id(raw: &str) -> Result<ShipId> {
    let raw = raw.trim();

    if let Ok(id) = raw.parse::<i64>() {
        return check_id(Some(id));
    }

    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() && value.fract() == 0.0 && value <= i64::MAX as f64 => {
            check_id(Some(value as i64))
        }
        _ => Err(ShipError::invalid(format!(
            "id must be a positive integer, got '{}'",
            raw
        ))),
    }
}

fn required<T>(value: Option<T>, field: &str) -> Result<T> {
    value.ok_or_else(|| ShipError::invalid(format!("{} is required", field)))
}

/// Length is counted in characters, not bytes.
fn check_text(field: &str, value: &str) -> Result<()> {
    let len = value.chars().count();
    if len == 0 || len > MAX_TEXT_LEN {
        return Err(ShipError::invalid(format!(
            "{} must be 1-{} characters, got {}",
            field, MAX_TEXT_LEN, len
        )));
    }
    Ok(())
}

fn check_speed(speed: f64) -> Result<()> {
    // NaN fails the range test
    if !(MIN_SPEED..=MAX_SPEED).contains(&speed) {
        return Err(ShipError::invalid(format!(
            "speed must be within {}-{}, got {}",
            MIN_SPEED, MAX_SPEED, speed
        )));
    }
    Ok(())
}

fn check_crew_size(crew_size: i64) -> Result<u32> {
    if !(MIN_CREW_SIZE..=MAX_CREW_SIZE).contains(&crew_size) {
        return Err(ShipError::invalid(format!(
            "crewSize must be within {}-{}, got {}",
            MIN_CREW_SIZE, MAX_CREW_SIZE, crew_size
        )));
    }
    Ok(crew_size as u32)
}

fn check_prod_date(prod_date: &DateTime<Utc>) -> Result<()> {
    let year = year_of(prod_date);
    if !(MIN_PROD_YEAR..=MAX_PROD_YEAR).contains(&year) {
        return Err(ShipError::invalid(format!(
            "prodDate year must be within {}-{}, got {}",
            MIN_PROD_YEAR, MAX_PROD_YEAR, year
        )));
    }
    Ok(())
}
