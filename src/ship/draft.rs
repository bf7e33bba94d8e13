//! Candidate ship records supplied by callers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::ShipType;

/// A ship as submitted for create or update.
///
/// Every field is optional: on create the required ones are checked by
/// [`crate::domain::normalize_for_create`], on update an absent field means
/// "leave unchanged". `rating` is accepted so payloads round-trip, but it is
/// always discarded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShipDraft {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub planet: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ship_type: Option<ShipType>,
    #[serde(
        default,
        with = "chrono::serde::ts_milliseconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub prod_date: Option<DateTime<Utc>>,
    #[serde(
        default,
        rename = "isUsed",
        alias = "used",
        skip_serializing_if = "Option::is_none"
    )]
    pub used: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Signed so that negative input reaches validation instead of failing
    /// to decode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crew_size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
}

impl ShipDraft {
    /// True when no field is provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.planet.is_none()
            && self.ship_type.is_none()
            && self.prod_date.is_none()
            && self.used.is_none()
            && self.speed.is_none()
            && self.crew_size.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_partial_payload() {
        let draft: ShipDraft = serde_json::from_str(r#"{"name":"Nova","speed":0.3}"#).unwrap();
        assert_eq!(draft.name.as_deref(), Some("Nova"));
        assert_eq!(draft.speed, Some(0.3));
        assert!(draft.planet.is_none());
        assert!(draft.prod_date.is_none());
    }

    #[test]
    fn test_used_accepts_both_spellings() {
        let a: ShipDraft = serde_json::from_str(r#"{"isUsed":true}"#).unwrap();
        let b: ShipDraft = serde_json::from_str(r#"{"used":true}"#).unwrap();
        assert_eq!(a.used, Some(true));
        assert_eq!(b.used, Some(true));
    }

    #[test]
    fn test_is_empty_ignores_rating() {
        let draft = ShipDraft {
            rating: Some(99.0),
            ..Default::default()
        };
        assert!(draft.is_empty());
        assert!(!ShipDraft {
            crew_size: Some(1),
            ..Default::default()
        }
        .is_empty());
    }
}
