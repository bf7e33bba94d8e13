//! Shared argument groups for ship commands.

use clap::Args;

use fleet::domain::parse_id;
use fleet::query::ShipFilter;
use fleet::ship::{parse_prod_date, ShipDraft, ShipId, ShipType};
use fleet::ShipError;

/// Ship attributes accepted by `add` and `update`.
///
/// Every flag is optional here; `add` reports the missing required ones.
#[derive(Args, Debug, Default, Clone)]
pub struct ShipFields {
    /// Ship name (1-50 characters)
    #[arg(long)]
    pub name: Option<String>,
    /// Home planet (1-50 characters)
    #[arg(long)]
    pub planet: Option<String>,
    /// Ship type: TRANSPORT, MILITARY or MERCHANT
    #[arg(long, value_name = "TYPE")]
    pub ship_type: Option<ShipType>,
    /// Production date: epoch millis, RFC 3339 or YYYY-MM-DD (UTC), year 2800-3019
    #[arg(long, value_name = "DATE", allow_hyphen_values = true)]
    pub prod_date: Option<String>,
    /// Whether the ship is used; `--used` alone means true
    #[arg(long, value_name = "BOOL", num_args = 0..=1, default_missing_value = "true")]
    pub used: Option<bool>,
    /// Speed, 0.01-0.99
    #[arg(long, allow_negative_numbers = true)]
    pub speed: Option<f64>,
    /// Crew size, 1-9999
    #[arg(long, allow_negative_numbers = true)]
    pub crew_size: Option<i64>,
}

impl ShipFields {
    /// Convert into a draft. Fails only on a malformed date.
    pub fn into_draft(self) -> Result<ShipDraft, ShipError> {
        let prod_date = self
            .prod_date
            .as_deref()
            .map(parse_prod_date)
            .transpose()?;

        Ok(ShipDraft {
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date,
            used: self.used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: None,
        })
    }
}

/// Query filters accepted by `list` and `count`.
#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// Keep ships whose name contains this text (case-sensitive)
    #[arg(long)]
    pub name: Option<String>,
    /// Keep ships whose planet contains this text (case-sensitive)
    #[arg(long)]
    pub planet: Option<String>,
    /// Keep ships of this type
    #[arg(long, value_name = "TYPE")]
    pub ship_type: Option<ShipType>,
    /// Keep ships produced at or after this instant (epoch millis)
    #[arg(long, value_name = "MILLIS", allow_negative_numbers = true)]
    pub after: Option<i64>,
    /// Keep ships produced at or before this instant (epoch millis)
    #[arg(long, value_name = "MILLIS", allow_negative_numbers = true)]
    pub before: Option<i64>,
    /// Keep used (true) or new (false) ships
    #[arg(long, value_name = "BOOL")]
    pub is_used: Option<bool>,
    #[arg(long, allow_negative_numbers = true)]
    pub min_speed: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub max_speed: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub min_crew_size: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub max_crew_size: Option<i64>,
    #[arg(long, allow_negative_numbers = true)]
    pub min_rating: Option<f64>,
    #[arg(long, allow_negative_numbers = true)]
    pub max_rating: Option<f64>,
}

impl From<FilterArgs> for ShipFilter {
    fn from(args: FilterArgs) -> Self {
        ShipFilter {
            name: args.name,
            planet: args.planet,
            ship_type: args.ship_type,
            after: args.after,
            before: args.before,
            is_used: args.is_used,
            min_speed: args.min_speed,
            max_speed: args.max_speed,
            min_crew_size: args.min_crew_size,
            max_crew_size: args.max_crew_size,
            min_rating: args.min_rating,
            max_rating: args.max_rating,
        }
    }
}

/// Parse a ship id given on the command line.
///
/// Returns the id as the signed value the operations expect.
pub fn ship_id_arg(raw: &str) -> Result<i64, ShipError> {
    let id: ShipId = parse_id(raw)?;
    i64::try_from(id).map_err(|_| ShipError::invalid(format!("id {} is too large", raw)))
}
