use chrono::{DateTime, TimeZone, Utc};
use fleet::ship::{compute_rating, Ship, ShipDraft, ShipId, ShipType};

#[allow(dead_code)]
/// Production instant at the start of `year`, UTC.
pub fn start_of_year(year: i32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).unwrap()
}

pub struct ShipBuilder {
    id: Option<ShipId>,
    name: String,
    planet: String,
    ship_type: ShipType,
    year: i32,
    used: bool,
    speed: f64,
    crew_size: u32,
}

#[allow(dead_code)]
impl ShipBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            planet: "Earth".to_string(),
            ship_type: ShipType::Transport,
            year: 3000,
            used: false,
            speed: 0.5,
            crew_size: 10,
        }
    }

    pub fn with_id(mut self, id: ShipId) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_planet(mut self, planet: &str) -> Self {
        self.planet = planet.to_string();
        self
    }

    pub fn with_type(mut self, ship_type: ShipType) -> Self {
        self.ship_type = ship_type;
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn used(mut self) -> Self {
        self.used = true;
        self
    }

    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_crew(mut self, crew_size: u32) -> Self {
        self.crew_size = crew_size;
        self
    }

    /// A stored-looking ship with its rating already computed.
    pub fn build(self) -> Ship {
        let mut ship = Ship {
            id: self.id,
            name: self.name,
            planet: self.planet,
            ship_type: self.ship_type,
            prod_date: start_of_year(self.year),
            used: self.used,
            speed: self.speed,
            crew_size: self.crew_size,
            rating: 0.0,
        };
        ship.rating = compute_rating(&ship);
        ship
    }

    /// The same attributes as a complete create payload.
    pub fn draft(self) -> ShipDraft {
        ShipDraft {
            name: Some(self.name),
            planet: Some(self.planet),
            ship_type: Some(self.ship_type),
            prod_date: Some(start_of_year(self.year)),
            used: Some(self.used),
            speed: Some(self.speed),
            crew_size: Some(i64::from(self.crew_size)),
            rating: None,
        }
    }
}
