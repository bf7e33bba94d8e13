//! Terminal rendering of ships.

use anyhow::Result;
use colored::{ColoredString, Colorize};
use serde::Serialize;

use fleet::ship::Ship;
use fleet::ui::{self, colors, format};

const NAME_WIDTH: usize = 24;
const PLANET_WIDTH: usize = 16;

/// Print any serializable value as pretty JSON on stdout.
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn id_text(ship: &Ship) -> String {
    ship.id
        .map(|id| id.to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Id right-aligned to `width`, padded before coloring so escape codes do
/// not skew the column.
fn id_cell(ship: &Ship, width: usize) -> ColoredString {
    colors::identifier(&format!("{:>width$}", id_text(ship), width = width))
}

/// One line per ship, column-aligned.
pub fn print_ship_table(ships: &[Ship]) {
    println!(
        "{}",
        colors::heading(&format!(
            "{:>5}  {:<name$}  {:<planet$}  {:<9}  {:<10}  {:>5}  {:>5}  {:>6}",
            "ID",
            "NAME",
            "PLANET",
            "TYPE",
            "PRODUCED",
            "SPEED",
            "CREW",
            "RATING",
            name = NAME_WIDTH,
            planet = PLANET_WIDTH,
        ))
    );

    for ship in ships {
        println!(
            "{}  {:<name$}  {:<planet$}  {}  {}  {:>5.2}  {:>5}  {:>6.2} {}",
            id_cell(ship, 5),
            format::truncate(&ship.name, NAME_WIDTH),
            format::truncate(&ship.planet, PLANET_WIDTH),
            ui::ship_type_cell(ship.ship_type, 9),
            ship.prod_date.format("%Y-%m-%d"),
            ship.speed,
            ship.crew_size,
            ship.rating,
            ui::used_marker(ship.used),
            name = NAME_WIDTH,
            planet = PLANET_WIDTH,
        );
    }
}

/// Multi-line view of a single ship.
pub fn print_ship_detail(ship: &Ship) {
    println!(
        "{} {}",
        colors::heading(&format!("Ship {}", id_text(ship))),
        ship.name.bold()
    );
    println!("{}", format::separator(32));
    println!("  {:<12} {}", "Planet:", ship.planet);
    println!("  {:<12} {}", "Type:", ui::ship_type_label(ship.ship_type));
    println!(
        "  {:<12} {} {}",
        "Produced:",
        ship.prod_date.format("%Y-%m-%d %H:%M:%S UTC"),
        colors::secondary(&format!("({} ms)", ship.prod_millis()))
    );
    println!(
        "  {:<12} {} {}",
        "Used:",
        ui::used_marker(ship.used),
        if ship.used { "yes" } else { "no" }
    );
    println!("  {:<12} {}", "Speed:", ship.speed);
    println!("  {:<12} {}", "Crew:", ship.crew_size);
    println!("  {:<12} {:.2}", "Rating:", ship.rating);
}
