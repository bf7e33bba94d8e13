//! Single-ship commands: add, show, update, delete.

use anyhow::Result;
use fleet::config::Config;
use fleet::operations;
use fleet::ui::colors;

use super::args::{ship_id_arg, ShipFields};
use super::open_repository;
use crate::render;

/// Create a ship from command-line fields.
pub fn cmd_add(config: &Config, fields: ShipFields, json: bool) -> Result<()> {
    let draft = fields.into_draft()?;
    let mut repo = open_repository(config)?;

    let ship = operations::create_ship(&mut repo, &draft)?;

    if json {
        return render::print_json(&ship);
    }

    if !fleet::ui::is_quiet() {
        let id = ship.id.map(|id| id.to_string()).unwrap_or_default();
        println!(
            "{} {} {} (rating {:.2})",
            colors::success("✓"),
            colors::success("Created ship"),
            colors::identifier(&id),
            ship.rating
        );
    }

    Ok(())
}

pub fn cmd_show(config: &Config, id: &str, json: bool) -> Result<()> {
    let id = ship_id_arg(id)?;
    let repo = open_repository(config)?;

    let ship = operations::get_ship(&repo, id)?;

    if json {
        render::print_json(&ship)
    } else {
        render::print_ship_detail(&ship);
        Ok(())
    }
}

/// Apply the given fields to an existing ship; omitted fields stay as they are.
pub fn cmd_update(config: &Config, id: &str, fields: ShipFields, json: bool) -> Result<()> {
    let id = ship_id_arg(id)?;
    let draft = fields.into_draft()?;
    let mut repo = open_repository(config)?;

    if draft.is_empty() && !fleet::ui::is_quiet() && !json {
        eprintln!(
            "{} No fields given; only the rating will be recomputed",
            colors::warning("⚠")
        );
    }

    let ship = operations::update_ship(&mut repo, id, &draft)?;

    if json {
        return render::print_json(&ship);
    }

    if !fleet::ui::is_quiet() {
        println!(
            "{} {} {} (rating {:.2})",
            colors::success("✓"),
            colors::success("Updated ship"),
            colors::identifier(&id.to_string()),
            ship.rating
        );
    }

    Ok(())
}

pub fn cmd_delete(config: &Config, id: &str) -> Result<()> {
    let id = ship_id_arg(id)?;
    let mut repo = open_repository(config)?;

    operations::delete_ship(&mut repo, id)?;

    if !fleet::ui::is_quiet() {
        println!(
            "{} {} {}",
            colors::success("✓"),
            colors::success("Deleted ship"),
            colors::identifier(&id.to_string())
        );
    }

    Ok(())
}
