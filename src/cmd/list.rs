//! Ship listing and counting commands.

use anyhow::Result;

use fleet::config::Config;
use fleet::operations::{self, ListOptions};
use fleet::query::{PageRequest, ShipFilter, ShipOrder};

use super::args::FilterArgs;
use super::open_repository;
use crate::render;

/// List one page of matching ships.
///
/// Paging defaults to page 0 and `paging.default_page_size` from the config.
pub fn cmd_list(
    config: &Config,
    filters: FilterArgs,
    order: Option<ShipOrder>,
    page_number: Option<usize>,
    page_size: Option<usize>,
    json: bool,
) -> Result<()> {
    let repo = open_repository(config)?;

    let options = ListOptions {
        filter: ShipFilter::from(filters),
        order,
        page: PageRequest::new(
            page_number.unwrap_or(0),
            page_size.unwrap_or(config.paging.default_page_size),
        ),
    };
    let ships = operations::list_page(&repo, &options)?;

    if json {
        return render::print_json(&ships);
    }

    if ships.is_empty() {
        if !fleet::ui::is_quiet() {
            if options.filter.is_empty() && options.page.page_number == 0 {
                println!("No ships. Register one with `fleet add`");
            } else {
                println!("No ships on this page.");
            }
        }
        return Ok(());
    }

    render::print_ship_table(&ships);
    Ok(())
}

/// Print the number of ships matching the filters.
pub fn cmd_count(config: &Config, filters: FilterArgs, json: bool) -> Result<()> {
    let repo = open_repository(config)?;
    let count = operations::count_ships(&repo, &ShipFilter::from(filters))?;

    if json {
        render::print_json(&serde_json::json!({ "count": count }))
    } else {
        println!("{}", count);
        Ok(())
    }
}
