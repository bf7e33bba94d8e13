//! Ship listing and counting operations.

use crate::error::Result;
use crate::query::{self, PageRequest, ShipFilter, ShipOrder};
use crate::repository::ShipRepository;
use crate::ship::Ship;

/// Options for a paged listing
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub filter: ShipFilter,
    pub order: Option<ShipOrder>,
    pub page: PageRequest,
}

/// All ships matching `filter`, sorted by `order` when given.
///
/// Without an order ships come back in storage order.
pub fn list_ships<R>(repo: &R, filter: &ShipFilter, order: Option<ShipOrder>) -> Result<Vec<Ship>>
where
    R: ShipRepository + ?Sized,
{
    let ships = repo.find_all()?;
    Ok(query::filter_and_sort(ships, filter, order))
}

/// Number of ships matching `filter`.
pub fn count_ships<R>(repo: &R, filter: &ShipFilter) -> Result<usize>
where
    R: ShipRepository + ?Sized,
{
    let ships = repo.find_all()?;
    Ok(query::count(&ships, filter))
}

/// One page of the filtered, sorted listing.
pub fn list_page<R>(repo: &R, options: &ListOptions) -> Result<Vec<Ship>>
where
    R: ShipRepository + ?Sized,
{
    let ships = list_ships(repo, &options.filter, options.order)?;
    Ok(query::paginate(
        &ships,
        options.page.page_number,
        options.page.page_size,
    ))
}
