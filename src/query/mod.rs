//! Query engine for ship collections.
//!
//! A query runs in three steps over a snapshot taken from storage:
//!
//! 1. [`ShipFilter`] narrows the collection; every present criterion must hold.
//! 2. [`ShipOrder`] optionally sorts the survivors ascending, keeping the input
//!    order of equal keys.
//! 3. [`paginate`] cuts one page out of the result.
//!
//! All three are pure and never fail.

pub mod filter;
pub mod order;
pub mod page;

pub use filter::ShipFilter;
pub use order::ShipOrder;
pub use page::{paginate, PageRequest, DEFAULT_PAGE_SIZE};

use tracing::debug;

use crate::ship::Ship;

/// Filter `ships`, then sort them by `order` when one is given.
///
/// Without an order the input order is kept.
pub fn filter_and_sort(
    mut ships: Vec<Ship>,
    filter: &ShipFilter,
    order: Option<ShipOrder>,
) -> Vec<Ship> {
    let total = ships.len();
    filter.apply(&mut ships);

    if let Some(order) = order {
        order.sort(&mut ships);
    }

    debug!(total, kept = ships.len(), order = ?order, "filtered ships");
    ships
}

/// Number of ships matching `filter`. Ordering has no bearing on the count.
pub fn count(ships: &[Ship], filter: &ShipFilter) -> usize {
    ships.iter().filter(|ship| filter.matches(ship)).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ship::ShipType;
    use chrono::{TimeZone, Utc};

    fn ship(id: u64, speed: f64, rating: f64) -> Ship {
        Ship {
            id: Some(id),
            name: format!("Ship {}", id),
            planet: "Earth".to_string(),
            ship_type: ShipType::Transport,
            prod_date: Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap(),
            used: false,
            speed,
            crew_size: 5,
            rating,
        }
    }

    #[test]
    fn test_filter_then_sort() {
        let ships = vec![ship(1, 0.9, 3.0), ship(2, 0.1, 1.0), ship(3, 0.5, 2.0)];
        let filter = ShipFilter {
            min_speed: Some(0.4),
            ..Default::default()
        };

        let result = filter_and_sort(ships, &filter, Some(ShipOrder::Speed));
        let ids: Vec<_> = result.iter().map(|s| s.id.unwrap()).collect();
        assert_eq!(ids, vec![3, 1]);
    }

    #[test]
    fn test_no_order_keeps_input_order() {
        let ships = vec![ship(3, 0.9, 3.0), ship(1, 0.1, 1.0), ship(2, 0.5, 2.0)];
        let result = filter_and_sort(ships.clone(), &ShipFilter::default(), None);
        assert_eq!(result, ships);

        // Repeated calls on the same snapshot agree
        let again = filter_and_sort(ships.clone(), &ShipFilter::default(), None);
        assert_eq!(result, again);
    }

    #[test]
    fn test_count_matches_filtered_length() {
        let ships = vec![ship(1, 0.9, 3.0), ship(2, 0.1, 1.0), ship(3, 0.5, 2.0)];
        let filter = ShipFilter {
            max_rating: Some(2.0),
            ..Default::default()
        };
        assert_eq!(count(&ships, &filter), 2);
        assert_eq!(
            count(&ships, &filter),
            filter_and_sort(ships.clone(), &filter, Some(ShipOrder::Rating)).len()
        );
        assert_eq!(count(&ships, &ShipFilter::default()), 3);
    }
}
