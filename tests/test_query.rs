//! Query engine properties: filtering, ordering, paging and counting.

use fleet::query::{self, paginate, ShipFilter, ShipOrder};
use fleet::ship::{Ship, ShipType};

mod support;
use support::builders::ShipBuilder;

fn names(ships: &[Ship]) -> Vec<&str> {
    ships.iter().map(|s| s.name.as_str()).collect()
}

fn sample_fleet() -> Vec<Ship> {
    vec![
        ShipBuilder::new("Nostromo")
            .with_id(1)
            .with_planet("Thedus")
            .with_type(ShipType::Merchant)
            .with_year(2990)
            .with_speed(0.3)
            .with_crew(7)
            .build(),
        ShipBuilder::new("Sulaco")
            .with_id(2)
            .with_planet("Earth")
            .with_type(ShipType::Military)
            .with_year(3010)
            .with_speed(0.8)
            .with_crew(120)
            .build(),
        ShipBuilder::new("Serenity")
            .with_id(3)
            .with_planet("Persephone")
            .with_type(ShipType::Transport)
            .with_year(2900)
            .with_speed(0.6)
            .with_crew(9)
            .used()
            .build(),
        ShipBuilder::new("Rocinante")
            .with_id(4)
            .with_planet("Mars")
            .with_type(ShipType::Military)
            .with_year(3015)
            .with_speed(0.9)
            .with_crew(6)
            .used()
            .build(),
    ]
}

#[test]
fn test_min_speed_keeps_faster_ships() {
    let ships: Vec<Ship> = [0.1, 0.5, 0.9]
        .iter()
        .enumerate()
        .map(|(i, speed)| {
            ShipBuilder::new(&format!("S{}", i))
                .with_id(i as u64 + 1)
                .with_speed(*speed)
                .build()
        })
        .collect();
    let filter = ShipFilter {
        min_speed: Some(0.4),
        ..Default::default()
    };

    let kept = query::filter_and_sort(ships, &filter, None);
    let speeds: Vec<f64> = kept.iter().map(|s| s.speed).collect();
    assert_eq!(speeds, vec![0.5, 0.9]);
}

#[test]
fn test_absent_filters_keep_everything_in_storage_order() {
    let kept = query::filter_and_sort(sample_fleet(), &ShipFilter::default(), None);
    assert_eq!(names(&kept), vec!["Nostromo", "Sulaco", "Serenity", "Rocinante"]);
}

#[test]
fn test_filters_compose_with_and() {
    let filter = ShipFilter {
        ship_type: Some(ShipType::Military),
        is_used: Some(true),
        ..Default::default()
    };
    let kept = query::filter_and_sort(sample_fleet(), &filter, None);
    assert_eq!(names(&kept), vec!["Rocinante"]);

    let filter = ShipFilter {
        min_crew_size: Some(7),
        max_crew_size: Some(9),
        ..Default::default()
    };
    let kept = query::filter_and_sort(sample_fleet(), &filter, None);
    assert_eq!(names(&kept), vec!["Nostromo", "Serenity"]);
}

#[test]
fn test_name_filter_is_case_sensitive() {
    let upper = ShipFilter {
        name: Some("Ser".to_string()),
        ..Default::default()
    };
    let lower = ShipFilter {
        name: Some("ser".to_string()),
        ..Default::default()
    };
    assert_eq!(query::count(&sample_fleet(), &upper), 1);
    assert_eq!(query::count(&sample_fleet(), &lower), 0);
}

fn sorted_names(order: ShipOrder) -> Vec<String> {
    let sorted = query::filter_and_sort(sample_fleet(), &ShipFilter::default(), Some(order));
    sorted.into_iter().map(|s| s.name).collect()
}

#[test]
fn test_each_order_key_sorts_ascending() {
    assert_eq!(
        sorted_names(ShipOrder::Id),
        vec!["Nostromo", "Sulaco", "Serenity", "Rocinante"]
    );
    assert_eq!(
        sorted_names(ShipOrder::Speed),
        vec!["Nostromo", "Serenity", "Sulaco", "Rocinante"]
    );
    assert_eq!(
        sorted_names(ShipOrder::Date),
        vec!["Serenity", "Nostromo", "Sulaco", "Rocinante"]
    );
    // Ratings: Serenity 0.2, Nostromo 0.8, Sulaco 6.4, Rocinante 7.2
    assert_eq!(
        sorted_names(ShipOrder::Rating),
        vec!["Serenity", "Nostromo", "Sulaco", "Rocinante"]
    );
}

#[test]
fn test_rating_sort_is_stable_for_ties() {
    // Same speed, year and used flag give the same rating
    let ships: Vec<Ship> = [5, 2, 9, 1]
        .iter()
        .map(|id| ShipBuilder::new(&format!("Twin{}", id)).with_id(*id).build())
        .collect();

    let order = Some(ShipOrder::Rating);
    let sorted = query::filter_and_sort(ships, &ShipFilter::default(), order);
    let ids: Vec<u64> = sorted.iter().filter_map(|s| s.id).collect();
    assert_eq!(ids, vec![5, 2, 9, 1]);
}

#[test]
fn test_paginate_ten_items_by_three() {
    let items: Vec<u32> = (0..10).collect();

    assert_eq!(paginate(&items, 0, 3), vec![0, 1, 2]);
    assert_eq!(paginate(&items, 3, 3), vec![9]);
    assert!(paginate(&items, 4, 3).is_empty());
    assert!(paginate(&items, 0, 0).is_empty());
    assert!(paginate(&items, usize::MAX, usize::MAX).is_empty());
}

#[test]
fn test_pages_cover_filtered_result_exactly_once() {
    let order = Some(ShipOrder::Speed);
    let all = query::filter_and_sort(sample_fleet(), &ShipFilter::default(), order);
    let mut seen = Vec::new();
    for page_number in 0.. {
        let page = paginate(&all, page_number, 3);
        if page.is_empty() {
            break;
        }
        seen.extend(page);
    }
    assert_eq!(seen, all);
}

#[test]
fn test_count_matches_listing_length_and_ignores_order() {
    let filter = ShipFilter {
        min_rating: Some(1.0),
        ..Default::default()
    };
    let listed = query::filter_and_sort(sample_fleet(), &filter, Some(ShipOrder::Date));
    assert_eq!(query::count(&sample_fleet(), &filter), listed.len());
}

#[test]
fn test_rating_range_is_bounded_for_valid_fleet() {
    for ship in sample_fleet() {
        assert!((0.0..=80.0).contains(&ship.rating));
        assert_eq!((ship.rating * 100.0).round() / 100.0, ship.rating);
    }
}
