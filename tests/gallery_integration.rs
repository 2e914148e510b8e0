// SPDX-License-Identifier: MPL-2.0
//! End-to-end behavior of the projects gallery driven through the landing
//! page state: category filtering, detail selection, and the fail-soft
//! guards around unknown ids.

use iced_folio::catalog::projects::{self, Category, CategoryFilter};
use iced_folio::ui::landing::{gallery, Message, State};
use std::time::Instant;

fn landing() -> State {
    State::new(Instant::now())
}

fn visible_ids(state: &State) -> Vec<u32> {
    state
        .gallery()
        .visible_records()
        .iter()
        .map(|p| p.id)
        .collect()
}

#[test]
fn every_declared_filter_yields_exactly_its_category_subset() {
    let now = Instant::now();
    for filter in CategoryFilter::ALL {
        let mut state = landing();
        let _ = state.update(
            Message::Gallery(gallery::Message::FilterSelected(filter)),
            now,
        );

        let expected: Vec<u32> = projects::catalog()
            .iter()
            .filter(|p| filter.matches(p.category))
            .map(|p| p.id)
            .collect();
        assert_eq!(visible_ids(&state), expected, "filter {:?}", filter);
    }
}

#[test]
fn mobile_filter_excludes_all_other_categories() {
    let mut state = landing();
    let _ = state.update(
        Message::Gallery(gallery::Message::FilterSelected(CategoryFilter::Mobile)),
        Instant::now(),
    );

    let records = state.gallery().visible_records();
    assert!(records.iter().any(|p| p.id == 3));
    for record in records {
        assert_eq!(record.category, Category::Mobile);
    }
}

#[test]
fn returning_to_all_after_any_filter_restores_the_catalog() {
    let now = Instant::now();
    for filter in [
        CategoryFilter::Web,
        CategoryFilter::Saas,
        CategoryFilter::Ecommerce,
    ] {
        let mut state = landing();
        let _ = state.update(
            Message::Gallery(gallery::Message::FilterSelected(filter)),
            now,
        );
        let _ = state.update(
            Message::Gallery(gallery::Message::FilterSelected(CategoryFilter::All)),
            now,
        );
        assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5, 6]);
    }
}

#[test]
fn repeated_filter_application_is_idempotent() {
    let now = Instant::now();
    let mut state = landing();
    let _ = state.update(
        Message::Gallery(gallery::Message::FilterSelected(CategoryFilter::Saas)),
        now,
    );
    let first = visible_ids(&state);
    let _ = state.update(
        Message::Gallery(gallery::Message::FilterSelected(CategoryFilter::Saas)),
        now,
    );
    assert_eq!(visible_ids(&state), first);
}

#[test]
fn selection_round_trip_opens_and_closes_the_overlay() {
    let now = Instant::now();
    let mut state = landing();

    let _ = state.update(Message::Gallery(gallery::Message::ShowDetails(2)), now);
    let record = state
        .gallery()
        .selected_record()
        .expect("overlay should be open");
    assert_eq!(record.title, "EcoShop");

    let _ = state.update(Message::Gallery(gallery::Message::CloseDetails), now);
    assert!(state.gallery().selected_record().is_none());
}

#[test]
fn selection_survives_filter_changes_but_not_dismissal() {
    let now = Instant::now();
    let mut state = landing();

    let _ = state.update(Message::Gallery(gallery::Message::ShowDetails(4)), now);
    let _ = state.update(
        Message::Gallery(gallery::Message::FilterSelected(CategoryFilter::Mobile)),
        now,
    );
    // The overlay points at the catalog, not at the filtered subset.
    assert!(state.overlay_open());

    let _ = state.update(Message::DismissOverlay, now);
    assert!(!state.overlay_open());
}

#[test]
fn unknown_selection_is_ignored() {
    let now = Instant::now();
    let mut state = landing();
    let _ = state.update(Message::Gallery(gallery::Message::ShowDetails(42)), now);
    assert!(!state.overlay_open());
}

#[test]
fn unknown_filter_id_falls_back_to_all() {
    assert_eq!(CategoryFilter::from_id("nonsense"), CategoryFilter::All);
    let mut state = landing();
    let _ = state.update(
        Message::Gallery(gallery::Message::FilterSelected(CategoryFilter::from_id(
            "nonsense",
        ))),
        Instant::now(),
    );
    assert_eq!(visible_ids(&state), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn filtering_never_mutates_the_catalog() {
    let before: Vec<(u32, &str)> = projects::catalog()
        .iter()
        .map(|p| (p.id, p.title))
        .collect();

    let now = Instant::now();
    let mut state = landing();
    for filter in CategoryFilter::ALL {
        let _ = state.update(
            Message::Gallery(gallery::Message::FilterSelected(filter)),
            now,
        );
        let _ = state.update(Message::Gallery(gallery::Message::ShowDetails(1)), now);
        let _ = state.update(Message::Gallery(gallery::Message::CloseDetails), now);
    }

    let after: Vec<(u32, &str)> = projects::catalog()
        .iter()
        .map(|p| (p.id, p.title))
        .collect();
    assert_eq!(before, after);
}
