//! Property-based tests for the list view engine.

use proptest::prelude::*;
use boxoffice_view::{
    compare_values, Dir, FilterValue, ListView, Number, Record, SortSpec, Value, ViewConfig,
};

// ============================================================================
// Test helpers
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: usize,
    name: String,
    city: Option<String>,
    capacity: i64,
}

impl Record for Item {
    fn field(&self, name: &str) -> Value<'_> {
        match name {
            "name" => Value::String(&self.name),
            "city" => self.city.as_deref().into(),
            "capacity" => Value::Number(Number::I64(self.capacity)),
            _ => Value::None,
        }
    }
}

fn items_strategy(max: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec(
        (
            "[a-dA-D]{1,4}",
            prop::option::of("[a-c]{1,3}"),
            0i64..20,
        ),
        0..max,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .enumerate()
            .map(|(id, (name, city, capacity))| Item {
                id,
                name,
                city,
                capacity,
            })
            .collect()
    })
}

fn ids(records: &[&Item]) -> Vec<usize> {
    records.iter().map(|i| i.id).collect()
}

fn view_of(items: &[Item], page_size: usize) -> ListView<Item> {
    ListView::with_source(
        ViewConfig::new()
            .with_page_size(page_size)
            .with_search_field("name")
            .with_search_field("city"),
        items.to_vec(),
    )
    .unwrap()
}

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Filtering returns a subsequence of the source whose records satisfy
    /// every predicate.
    #[test]
    fn filter_is_satisfying_subsequence(
        items in items_strategy(40),
        name_q in "[a-d]{0,2}",
        city_q in "[a-c]{0,2}",
        lo in 0i64..20,
        span in 0i64..20,
    ) {
        let mut view = view_of(&items, 5);
        view.set_filter("name", name_q.as_str());
        view.set_filter("city", city_q.as_str());
        view.set_filter("capacity", FilterValue::range(lo, lo + span));

        let matched = ids(&view.matched());
        prop_assert!(matched.len() <= items.len());
        prop_assert!(matched.windows(2).all(|w| w[0] < w[1]), "not in source order");

        for record in view.matched() {
            prop_assert!(record.name.to_lowercase().contains(&name_q));
            if let Some(city) = &record.city {
                prop_assert!(city.contains(&city_q));
            }
            prop_assert!(record.capacity >= lo && record.capacity <= lo + span);
        }

        // Nothing that satisfies every predicate was dropped.
        let expected = items
            .iter()
            .filter(|i| i.name.to_lowercase().contains(&name_q))
            .filter(|i| i.city.as_ref().map_or(true, |c| c.contains(&city_q)))
            .filter(|i| i.capacity >= lo && i.capacity <= lo + span)
            .count();
        prop_assert_eq!(matched.len(), expected);
    }

    /// Free-text search matches any configured field.
    #[test]
    fn search_matches_any_field(items in items_strategy(40), q in "[a-c]{1,2}") {
        let mut view = view_of(&items, 5);
        view.set_search(q.clone());
        for record in view.matched() {
            let in_name = record.name.to_lowercase().contains(&q);
            let in_city = record.city.as_ref().is_some_and(|c| c.contains(&q));
            prop_assert!(in_name || in_city);
        }
    }

    /// Sorting is a permutation of the filtered set, ordered by the key,
    /// with ties kept in source order.
    #[test]
    fn sort_is_ordered_stable_permutation(
        items in items_strategy(40),
        field in prop::sample::select(vec!["name", "city", "capacity"]),
        desc in any::<bool>(),
    ) {
        let dir = if desc { Dir::Desc } else { Dir::Asc };
        let mut view = view_of(&items, 5);
        view.set_sort(field, dir);
        let sorted = view.matched();

        let mut got = ids(&sorted);
        got.sort_unstable();
        prop_assert_eq!(got, (0..items.len()).collect::<Vec<_>>());

        let spec = SortSpec::new(field, dir);
        for pair in sorted.windows(2) {
            let ord = spec.compare(pair[0], pair[1]);
            prop_assert!(ord.is_le(), "out of order");
            if ord.is_eq() {
                prop_assert!(pair[0].id < pair[1].id, "stability violated");
            }
        }
    }

    /// Filtering twice with the same predicates and sorting twice with the
    /// same spec change nothing.
    #[test]
    fn filter_and_sort_are_idempotent(
        items in items_strategy(30),
        q in "[a-d]{0,2}",
        field in prop::sample::select(vec!["name", "capacity"]),
    ) {
        let mut view = view_of(&items, 5);
        view.set_filter("name", q.as_str());
        view.set_sort(field, Dir::Asc);
        let once: Vec<Item> = view.matched().into_iter().cloned().collect();

        let mut again = view_of(&once, 5);
        again.set_filter("name", q.as_str());
        again.set_sort(field, Dir::Asc);
        let twice: Vec<Item> = again.matched().into_iter().cloned().collect();

        prop_assert_eq!(once, twice);
    }

    /// Recomputing with unchanged inputs yields the same result.
    #[test]
    fn recompute_is_pure(items in items_strategy(30), q in "[a-d]{0,2}") {
        let mut view = view_of(&items, 4);
        view.set_search(q.clone());
        view.toggle_sort("capacity");
        let first = ids(&view.visible());
        view.set_search(q.clone());
        view.set_sort("capacity", Dir::Asc);
        prop_assert_eq!(first, ids(&view.visible()));
    }

    /// The window start stays within [0, max(0, N - page_size)] whatever
    /// the request.
    #[test]
    fn window_start_is_clamped(
        items in items_strategy(40),
        page_size in 1usize..8,
        moves in prop::collection::vec(-5isize..5, 0..10),
        seek in any::<usize>(),
        q in "[a-d]{0,1}",
    ) {
        let mut view = view_of(&items, page_size);
        view.seek(seek);
        for delta in moves {
            view.advance_window(delta);
            let state = view.state();
            prop_assert!(state.start <= state.matched.saturating_sub(page_size));
        }
        view.set_filter("name", q.as_str());
        let state = view.state();
        prop_assert!(state.start <= state.matched.saturating_sub(page_size));
        prop_assert_eq!(state.has_prev, state.start != 0);
        prop_assert!(view.visible().len() <= page_size);
    }

    /// The ascending comparison is antisymmetric across value kinds.
    #[test]
    fn compare_values_antisymmetric(a in any::<i64>(), b in any::<f64>(), s in "[a-z]{0,3}") {
        let values = [
            Value::Number(Number::I64(a)),
            Value::Number(Number::F64(b)),
            Value::String(&s),
            Value::None,
        ];
        for x in &values {
            for y in &values {
                prop_assert_eq!(compare_values(x, y), compare_values(y, x).reverse());
            }
        }
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn empty_source() {
    let mut view = view_of(&[], 3);
    view.set_filter("name", "a");
    view.set_sort("capacity", Dir::Desc);
    view.advance_window(3);
    assert!(view.visible().is_empty());
    let state = view.state();
    assert_eq!(state.start, 0);
    assert!(!state.has_prev);
    assert!(!state.has_next);
}
