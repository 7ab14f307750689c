//! Properties of the home feed derivation
//!
//! Run with:
//! ```bash
//! cargo test -p recipeshare-core --test feed_properties
//! ```

use recipeshare_core::feed::{filter_and_sort, FeedFilter};
use recipeshare_core::types::Recipe;

/// Deterministic pseudo-random catalogue (no rand dependency needed)
fn catalogue(count: usize) -> Vec<Recipe> {
    let titles = ["Pasta Bake", "Vegan Chili", "pancakes", "Burger", "Fruit Tart", "Miso Soup"];
    let tags = ["Breakfast", "Lunch", "Dinner", "Dessert", "Vegan"];

    (0..count)
        .map(|i| Recipe {
            id: format!("r{}", i),
            title: format!("{} #{}", titles[i % titles.len()], i),
            description: if i % 4 == 0 {
                "Great for dinner parties".to_string()
            } else {
                "Family favourite".to_string()
            },
            tags: vec![tags[(i * 7) % tags.len()].to_string()],
            cook_time_minutes: ((i * 13) % 90) as u32,
            liked_user_ids: (0..(i * 31) % 6).map(|u| format!("u{}", u)).collect(),
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_result_is_deterministic() {
    let recipes = catalogue(200);
    for filter in FeedFilter::ALL {
        let first = filter_and_sort(&recipes, "a", filter);
        let second = filter_and_sort(&recipes, "a", filter);
        assert_eq!(first, second, "filter {:?} not deterministic", filter);
    }
}

#[test]
fn test_equal_like_counts_keep_server_order() {
    let recipes = catalogue(200);
    let position = |id: &str| recipes.iter().position(|r| r.id == id).unwrap();

    let result = filter_and_sort(&recipes, "", FeedFilter::All);
    for pair in result.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        assert!(a.like_count() >= b.like_count());
        if a.like_count() == b.like_count() {
            assert!(position(&a.id) < position(&b.id), "{} before {}", a.id, b.id);
        }
    }
}

#[test]
fn test_under_30_mins_bounds_cook_time() {
    let recipes = catalogue(300);
    let result = filter_and_sort(&recipes, "", FeedFilter::Under30Mins);

    assert!(!result.is_empty());
    assert!(result.iter().all(|r| r.cook_time_minutes <= 30));
    let expected = recipes.iter().filter(|r| r.cook_time_minutes <= 30).count();
    assert_eq!(result.len(), expected);
}

#[test]
fn test_search_term_is_case_insensitive_title_match() {
    let recipes = catalogue(120);
    for term in ["PANCAKES", "chili", "Soup #1", "zzz"] {
        let result = filter_and_sort(&recipes, term, FeedFilter::All);
        let needle = term.to_lowercase();
        assert!(result.iter().all(|r| r.title.to_lowercase().contains(&needle)));
    }
    assert!(filter_and_sort(&recipes, "zzz", FeedFilter::All).is_empty());
    assert_eq!(
        filter_and_sort(&recipes, "PANCAKES", FeedFilter::All).len(),
        recipes.iter().filter(|r| r.title.starts_with("pancakes")).count()
    );
}

#[test]
fn test_category_filter_combines_with_search() {
    let recipes = catalogue(120);
    let result = filter_and_sort(&recipes, "pasta", FeedFilter::Dinner);

    assert!(!result.is_empty());
    for recipe in &result {
        assert!(recipe.title.to_lowercase().contains("pasta"));
        assert!(
            recipe.has_tag("dinner") || recipe.description.to_lowercase().contains("dinner"),
            "{} does not match Dinner",
            recipe.id
        );
    }
}
