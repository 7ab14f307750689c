//! Home feed filtering and trending order
//!
//! Pure functions of (recipes, search term, active filter). The home view
//! recomputes them on every change; nothing is cached.

use recipeshare_types::Recipe;

/// Longest cook time accepted by [`FeedFilter::Under30Mins`]
pub const QUICK_COOK_MINUTES: u32 = 30;

/// Filter chips shown above the recipe grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeedFilter {
    #[default]
    All,
    Breakfast,
    Lunch,
    Dinner,
    Dessert,
    Vegan,
    Under30Mins,
}

impl FeedFilter {
    /// Every filter, in display order
    pub const ALL: [FeedFilter; 7] = [
        FeedFilter::All,
        FeedFilter::Breakfast,
        FeedFilter::Lunch,
        FeedFilter::Dinner,
        FeedFilter::Dessert,
        FeedFilter::Vegan,
        FeedFilter::Under30Mins,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Breakfast => "Breakfast",
            Self::Lunch => "Lunch",
            Self::Dinner => "Dinner",
            Self::Dessert => "Dessert",
            Self::Vegan => "Vegan",
            Self::Under30Mins => "Under 30 mins",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.label() == label)
    }

    /// Grid heading for the active filter
    pub fn heading(&self) -> String {
        match self {
            Self::All => "Trending Recipes".to_string(),
            other => format!("{} Recipes", other.label()),
        }
    }

    /// Whether a recipe passes this filter (search term not included)
    pub fn matches(&self, recipe: &Recipe) -> bool {
        match self {
            Self::All => true,
            Self::Under30Mins => recipe.cook_time_minutes <= QUICK_COOK_MINUTES,
            category => {
                let needle = category.label().to_lowercase();
                recipe.has_tag(&needle) || recipe.description.to_lowercase().contains(&needle)
            }
        }
    }
}

/// Case-insensitive substring match on the title; blank terms match everything
pub fn matches_search(recipe: &Recipe, search: &str) -> bool {
    let term = search.to_lowercase();
    recipe.title.to_lowercase().contains(&term)
}

/// Filter by search term and category, then order by like count descending
///
/// The sort is stable: recipes with equal like counts keep their server order.
pub fn filter_and_sort(recipes: &[Recipe], search: &str, filter: FeedFilter) -> Vec<Recipe> {
    let mut visible: Vec<Recipe> = recipes
        .iter()
        .filter(|recipe| matches_search(recipe, search) && filter.matches(recipe))
        .cloned()
        .collect();

    visible.sort_by(|a, b| b.like_count().cmp(&a.like_count()));
    visible
}

/// "1 recipe found" / "3 recipes found"
pub fn result_count_label(count: usize) -> String {
    if count == 1 {
        "1 recipe found".to_string()
    } else {
        format!("{} recipes found", count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipe(id: &str, title: &str, likes: usize) -> Recipe {
        Recipe {
            id: id.into(),
            title: title.into(),
            liked_user_ids: (0..likes).map(|i| format!("u{}", i)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_sorted_by_likes_descending() {
        let recipes = vec![recipe("a", "A", 1), recipe("b", "B", 5), recipe("c", "C", 3)];
        let ids: Vec<_> = filter_and_sort(&recipes, "", FeedFilter::All)
            .into_iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, vec!["b", "c", "a"]);
    }

    #[test]
    fn test_category_matches_tag_or_description() {
        let mut tagged = recipe("t", "Pancakes", 0);
        tagged.tags = vec!["BREAKFAST".into()];
        let mut described = recipe("d", "Eggs", 0);
        described.description = "A quick breakfast classic".into();
        let other = recipe("o", "Stew", 0);

        let result = filter_and_sort(&[tagged, described, other], "", FeedFilter::Breakfast);
        let ids: Vec<_> = result.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["t", "d"]);
    }

    #[test]
    fn test_under_30_ignores_tags() {
        let mut quick = recipe("q", "Salad", 0);
        quick.cook_time_minutes = 30;
        let mut slow = recipe("s", "Roast", 0);
        slow.cook_time_minutes = 31;
        slow.tags = vec!["Under 30 mins".into()];

        let result = filter_and_sort(&[quick, slow], "", FeedFilter::Under30Mins);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].id, "q");
    }

    #[test]
    fn test_labels_roundtrip() {
        for filter in FeedFilter::ALL {
            assert_eq!(FeedFilter::from_label(filter.label()), Some(filter));
        }
        assert_eq!(FeedFilter::from_label("Brunch"), None);
        assert_eq!(FeedFilter::All.heading(), "Trending Recipes");
        assert_eq!(FeedFilter::Vegan.heading(), "Vegan Recipes");
    }

    #[test]
    fn test_result_count_label() {
        assert_eq!(result_count_label(0), "0 recipes found");
        assert_eq!(result_count_label(1), "1 recipe found");
        assert_eq!(result_count_label(12), "12 recipes found");
    }
}
