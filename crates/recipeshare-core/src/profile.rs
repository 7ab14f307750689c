//! Profile page derivations

use recipeshare_types::{Recipe, User};

/// Recipes authored by `user_id`, in server order
pub fn recipes_owned_by(recipes: &[Recipe], user_id: &str) -> Vec<Recipe> {
    recipes
        .iter()
        .filter(|recipe| recipe.is_owned_by(user_id))
        .cloned()
        .collect()
}

/// Counters shown under the profile header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStats {
    pub followers: usize,
    pub following: usize,
    pub recipes: usize,
}

impl ProfileStats {
    pub fn new(user: &User, own_recipes: &[Recipe]) -> Self {
        Self {
            followers: user.follower_count(),
            following: user.following_count(),
            recipes: own_recipes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_filters_and_counts() {
        let me = User {
            id: "me".into(),
            followers: vec!["a".into(), "b".into()],
            following: vec!["c".into()],
            ..Default::default()
        };
        let recipes = vec![
            Recipe { id: "1".into(), user_id: "me".into(), ..Default::default() },
            Recipe { id: "2".into(), user_id: "you".into(), ..Default::default() },
            Recipe { id: "3".into(), user_id: "me".into(), ..Default::default() },
        ];

        let mine = recipes_owned_by(&recipes, &me.id);
        let ids: Vec<_> = mine.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);

        let stats = ProfileStats::new(&me, &mine);
        assert_eq!(stats, ProfileStats { followers: 2, following: 1, recipes: 2 });
    }
}
