use serde::{Deserialize, Serialize};

use super::{ids_or_numbers, null_as_default, string_or_number};

/// One line of a recipe's ingredient list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ingredient {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub quantity: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub unit: String,
}

/// A recipe as returned by `/recipe/{id}` and `/recipe/getAllRecipe`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ingredients: Vec<Ingredient>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub steps: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub prep_time_minutes: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub cook_time_minutes: u32,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    /// Owner of the recipe; decides who may edit or delete it
    #[serde(default, deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default, deserialize_with = "ids_or_numbers")]
    pub liked_user_ids: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Recipe {
    pub fn like_count(&self) -> usize {
        self.liked_user_ids.len()
    }

    pub fn is_liked_by(&self, user_id: &str) -> bool {
        self.liked_user_ids.iter().any(|id| id == user_id)
    }

    pub fn is_owned_by(&self, user_id: &str) -> bool {
        !self.user_id.is_empty() && self.user_id == user_id
    }

    /// Case-insensitive exact tag match
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == tag)
    }

    /// Image URL if one was uploaded (empty strings count as none)
    pub fn image(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Body of `POST /recipe/create` and `PUT /recipe/update/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipePayload {
    pub title: String,
    pub description: String,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    pub prep_time_minutes: u32,
    pub cook_time_minutes: u32,
    pub image_url: String,
    pub tags: Vec<String>,
    pub user_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_deserializes_backend_shape() {
        let json = r#"{
            "id": "r1",
            "title": "Miso Ramen",
            "description": "Spicy",
            "ingredients": [{"name": "Miso", "quantity": 2.5, "unit": "tbsp"}],
            "steps": null,
            "prepTimeMinutes": 10,
            "cookTimeMinutes": 25,
            "imageUrl": "",
            "tags": ["Dinner"],
            "userId": "u1",
            "likedUserIds": ["u2", "u3"],
            "createdAt": "2025-03-01T12:00:00"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();

        assert_eq!(recipe.ingredients[0].quantity, 2.5);
        assert!(recipe.steps.is_empty());
        assert_eq!(recipe.cook_time_minutes, 25);
        assert_eq!(recipe.like_count(), 2);
        assert!(recipe.is_liked_by("u3"));
        assert!(recipe.has_tag("dinner"));
        assert_eq!(recipe.image(), None);
    }

    #[test]
    fn test_recipe_missing_fields_default() {
        let recipe: Recipe = serde_json::from_str(r#"{"id":"r2","title":"Toast"}"#).unwrap();

        assert_eq!(recipe.like_count(), 0);
        assert!(recipe.ingredients.is_empty());
        assert!(!recipe.is_owned_by(""));
    }

    #[test]
    fn test_numeric_ids_do_not_break_the_feed() {
        let json = r#"[
            {"id": "r1", "title": "Soup", "userId": "u1"},
            {"id": 2, "title": "Stew", "userId": 7, "likedUserIds": [7, "u9"]}
        ]"#;
        let recipes: Vec<Recipe> = serde_json::from_str(json).unwrap();

        assert_eq!(recipes.len(), 2);
        assert_eq!(recipes[1].id, "2");
        assert!(recipes[1].is_owned_by("7"));
        assert!(recipes[1].is_liked_by("7"));
        assert!(recipes[1].is_liked_by("u9"));
    }

    #[test]
    fn test_null_owner_is_empty() {
        let recipe: Recipe =
            serde_json::from_str(r#"{"id":"r3","userId":null,"likedUserIds":null}"#).unwrap();

        assert!(recipe.user_id.is_empty());
        assert_eq!(recipe.like_count(), 0);
    }

    #[test]
    fn test_payload_uses_camel_case_keys() {
        let payload = RecipePayload {
            title: "Soup".into(),
            prep_time_minutes: 5,
            user_id: "u1".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();

        assert_eq!(value["prepTimeMinutes"], 5);
        assert_eq!(value["userId"], "u1");
        assert!(value.get("prep_time_minutes").is_none());
    }
}
