//! Create/edit recipe form state
//!
//! The form keeps raw text for every input (quantities and minutes are only
//! parsed on submit) and models ingredient and step lists as rows with a
//! stable [`RowId`], so removing row 2 of 4 never reattaches typed text to a
//! different row.

use std::collections::BTreeMap;

use recipeshare_types::{Ingredient, Recipe, RecipePayload};
use thiserror::Error;

use crate::display::format_quantity;

/// Identity of a dynamic form row, independent of its position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(u32);

#[derive(Debug, Clone, PartialEq)]
pub struct IngredientRow {
    pub id: RowId,
    pub name: String,
    /// Raw text; parsed to a number on submit
    pub quantity: String,
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StepRow {
    pub id: RowId,
    pub text: String,
}

/// Editable columns of an ingredient row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngredientField {
    Name,
    Quantity,
    Unit,
}

/// Form inputs that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Title,
    Description,
    PrepTime,
    CookTime,
    Ingredients,
    IngredientName(RowId),
    IngredientQuantity(RowId),
    IngredientUnit(RowId),
    Step(RowId),
}

/// Validation failures keyed by field, rendered inline next to each input
#[derive(Error, Debug, Clone, Default, PartialEq)]
#[error("{} field(s) need attention", .errors.len())]
pub struct FormErrors {
    errors: BTreeMap<Field, String>,
}

impl FormErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.errors.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }
}

/// Everything typed into the recipe form
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    /// Comma separated, normalized by [`parse_tags`]
    pub tags: String,
    pub prep_time: String,
    pub cook_time: String,
    pub image_url: String,
    pub ingredients: Vec<IngredientRow>,
    pub steps: Vec<StepRow>,
    next_row: u32,
}

impl Default for RecipeDraft {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeDraft {
    /// Blank form: one empty ingredient row and one empty step row
    pub fn new() -> Self {
        let mut draft = Self {
            title: String::new(),
            description: String::new(),
            tags: String::new(),
            prep_time: "0".to_string(),
            cook_time: "0".to_string(),
            image_url: String::new(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            next_row: 0,
        };
        draft.add_ingredient();
        draft.add_step();
        draft
    }

    /// Backfill from an existing recipe for editing
    ///
    /// Missing ingredients or steps become a single empty placeholder row.
    pub fn from_recipe(recipe: &Recipe) -> Self {
        let mut draft = Self {
            title: recipe.title.clone(),
            description: recipe.description.clone(),
            tags: recipe.tags.join(", "),
            prep_time: recipe.prep_time_minutes.to_string(),
            cook_time: recipe.cook_time_minutes.to_string(),
            image_url: recipe.image_url.clone().unwrap_or_default(),
            ingredients: Vec::new(),
            steps: Vec::new(),
            next_row: 0,
        };

        for ingredient in &recipe.ingredients {
            let id = draft.add_ingredient();
            if let Some(row) = draft.ingredient_mut(id) {
                row.name = ingredient.name.clone();
                row.quantity = format_quantity(ingredient.quantity);
                row.unit = ingredient.unit.clone();
            }
        }
        if draft.ingredients.is_empty() {
            draft.add_ingredient();
        }

        for step in &recipe.steps {
            let id = draft.add_step();
            draft.set_step(id, step.clone());
        }
        if draft.steps.is_empty() {
            draft.add_step();
        }

        draft
    }

    fn allocate_row(&mut self) -> RowId {
        let id = RowId(self.next_row);
        self.next_row += 1;
        id
    }

    pub fn add_ingredient(&mut self) -> RowId {
        let id = self.allocate_row();
        self.ingredients.push(IngredientRow {
            id,
            name: String::new(),
            quantity: String::new(),
            unit: String::new(),
        });
        id
    }

    /// Remove an ingredient row; the last remaining row cannot be removed
    pub fn remove_ingredient(&mut self, id: RowId) -> bool {
        if self.ingredients.len() <= 1 {
            return false;
        }
        let before = self.ingredients.len();
        self.ingredients.retain(|row| row.id != id);
        self.ingredients.len() != before
    }

    pub fn ingredient(&self, id: RowId) -> Option<&IngredientRow> {
        self.ingredients.iter().find(|row| row.id == id)
    }

    pub fn ingredient_mut(&mut self, id: RowId) -> Option<&mut IngredientRow> {
        self.ingredients.iter_mut().find(|row| row.id == id)
    }

    pub fn set_ingredient_field(&mut self, id: RowId, field: IngredientField, value: String) {
        if let Some(row) = self.ingredient_mut(id) {
            match field {
                IngredientField::Name => row.name = value,
                IngredientField::Quantity => row.quantity = value,
                IngredientField::Unit => row.unit = value,
            }
        }
    }

    pub fn add_step(&mut self) -> RowId {
        let id = self.allocate_row();
        self.steps.push(StepRow {
            id,
            text: String::new(),
        });
        id
    }

    pub fn remove_step(&mut self, id: RowId) -> bool {
        let before = self.steps.len();
        self.steps.retain(|row| row.id != id);
        self.steps.len() != before
    }

    pub fn step(&self, id: RowId) -> Option<&StepRow> {
        self.steps.iter().find(|row| row.id == id)
    }

    pub fn set_step(&mut self, id: RowId, text: String) {
        if let Some(row) = self.steps.iter_mut().find(|row| row.id == id) {
            row.text = text;
        }
    }

    /// 1-based position of a step, for the numbered badges
    pub fn step_number(&self, id: RowId) -> Option<usize> {
        self.steps.iter().position(|row| row.id == id).map(|i| i + 1)
    }

    pub fn can_remove_ingredient(&self) -> bool {
        self.ingredients.len() > 1
    }

    /// Validate every field and build the API payload
    ///
    /// Quantities become numbers, step rows flatten to plain strings and the
    /// tag text becomes a trimmed list.
    pub fn to_payload(&self, user_id: &str) -> Result<RecipePayload, FormErrors> {
        let mut errors = FormErrors::default();

        if self.title.trim().is_empty() {
            errors.insert(Field::Title, "Title is required");
        }
        if self.description.trim().is_empty() {
            errors.insert(Field::Description, "Description is required");
        }

        let prep_time = parse_minutes(&self.prep_time);
        if prep_time.is_none() {
            errors.insert(Field::PrepTime, "Prep time must be a whole number of minutes");
        }
        let cook_time = parse_minutes(&self.cook_time);
        if cook_time.is_none() {
            errors.insert(Field::CookTime, "Cook time must be a whole number of minutes");
        }

        if self.ingredients.is_empty() {
            errors.insert(Field::Ingredients, "At least one ingredient is required");
        }

        let mut ingredients = Vec::with_capacity(self.ingredients.len());
        for row in &self.ingredients {
            if row.name.trim().is_empty() {
                errors.insert(Field::IngredientName(row.id), "Name is required");
            }
            if row.unit.trim().is_empty() {
                errors.insert(Field::IngredientUnit(row.id), "Unit is required");
            }
            match parse_quantity(&row.quantity) {
                Some(quantity) => ingredients.push(Ingredient {
                    name: row.name.trim().to_string(),
                    quantity,
                    unit: row.unit.trim().to_string(),
                }),
                None => errors.insert(Field::IngredientQuantity(row.id), "Quantity must be a number"),
            }
        }

        for row in &self.steps {
            if row.text.trim().is_empty() {
                errors.insert(Field::Step(row.id), "Step cannot be empty");
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(RecipePayload {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            ingredients,
            steps: self.steps.iter().map(|row| row.text.trim().to_string()).collect(),
            prep_time_minutes: prep_time.unwrap_or_default(),
            cook_time_minutes: cook_time.unwrap_or_default(),
            image_url: self.image_url.trim().to_string(),
            tags: parse_tags(&self.tags),
            user_id: user_id.to_string(),
        })
    }
}

/// `"vegan, quick "` → `["vegan", "quick"]`
pub fn parse_tags(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Non-negative finite number, as typed in a quantity box
pub fn parse_quantity(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|q| q.is_finite() && *q >= 0.0)
}

/// Whole minutes; a blank box counts as zero
pub fn parse_minutes(text: &str) -> Option<u32> {
    let text = text.trim();
    if text.is_empty() {
        return Some(0);
    }
    text.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_draft_has_placeholder_rows() {
        let draft = RecipeDraft::new();
        assert_eq!(draft.ingredients.len(), 1);
        assert_eq!(draft.steps.len(), 1);
        assert_ne!(draft.ingredients[0].id, draft.steps[0].id);
    }

    #[test]
    fn test_row_ids_stay_stable_across_removal() {
        let mut draft = RecipeDraft::new();
        let first = draft.ingredients[0].id;
        let second = draft.add_ingredient();
        let third = draft.add_ingredient();
        draft.set_ingredient_field(third, IngredientField::Name, "Pepper".into());

        assert!(draft.remove_ingredient(second));
        assert_eq!(draft.ingredient(third).map(|r| r.name.as_str()), Some("Pepper"));
        assert!(draft.ingredient(first).is_some());

        // Ids are never reused
        let fourth = draft.add_ingredient();
        assert_ne!(fourth, second);
    }

    #[test]
    fn test_last_ingredient_row_cannot_be_removed() {
        let mut draft = RecipeDraft::new();
        let only = draft.ingredients[0].id;

        assert!(!draft.can_remove_ingredient());
        assert!(!draft.remove_ingredient(only));
        assert_eq!(draft.ingredients.len(), 1);
    }

    #[test]
    fn test_steps_renumber_after_removal() {
        let mut draft = RecipeDraft::new();
        let first = draft.steps[0].id;
        let second = draft.add_step();
        let third = draft.add_step();

        assert_eq!(draft.step_number(third), Some(3));
        assert!(draft.remove_step(first));
        assert_eq!(draft.step_number(second), Some(1));
        assert_eq!(draft.step_number(third), Some(2));
        assert!(!draft.remove_step(first));
    }

    #[test]
    fn test_validation_reports_each_field() {
        let mut draft = RecipeDraft::new();
        let row = draft.ingredients[0].id;
        let step = draft.steps[0].id;
        draft.set_ingredient_field(row, IngredientField::Quantity, "lots".into());
        draft.cook_time = "-5".into();

        let errors = draft.to_payload("u1").unwrap_err();
        assert_eq!(errors.get(Field::Title), Some("Title is required"));
        assert_eq!(errors.get(Field::Description), Some("Description is required"));
        assert!(errors.get(Field::CookTime).is_some());
        assert!(errors.get(Field::PrepTime).is_none());
        assert!(errors.get(Field::IngredientName(row)).is_some());
        assert_eq!(errors.get(Field::IngredientQuantity(row)), Some("Quantity must be a number"));
        assert!(errors.get(Field::IngredientUnit(row)).is_some());
        assert!(errors.get(Field::Step(step)).is_some());
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_tags(""), Vec::<String>::new());
        assert_eq!(parse_tags(" , ,a"), vec!["a".to_string()]);
        assert_eq!(parse_quantity(" 2.5 "), Some(2.5));
        assert_eq!(parse_quantity("-1"), None);
        assert_eq!(parse_quantity("NaN"), None);
        assert_eq!(parse_minutes(""), Some(0));
        assert_eq!(parse_minutes("45"), Some(45));
        assert_eq!(parse_minutes("4.5"), None);
    }
}
