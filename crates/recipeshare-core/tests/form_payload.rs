//! Recipe form submission and edit backfill

use recipeshare_core::form::{parse_tags, Field, IngredientField, RecipeDraft};
use recipeshare_core::social::is_owner;
use recipeshare_core::types::{Ingredient, Recipe, User};

#[test]
fn test_submit_converts_quantities_and_flattens_steps() {
    let mut draft = RecipeDraft::new();
    draft.title = "Boiled Salt Water".into();
    draft.description = "Stepping stone to pasta".into();
    draft.tags = "vegan, quick ".into();

    let row = draft.ingredients[0].id;
    draft.set_ingredient_field(row, IngredientField::Name, "Salt".into());
    draft.set_ingredient_field(row, IngredientField::Quantity, "1".into());
    draft.set_ingredient_field(row, IngredientField::Unit, "tsp".into());
    let step = draft.steps[0].id;
    draft.set_step(step, "Boil water".into());

    let payload = draft.to_payload("u1").expect("draft should be valid");

    assert_eq!(payload.ingredients[0].quantity, 1.0);
    assert_eq!(payload.steps, vec!["Boil water".to_string()]);
    assert_eq!(payload.tags, vec!["vegan".to_string(), "quick".to_string()]);
    assert_eq!(payload.user_id, "u1");

    let json = serde_json::to_value(&payload).unwrap();
    assert!(json["ingredients"][0]["quantity"].is_number());
    assert_eq!(json["ingredients"][0]["quantity"].as_f64(), Some(1.0));
    assert!(json["steps"][0].is_string());
}

#[test]
fn test_tag_normalization() {
    assert_eq!(parse_tags("vegan, quick "), vec!["vegan", "quick"]);
}

#[test]
fn test_edit_backfill_defaults_missing_rows() {
    let recipe = Recipe {
        id: "r1".into(),
        title: "Toast".into(),
        tags: vec!["Breakfast".into(), "Quick".into()],
        cook_time_minutes: 3,
        ..Default::default()
    };
    let draft = RecipeDraft::from_recipe(&recipe);

    assert_eq!(draft.tags, "Breakfast, Quick");
    assert_eq!(draft.cook_time, "3");
    assert_eq!(draft.ingredients.len(), 1);
    assert!(draft.ingredients[0].name.is_empty());
    assert_eq!(draft.steps.len(), 1);
    assert!(draft.steps[0].text.is_empty());
}

#[test]
fn test_edit_backfill_roundtrips_existing_values() {
    let recipe = Recipe {
        id: "r1".into(),
        title: "Pancakes".into(),
        description: "Fluffy".into(),
        ingredients: vec![
            Ingredient { name: "Flour".into(), quantity: 200.0, unit: "g".into() },
            Ingredient { name: "Milk".into(), quantity: 0.5, unit: "l".into() },
        ],
        steps: vec!["Mix".into(), "Fry".into()],
        prep_time_minutes: 5,
        cook_time_minutes: 15,
        image_url: Some("https://img.example/p.jpg".into()),
        user_id: "u1".into(),
        ..Default::default()
    };
    let draft = RecipeDraft::from_recipe(&recipe);
    assert_eq!(draft.ingredients[0].quantity, "200");
    assert_eq!(draft.ingredients[1].quantity, "0.5");

    let payload = draft.to_payload("u1").unwrap();
    assert_eq!(payload.ingredients, recipe.ingredients);
    assert_eq!(payload.steps, recipe.steps);
    assert_eq!(payload.image_url, "https://img.example/p.jpg");
    assert_eq!(payload.cook_time_minutes, 15);
}

#[test]
fn test_foreign_recipe_is_not_editable() {
    let recipe = Recipe { id: "r1".into(), user_id: "author".into(), ..Default::default() };
    let visitor = User { id: "visitor".into(), ..Default::default() };

    assert!(!is_owner(&recipe, Some(&visitor)));
}

#[test]
fn test_empty_ingredient_list_is_rejected() {
    let mut draft = RecipeDraft::new();
    draft.title = "Air".into();
    draft.description = "Nothing".into();
    draft.ingredients.clear();
    draft.steps.clear();

    let errors = draft.to_payload("u1").unwrap_err();
    assert_eq!(errors.get(Field::Ingredients), Some("At least one ingredient is required"));
    assert_eq!(errors.len(), 1);
}
