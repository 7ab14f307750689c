//! Client-side routes of the single-page app

pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const HOME: &str = "/";
pub const CREATE_RECIPE: &str = "/create-recipe";
pub const PROFILE: &str = "/profile";

pub fn recipe(id: &str) -> String {
    format!("/recipe/{}", id)
}

pub fn edit_recipe(id: &str) -> String {
    format!("/edit-recipe/{}", id)
}

/// Routes reachable without a session
pub fn is_public(path: &str) -> bool {
    matches!(path.trim_end_matches('/'), LOGIN | REGISTER)
}
