//! Page components, one per client route

mod create_recipe;
mod edit_recipe;
mod home;
mod login;
mod not_found;
mod profile;
mod recipe_detail;
mod register;

pub use create_recipe::CreateRecipe;
pub use edit_recipe::EditRecipe;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use profile::Profile;
pub use recipe_detail::RecipeDetail;
pub use register::Register;
