//! REST paths of the recipe API, relative to [`crate::ApiConfig`]

pub const LOGIN: &str = "/auth/login";
pub const REGISTER: &str = "/auth/register";
pub const ALL_RECIPES: &str = "/recipe/getAllRecipe";
pub const CREATE_RECIPE: &str = "/recipe/create";
pub const IMAGE_UPLOAD: &str = "/image/upload";
pub const PROFILE: &str = "/user/profile";

pub fn recipe(id: &str) -> String {
    format!("/recipe/{}", id)
}

pub fn update_recipe(id: &str) -> String {
    format!("/recipe/update/{}", id)
}

pub fn delete_recipe(id: &str) -> String {
    format!("/recipe/delete/{}", id)
}

pub fn like_recipe(id: &str) -> String {
    format!("/recipe/{}/like", id)
}

pub fn comment_recipe(id: &str) -> String {
    format!("/recipe/{}/comment", id)
}

pub fn recipe_comments(id: &str) -> String {
    format!("/recipe/{}/comments", id)
}

pub fn user(id: &str) -> String {
    format!("/user/{}", id)
}

pub fn follow_user(id: &str) -> String {
    format!("/user/{}/follow", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_paths() {
        assert_eq!(recipe("42"), "/recipe/42");
        assert_eq!(update_recipe("42"), "/recipe/update/42");
        assert_eq!(delete_recipe("42"), "/recipe/delete/42");
        assert_eq!(like_recipe("42"), "/recipe/42/like");
        assert_eq!(comment_recipe("42"), "/recipe/42/comment");
        assert_eq!(recipe_comments("42"), "/recipe/42/comments");
    }

    #[test]
    fn test_user_paths() {
        assert_eq!(user("u7"), "/user/u7");
        assert_eq!(follow_user("u7"), "/user/u7/follow");
    }
}
