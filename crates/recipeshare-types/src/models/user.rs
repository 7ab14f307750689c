use serde::{Deserialize, Serialize};

use super::{ids_or_numbers, null_as_default, string_or_number};

/// A registered user as returned by `/user/profile` and `/user/{id}`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub email: String,
    /// Ids of users following this user
    #[serde(default, deserialize_with = "ids_or_numbers")]
    pub followers: Vec<String>,
    /// Ids of users this user follows
    #[serde(default, deserialize_with = "ids_or_numbers")]
    pub following: Vec<String>,
}

impl User {
    pub fn follower_count(&self) -> usize {
        self.followers.len()
    }

    pub fn following_count(&self) -> usize {
        self.following.len()
    }

    /// Whether `user_id` is among this user's followers
    pub fn is_followed_by(&self, user_id: &str) -> bool {
        self.followers.iter().any(|id| id == user_id)
    }

    /// Uppercased first letter of the username, used for avatars
    pub fn initial(&self) -> String {
        self.username
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_else(|| "U".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_null_lists_default_to_empty() {
        let json = r#"{"id":"u1","username":"chef","email":"c@x.io","followers":null}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert!(user.followers.is_empty());
        assert!(user.following.is_empty());
        assert_eq!(user.follower_count(), 0);
    }

    #[test]
    fn test_user_numeric_ids() {
        let json = r#"{"id":42,"username":"chef","followers":[1,"u2"],"following":[3]}"#;
        let user: User = serde_json::from_str(json).unwrap();

        assert_eq!(user.id, "42");
        assert!(user.is_followed_by("1"));
        assert!(user.is_followed_by("u2"));
        assert_eq!(user.following, vec!["3".to_string()]);
    }

    #[test]
    fn test_user_initial() {
        let user = User {
            id: "u1".into(),
            username: "émile".into(),
            ..Default::default()
        };
        assert_eq!(user.initial(), "É");

        let anonymous = User::default();
        assert_eq!(anonymous.initial(), "U");
    }

    #[test]
    fn test_is_followed_by() {
        let user = User {
            id: "author".into(),
            followers: vec!["a".into(), "b".into()],
            ..Default::default()
        };
        assert!(user.is_followed_by("b"));
        assert!(!user.is_followed_by("c"));
    }
}
