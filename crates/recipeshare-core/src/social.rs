//! Like and follow toggles
//!
//! Both toggles are optimistic: the view flips local state on click, fires
//! the request, and calls `toggle` a second time to undo the flip if that
//! request fails. Each click moves the count by exactly one.

use recipeshare_types::{Recipe, User};

/// Like button state of a recipe, from the viewer's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LikeState {
    pub liked: bool,
    pub count: usize,
}

impl LikeState {
    pub fn for_viewer(recipe: &Recipe, viewer_id: Option<&str>) -> Self {
        Self {
            liked: viewer_id.is_some_and(|id| recipe.is_liked_by(id)),
            count: recipe.like_count(),
        }
    }

    pub fn toggle(&mut self) {
        if self.liked {
            self.liked = false;
            self.count = self.count.saturating_sub(1);
        } else {
            self.liked = true;
            self.count += 1;
        }
    }
}

/// Follow button state for a recipe's author
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FollowState {
    pub following: bool,
    pub followers: usize,
}

impl FollowState {
    pub fn for_viewer(author: &User, viewer_id: Option<&str>) -> Self {
        Self {
            following: viewer_id.is_some_and(|id| author.is_followed_by(id)),
            followers: author.follower_count(),
        }
    }

    pub fn toggle(&mut self) {
        if self.following {
            self.following = false;
            self.followers = self.followers.saturating_sub(1);
        } else {
            self.following = true;
            self.followers += 1;
        }
    }

    pub fn label(&self) -> &'static str {
        if self.following {
            "Following"
        } else {
            "Follow"
        }
    }
}

/// Edit/delete controls are shown only to the recipe's owner
pub fn is_owner(recipe: &Recipe, viewer: Option<&User>) -> bool {
    viewer.is_some_and(|user| recipe.is_owned_by(&user.id))
}

/// Follow controls make no sense on your own recipe
pub fn can_follow(author: &User, viewer: Option<&User>) -> bool {
    viewer.is_some_and(|user| user.id != author.id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn liked_recipe() -> Recipe {
        Recipe {
            id: "r1".into(),
            user_id: "owner".into(),
            liked_user_ids: vec!["me".into(), "other".into()],
            ..Default::default()
        }
    }

    #[test]
    fn test_like_state_for_viewer() {
        let recipe = liked_recipe();
        assert_eq!(
            LikeState::for_viewer(&recipe, Some("me")),
            LikeState { liked: true, count: 2 }
        );
        assert_eq!(
            LikeState::for_viewer(&recipe, None),
            LikeState { liked: false, count: 2 }
        );
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut state = LikeState { liked: false, count: 4 };
        state.toggle();
        assert_eq!(state, LikeState { liked: true, count: 5 });
        state.toggle();
        assert_eq!(state, LikeState { liked: false, count: 4 });
    }

    #[test]
    fn test_unlike_never_underflows() {
        let mut state = LikeState { liked: true, count: 0 };
        state.toggle();
        assert_eq!(state.count, 0);
    }

    #[test]
    fn test_follow_toggle() {
        let author = User {
            id: "owner".into(),
            followers: vec!["x".into()],
            ..Default::default()
        };
        let mut state = FollowState::for_viewer(&author, Some("me"));
        assert_eq!(state.label(), "Follow");

        state.toggle();
        assert!(state.following);
        assert_eq!(state.followers, 2);
        assert_eq!(state.label(), "Following");
    }

    #[test]
    fn test_ownership() {
        let recipe = liked_recipe();
        let owner = User { id: "owner".into(), ..Default::default() };
        let visitor = User { id: "me".into(), ..Default::default() };

        assert!(is_owner(&recipe, Some(&owner)));
        assert!(!is_owner(&recipe, Some(&visitor)));
        assert!(!is_owner(&recipe, None));
        assert!(!can_follow(&owner, Some(&owner)));
        assert!(can_follow(&owner, Some(&visitor)));
    }
}
