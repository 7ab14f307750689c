use serde::{Deserialize, Serialize};

use super::User;

/// Body of the credential endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of the registration endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Successful login response
///
/// Some deployments return only the token; the client then resolves the
/// user through `/user/profile`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    #[serde(alias = "accessToken", alias = "jwt")]
    pub token: String,
    #[serde(default)]
    pub user: Option<User>,
}

/// Response of `POST /image/upload`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_response_accepts_token_aliases() {
        let plain: AuthResponse = serde_json::from_str(r#"{"token":"t1"}"#).unwrap();
        assert_eq!(plain.token, "t1");
        assert!(plain.user.is_none());

        let aliased: AuthResponse =
            serde_json::from_str(r#"{"accessToken":"t2","user":{"id":"u1"}}"#).unwrap();
        assert_eq!(aliased.token, "t2");
        assert_eq!(aliased.user.map(|u| u.id), Some("u1".to_string()));

        let jwt: AuthResponse = serde_json::from_str(r#"{"jwt":"t3"}"#).unwrap();
        assert_eq!(jwt.token, "t3");
    }
}
