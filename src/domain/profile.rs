//! User profile entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Profile domain entity.
///
/// The profile id doubles as the user id everywhere else in the system
/// (enrollments, progress, JWT subject).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Create a new profile for a registering user
    pub fn new(id: Uuid, email: String, password_hash: String, full_name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            password_hash,
            full_name,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a profile edit
    pub fn update(&mut self, full_name: Option<String>, avatar_url: Option<String>) {
        if let Some(full_name) = full_name {
            self.full_name = Some(full_name);
        }
        if let Some(avatar_url) = avatar_url {
            self.avatar_url = Some(avatar_url);
        }
        self.updated_at = Utc::now();
    }
}

/// Profile update data transfer object
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct UpdateProfile {
    /// New display name
    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,
    /// New avatar image URL
    pub avatar_url: Option<String>,
}

/// Profile response (safe to return to client)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProfileResponse {
    pub id: Uuid,
    #[schema(example = "user@example.com")]
    pub email: String,
    #[schema(example = "Jane Doe")]
    pub full_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id,
            email: profile.email,
            full_name: profile.full_name,
            avatar_url: profile.avatar_url,
            created_at: profile.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_leaves_unset_fields_alone() {
        let mut profile = Profile::new(
            Uuid::new_v4(),
            "user@example.com".to_string(),
            "hashed".to_string(),
            Some("Old Name".to_string()),
        );

        profile.update(None, Some("https://cdn.example.com/a.png".to_string()));

        assert_eq!(profile.full_name.as_deref(), Some("Old Name"));
        assert_eq!(
            profile.avatar_url.as_deref(),
            Some("https://cdn.example.com/a.png")
        );
    }

    #[test]
    fn response_never_carries_the_password_hash() {
        let profile = Profile::new(
            Uuid::new_v4(),
            "user@example.com".to_string(),
            "hashed".to_string(),
            None,
        );
        let json = serde_json::to_value(&profile).unwrap();
        assert!(json.get("password_hash").is_none());
    }
}
