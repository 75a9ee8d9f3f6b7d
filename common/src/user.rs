use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique user identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub Uuid);

impl UserId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for UserId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Role a user has in the shop. `Admin` unlocks the back-office operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Customer,
    Admin,
}

/// A shop user: identity plus optional profile fields settable after
/// registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Shallow-merge a patch: only fields present in the patch change.
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(phone) = patch.phone {
            self.phone = Some(phone);
        }
        if let Some(address) = patch.address {
            self.address = Some(address);
        }
    }
}

/// Partial profile update. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// An authenticated session: the user plus an opaque bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: User,
    pub token: String,
}

impl Session {
    /// Mint a session for the user with a fresh opaque token.
    pub fn establish(user: User) -> Self {
        let token = Uuid::new_v4().simple().to_string();
        Self { user, token }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_user(role: UserRole) -> User {
        User {
            id: UserId::new(),
            name: "Regular User".into(),
            email: "user@example.com".into(),
            role,
            phone: None,
            address: None,
        }
    }

    #[test]
    fn profile_patch_merges_only_present_fields() {
        let mut user = dummy_user(UserRole::Customer);
        user.apply(ProfilePatch {
            phone: Some("555-0100".into()),
            ..ProfilePatch::default()
        });

        assert_eq!(user.phone.as_deref(), Some("555-0100"));
        assert_eq!(user.name, "Regular User");
        assert!(user.address.is_none());
    }

    #[test]
    fn admin_flag_follows_role() {
        assert!(dummy_user(UserRole::Admin).is_admin());
        assert!(!dummy_user(UserRole::Customer).is_admin());
    }

    #[test]
    fn sessions_get_distinct_opaque_tokens() {
        let a = Session::establish(dummy_user(UserRole::Customer));
        let b = Session::establish(dummy_user(UserRole::Customer));
        assert!(!a.token.is_empty());
        assert_ne!(a.token, b.token);
    }

    #[test]
    fn user_json_without_profile_fields_deserializes() {
        // Documents written before phone/address existed must still load
        let json = format!(
            r#"{{"id":"{}","name":"A","email":"a@a.com","role":"Customer"}}"#,
            Uuid::new_v4()
        );
        let user: User = serde_json::from_str(&json).unwrap();
        assert!(user.phone.is_none());
        assert!(user.address.is_none());
    }
}
