//! [`ResourceEntity`] implementation for the [`User`] record.
//!
//! Users accept any decodable body on create; nothing is validated.

use crate::framework::{set_if_present, RecordId, ResourceEntity};
use crate::model::{User, UserCreate, UserUpdate};
use std::convert::Infallible;

impl ResourceEntity for User {
    type Create = UserCreate;
    type Update = UserUpdate;
    type Filter = ();
    type Error = Infallible;

    const KIND: &'static str = "User";
    const SINGULAR: &'static str = "user";
    const COLLECTION: &'static str = "users";

    fn id(&self) -> RecordId {
        self.id
    }

    /// Creates a new User from creation parameters.
    fn from_create_params(id: RecordId, params: UserCreate) -> Result<Self, Infallible> {
        Ok(Self::new(id, params.name, params.email))
    }

    /// Handles updates to the User entity.
    ///
    /// # Fields Updated
    /// - `name`: when non-empty
    /// - `email`: when non-empty
    fn on_update(&mut self, update: UserUpdate) {
        set_if_present(&mut self.name, update.name);
        set_if_present(&mut self.email, update.email);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_accepts_empty_fields() {
        let user = User::from_create_params(9, UserCreate::default()).unwrap();
        assert_eq!(user, User::new(9, "", ""));
    }

    #[test]
    fn test_update_only_overwrites_non_empty_fields() {
        let mut user = User::new(1, "Alice", "alice@example.com");

        user.on_update(UserUpdate {
            name: Some("Alicia".to_string()),
            email: Some(String::new()),
        });
        assert_eq!(user, User::new(1, "Alicia", "alice@example.com"));

        user.on_update(UserUpdate::default());
        assert_eq!(user, User::new(1, "Alicia", "alice@example.com"));
    }
}
