use crate::framework::RecordId;
use serde::{Deserialize, Serialize};

use super::null_as_default;

/// A registered user.
///
/// Managed by a [`ResourceActor`](crate::framework::ResourceActor) through the
/// [`ResourceEntity`](crate::framework::ResourceEntity) impl in [`crate::user_actor`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: RecordId,
    pub name: String,
    pub email: String,
}

impl User {
    pub fn new(id: RecordId, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Payload for creating a new user. Missing and `null` fields decode as empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserCreate {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
}

/// Payload for updating an existing user.
///
/// Absent, `null` and empty-string fields all leave the stored value unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}
