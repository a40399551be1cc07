use serde::{Deserialize, Serialize};

use roomreel_core::types::Id;

/// A registered user. Submissions may reference one, but the flow also
/// works anonymously (authentication is out of scope).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Id,
    pub username: String,
}

/// DTO for creating a user.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub username: String,
}
