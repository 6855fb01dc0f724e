//! Request bodies shared between the panel and the server.

use serde::{Deserialize, Serialize};

/// Body of a create submission. The server assigns the id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Body of an update submission for an existing record.
///
/// Same shape as [`CreateUserRequest`] on the wire; kept a distinct
/// type so handler signatures name their operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateUserRequest {
    pub name: String,
    pub email: String,
}
