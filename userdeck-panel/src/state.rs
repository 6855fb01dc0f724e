use userdeck_model::{NewUserDraft, UpdateUserDraft, UserRecord};

use crate::api_client::ApiClient;

/// All panel state.
///
/// The record list and both drafts are exclusively owned here; nothing
/// outside the update loop mutates them.
#[derive(Debug)]
pub struct State {
    pub api: ApiClient,
    /// Backend flavor currently addressed; a path segment server-side.
    pub target: String,
    pub known_targets: Vec<String>,
    /// Display order: reverse of the server's list order.
    pub users: Vec<UserRecord>,
    pub new_user: NewUserDraft,
    pub update_user: UpdateUserDraft,
}

impl State {
    pub fn new(
        server_url: String,
        target: String,
        known_targets: Vec<String>,
    ) -> Self {
        Self {
            api: ApiClient::new(server_url),
            target,
            known_targets,
            users: Vec::new(),
            new_user: NewUserDraft::default(),
            update_user: UpdateUserDraft::default(),
        }
    }
}
