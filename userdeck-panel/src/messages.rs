use userdeck_model::{UpdateUserDraft, UserId, UserRecord};

/// Messages driving the panel update loop.
///
/// Network completions carry `Result<_, String>`: the error side is
/// only ever logged (fail-silent policy).
#[derive(Debug, Clone)]
pub enum Message {
    // Record list
    TargetSelected(String),
    UsersLoaded(Result<Vec<UserRecord>, String>),

    // Creation form
    NewUserNameChanged(String),
    NewUserEmailChanged(String),
    CreateSubmitted,
    UserCreated(Result<UserRecord, String>),

    // Update form. The success payload is the draft snapshot captured
    // at submit time; the PUT response body is unused.
    UpdateUserIdChanged(String),
    UpdateUserNameChanged(String),
    UpdateUserEmailChanged(String),
    UpdateSubmitted,
    UserUpdated(Result<UpdateUserDraft, String>),

    // Per-record delete action
    DeleteUser(UserId),
    UserDeleted(Result<UserId, String>),
}

impl Message {
    pub fn name(&self) -> &'static str {
        match self {
            Self::TargetSelected(_) => "Panel::TargetSelected",
            Self::UsersLoaded(_) => "Panel::UsersLoaded",
            Self::NewUserNameChanged(_) => "Panel::NewUserNameChanged",
            Self::NewUserEmailChanged(_) => "Panel::NewUserEmailChanged",
            Self::CreateSubmitted => "Panel::CreateSubmitted",
            Self::UserCreated(_) => "Panel::UserCreated",
            Self::UpdateUserIdChanged(_) => "Panel::UpdateUserIdChanged",
            Self::UpdateUserNameChanged(_) => "Panel::UpdateUserNameChanged",
            Self::UpdateUserEmailChanged(_) => "Panel::UpdateUserEmailChanged",
            Self::UpdateSubmitted => "Panel::UpdateSubmitted",
            Self::UserUpdated(_) => "Panel::UserUpdated",
            Self::DeleteUser(_) => "Panel::DeleteUser",
            Self::UserDeleted(_) => "Panel::UserDeleted",
        }
    }
}
