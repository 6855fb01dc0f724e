//! The user record entity and the transient form drafts.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Server-assigned record identifier.
pub type UserId = i64;

/// A persisted user record.
///
/// The id is assigned by the server on creation and never changes for
/// the lifetime of the record. Within one backend target it uniquely
/// identifies the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: UserId,
    pub name: String,
    pub email: String,
}

/// Draft state for the creation form.
///
/// Client-only: never persisted, reset to empty after a successful
/// create submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUserDraft {
    pub name: String,
    pub email: String,
}

/// Draft state for the update form.
///
/// The id field is free text until submission; it is sent verbatim as
/// the path segment and only parsed when patching the local list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserDraft {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl UpdateUserDraft {
    /// Parse the typed id into a record id.
    pub fn record_id(&self) -> Result<UserId> {
        self.id
            .trim()
            .parse()
            .map_err(|_| ModelError::InvalidUserId(self.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_id_parses_digits() {
        let draft = UpdateUserDraft {
            id: "42".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.record_id(), Ok(42));
    }

    #[test]
    fn record_id_tolerates_surrounding_whitespace() {
        let draft = UpdateUserDraft {
            id: " 7 ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.record_id(), Ok(7));
    }

    #[test]
    fn record_id_rejects_non_numeric_input() {
        let draft = UpdateUserDraft {
            id: "abc".to_string(),
            ..Default::default()
        };
        assert_eq!(
            draft.record_id(),
            Err(ModelError::InvalidUserId("abc".to_string()))
        );
    }

    #[test]
    fn user_record_round_trips_through_json() {
        let record = UserRecord {
            id: 5,
            name: "A".to_string(),
            email: "a@x.com".to_string(),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"id":5,"name":"A","email":"a@x.com"}"#);
        let back: UserRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
