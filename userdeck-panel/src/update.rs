//! Panel update loop.
//!
//! Each submission captures what it needs from the drafts, performs the
//! network call as a task, and patches local state from the completion
//! message. Failures are logged and leave prior state intact.

use iced::Task;
use log::{debug, error, info};
use userdeck_model::{
    CreateUserRequest, NewUserDraft, UpdateUserDraft, UpdateUserRequest,
    UserId, UserRecord,
};

use crate::messages::Message;
use crate::state::State;

/// Top-level message handler for the panel.
pub fn update(state: &mut State, message: Message) -> Task<Message> {
    debug!("Panel update: {}", message.name());

    match message {
        // Record list
        Message::TargetSelected(target) => {
            handle_target_selected(state, target)
        }
        Message::UsersLoaded(result) => handle_users_loaded(state, result),

        // Creation form
        Message::NewUserNameChanged(name) => {
            state.new_user.name = name;
            Task::none()
        }
        Message::NewUserEmailChanged(email) => {
            state.new_user.email = email;
            Task::none()
        }
        Message::CreateSubmitted => handle_create_submitted(state),
        Message::UserCreated(result) => handle_user_created(state, result),

        // Update form
        Message::UpdateUserIdChanged(id) => {
            state.update_user.id = id;
            Task::none()
        }
        Message::UpdateUserNameChanged(name) => {
            state.update_user.name = name;
            Task::none()
        }
        Message::UpdateUserEmailChanged(email) => {
            state.update_user.email = email;
            Task::none()
        }
        Message::UpdateSubmitted => handle_update_submitted(state),
        Message::UserUpdated(result) => handle_user_updated(state, result),

        // Per-record delete action
        Message::DeleteUser(id) => handle_delete_user(state, id),
        Message::UserDeleted(result) => handle_user_deleted(state, result),
    }
}

/// Issue a read request for every record of the current target.
pub fn load_users(state: &State) -> Task<Message> {
    let api = state.api.clone();
    let target = state.target.clone();

    Task::perform(
        async move {
            api.list_users(&target).await.map_err(|err| err.to_string())
        },
        Message::UsersLoaded,
    )
}

fn handle_target_selected(state: &mut State, target: String) -> Task<Message> {
    if target == state.target {
        return Task::none();
    }

    info!("Switching backend target to {target}");
    state.target = target;
    load_users(state)
}

fn handle_users_loaded(
    state: &mut State,
    result: Result<Vec<UserRecord>, String>,
) -> Task<Message> {
    match result {
        Ok(mut users) => {
            info!("Loaded {} users", users.len());
            // Display order is the reverse of server order: most recently
            // returned records first.
            users.reverse();
            state.users = users;
        }
        Err(error) => error!("Error fetching users: {error}"),
    }
    Task::none()
}

fn handle_create_submitted(state: &mut State) -> Task<Message> {
    let api = state.api.clone();
    let target = state.target.clone();
    let request = CreateUserRequest {
        name: state.new_user.name.clone(),
        email: state.new_user.email.clone(),
    };

    Task::perform(
        async move {
            api.create_user(&target, &request)
                .await
                .map_err(|err| err.to_string())
        },
        Message::UserCreated,
    )
}

fn handle_user_created(
    state: &mut State,
    result: Result<UserRecord, String>,
) -> Task<Message> {
    match result {
        Ok(user) => {
            info!("Created user {}", user.id);
            state.users.insert(0, user);
            state.new_user = NewUserDraft::default();
        }
        Err(error) => error!("Error creating user: {error}"),
    }
    Task::none()
}

fn handle_update_submitted(state: &mut State) -> Task<Message> {
    let api = state.api.clone();
    let target = state.target.clone();
    let submitted = state.update_user.clone();

    Task::perform(
        async move {
            let request = UpdateUserRequest {
                name: submitted.name.clone(),
                email: submitted.email.clone(),
            };
            let result =
                api.update_user(&target, &submitted.id, &request).await;
            result.map(|()| submitted).map_err(|err| err.to_string())
        },
        Message::UserUpdated,
    )
}

fn handle_user_updated(
    state: &mut State,
    result: Result<UpdateUserDraft, String>,
) -> Task<Message> {
    match result {
        Ok(submitted) => {
            state.update_user = UpdateUserDraft::default();

            match submitted.record_id() {
                Ok(id) => {
                    for user in &mut state.users {
                        if user.id == id {
                            user.name = submitted.name.clone();
                            user.email = submitted.email.clone();
                        }
                    }
                }
                // The backend accepted the id as an opaque segment but it
                // names no local record; nothing to patch.
                Err(err) => error!("Update applied remotely, but {err}"),
            }
        }
        Err(error) => error!("Error updating user: {error}"),
    }
    Task::none()
}

fn handle_delete_user(state: &mut State, id: UserId) -> Task<Message> {
    info!("Deleting user {id}");
    let api = state.api.clone();
    let target = state.target.clone();

    Task::perform(
        async move {
            api.delete_user(&target, id)
                .await
                .map(|()| id)
                .map_err(|err| err.to_string())
        },
        Message::UserDeleted,
    )
}

fn handle_user_deleted(
    state: &mut State,
    result: Result<UserId, String>,
) -> Task<Message> {
    match result {
        Ok(id) => {
            state.users.retain(|user| user.id != id);
        }
        Err(error) => error!("Error deleting user: {error}"),
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_state() -> State {
        State::new(
            "http://localhost:4000".to_string(),
            "axum".to_string(),
            vec!["axum".to_string(), "demo".to_string()],
        )
    }

    fn record(id: UserId, name: &str, email: &str) -> UserRecord {
        UserRecord {
            id,
            name: name.to_string(),
            email: email.to_string(),
        }
    }

    #[test]
    fn loaded_users_display_in_reverse_server_order() {
        let mut state = test_state();
        let _ = update(
            &mut state,
            Message::UsersLoaded(Ok(vec![
                record(1, "A", "a@x.com"),
                record(2, "B", "b@x.com"),
                record(3, "C", "c@x.com"),
            ])),
        );

        let ids: Vec<_> = state.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, [3, 2, 1]);
    }

    #[test]
    fn empty_backend_response_renders_an_empty_list() {
        let mut state = test_state();
        state.users = vec![record(1, "A", "a@x.com")];

        let _ = update(&mut state, Message::UsersLoaded(Ok(Vec::new())));
        assert!(state.users.is_empty());
    }

    #[test]
    fn failed_load_leaves_the_list_unchanged() {
        let mut state = test_state();
        state.users = vec![record(1, "A", "a@x.com")];

        let _ = update(
            &mut state,
            Message::UsersLoaded(Err("connection refused".to_string())),
        );
        assert_eq!(state.users, vec![record(1, "A", "a@x.com")]);
    }

    #[test]
    fn successful_create_prepends_and_clears_the_draft() {
        let mut state = test_state();
        state.users = vec![record(1, "A", "a@x.com")];
        state.new_user.name = "A".to_string();
        state.new_user.email = "a@x.com".to_string();

        let created = record(5, "A", "a@x.com");
        let _ = update(&mut state, Message::UserCreated(Ok(created.clone())));

        assert_eq!(state.users.first(), Some(&created));
        assert_eq!(state.users.len(), 2);
        assert_eq!(state.new_user, NewUserDraft::default());
    }

    #[test]
    fn failed_create_keeps_the_list_and_the_draft() {
        let mut state = test_state();
        state.users = vec![record(1, "A", "a@x.com")];
        state.new_user.name = "B".to_string();
        state.new_user.email = "b@x.com".to_string();

        let _ = update(
            &mut state,
            Message::UserCreated(Err("500 Internal Server Error".to_string())),
        );

        assert_eq!(state.users, vec![record(1, "A", "a@x.com")]);
        assert_eq!(state.new_user.name, "B");
        assert_eq!(state.new_user.email, "b@x.com");
    }

    #[test]
    fn successful_update_patches_only_the_matching_entry() {
        let mut state = test_state();
        state.users = vec![
            record(1, "A", "a@x.com"),
            record(2, "B", "b@x.com"),
            record(3, "C", "c@x.com"),
        ];

        let submitted = UpdateUserDraft {
            id: "3".to_string(),
            name: "B".to_string(),
            email: "new@x.com".to_string(),
        };
        let _ = update(&mut state, Message::UserUpdated(Ok(submitted)));

        assert_eq!(state.users[2], record(3, "B", "new@x.com"));
        assert_eq!(state.users[0], record(1, "A", "a@x.com"));
        assert_eq!(state.users[1], record(2, "B", "b@x.com"));
        assert_eq!(state.update_user, UpdateUserDraft::default());
    }

    #[test]
    fn update_with_unparsable_id_patches_nothing() {
        let mut state = test_state();
        state.users = vec![record(1, "A", "a@x.com")];

        let submitted = UpdateUserDraft {
            id: "first".to_string(),
            name: "B".to_string(),
            email: "b@x.com".to_string(),
        };
        let _ = update(&mut state, Message::UserUpdated(Ok(submitted)));

        assert_eq!(state.users, vec![record(1, "A", "a@x.com")]);
        assert_eq!(state.update_user, UpdateUserDraft::default());
    }

    #[test]
    fn failed_update_logs_only() {
        let mut state = test_state();
        state.users = vec![record(1, "A", "a@x.com")];
        state.update_user = UpdateUserDraft {
            id: "1".to_string(),
            name: "B".to_string(),
            email: "b@x.com".to_string(),
        };

        let _ = update(
            &mut state,
            Message::UserUpdated(Err("404 Not Found".to_string())),
        );

        assert_eq!(state.users, vec![record(1, "A", "a@x.com")]);
        // The draft stays populated for another attempt.
        assert_eq!(state.update_user.id, "1");
    }

    #[test]
    fn successful_delete_removes_exactly_the_matching_entry() {
        let mut state = test_state();
        state.users = vec![
            record(3, "C", "c@x.com"),
            record(2, "B", "b@x.com"),
            record(1, "A", "a@x.com"),
        ];

        let _ = update(&mut state, Message::UserDeleted(Ok(2)));

        let ids: Vec<_> = state.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn failed_delete_mutates_nothing() {
        let mut state = test_state();
        state.users = vec![record(1, "A", "a@x.com")];

        let _ = update(
            &mut state,
            Message::UserDeleted(Err("connection reset".to_string())),
        );
        assert_eq!(state.users, vec![record(1, "A", "a@x.com")]);
    }

    #[test]
    fn selecting_a_target_switches_and_reloads() {
        let mut state = test_state();
        let _ = update(
            &mut state,
            Message::TargetSelected("demo".to_string()),
        );
        assert_eq!(state.target, "demo");

        // Re-selecting the current target is a no-op.
        let _ = update(
            &mut state,
            Message::TargetSelected("demo".to_string()),
        );
        assert_eq!(state.target, "demo");
    }

    #[test]
    fn form_inputs_mutate_the_drafts() {
        let mut state = test_state();
        let _ = update(
            &mut state,
            Message::NewUserNameChanged("A".to_string()),
        );
        let _ = update(
            &mut state,
            Message::NewUserEmailChanged("a@x.com".to_string()),
        );
        let _ = update(
            &mut state,
            Message::UpdateUserIdChanged("3".to_string()),
        );

        assert_eq!(state.new_user.name, "A");
        assert_eq!(state.new_user.email, "a@x.com");
        assert_eq!(state.update_user.id, "3");
    }

    #[test]
    fn submissions_do_not_touch_state_until_completion() {
        let mut state = test_state();
        state.new_user.name = "A".to_string();
        state.update_user.id = "1".to_string();

        let _ = update(&mut state, Message::CreateSubmitted);
        let _ = update(&mut state, Message::UpdateSubmitted);

        // No validation, no clearing: the drafts survive until the
        // completion message arrives.
        assert_eq!(state.new_user.name, "A");
        assert_eq!(state.update_user.id, "1");
        assert!(state.users.is_empty());
    }
}
