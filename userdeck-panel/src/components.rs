//! Presentational widgets for user records.

use iced::widget::{column, container, text};
use iced::{Element, Length};
use userdeck_model::UserRecord;

use crate::messages::Message;
use crate::theme::{self, UserDeckTheme};

/// Read-only card for one user record: id, name, and email.
///
/// Pure presentational mapping; no state, no interactions.
pub fn user_card(user: &UserRecord) -> Element<'_, Message> {
    container(
        column![
            text(user.id.to_string())
                .size(13)
                .color(UserDeckTheme::TEXT_DIMMED),
            text(user.name.as_str())
                .size(16)
                .color(UserDeckTheme::TEXT_PRIMARY),
            text(user.email.as_str())
                .size(14)
                .color(UserDeckTheme::TEXT_SECONDARY),
        ]
        .spacing(4),
    )
    .padding(12)
    .width(Length::Fill)
    .style(theme::Container::Card.style())
    .into()
}
