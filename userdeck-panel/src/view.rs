//! Panel view: target header, the two forms, and the record list.

use iced::widget::{
    Space, button, column, container, pick_list, row, scrollable, text,
    text_input,
};
use iced::{Alignment, Color, Element, Length};
use userdeck_model::UserRecord;

use crate::components;
use crate::messages::Message;
use crate::state::State;
use crate::theme::{self, UserDeckTheme};

const FORM_WIDTH: f32 = 420.0;

/// Render the whole panel.
pub fn view(state: &State) -> Element<'_, Message> {
    let accent = theme::target_accent(&state.target);

    let header = column![
        text(backend_title(&state.target)).size(26).color(accent),
        pick_list(
            state.known_targets.clone(),
            Some(state.target.clone()),
            Message::TargetSelected,
        )
        .padding([6, 12]),
    ]
    .spacing(10)
    .align_x(Alignment::Center);

    let content = column![
        Space::with_height(24),
        header,
        Space::with_height(24),
        create_form(state),
        Space::with_height(16),
        update_form(state),
        Space::with_height(24),
        user_list(state, accent),
        Space::with_height(24),
    ]
    .align_x(Alignment::Center)
    .width(Length::Fill);

    container(scrollable(content).width(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::Container::Default.style())
        .into()
}

fn create_form(state: &State) -> Element<'_, Message> {
    container(
        column![
            text("Add User").size(15).color(UserDeckTheme::TEXT_SECONDARY),
            text_input("Name", &state.new_user.name)
                .on_input(Message::NewUserNameChanged)
                .padding(10)
                .size(15)
                .style(theme::TextInput::style()),
            text_input("Email", &state.new_user.email)
                .on_input(Message::NewUserEmailChanged)
                .padding(10)
                .size(15)
                .style(theme::TextInput::style()),
            button(text("Add User").size(15))
                .on_press(Message::CreateSubmitted)
                .padding([10, 24])
                .width(Length::Fill)
                .style(theme::Button::Primary.style()),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fixed(FORM_WIDTH))
    .style(theme::Container::Card.style())
    .into()
}

fn update_form(state: &State) -> Element<'_, Message> {
    container(
        column![
            text("Update User")
                .size(15)
                .color(UserDeckTheme::TEXT_SECONDARY),
            text_input("User Id", &state.update_user.id)
                .on_input(Message::UpdateUserIdChanged)
                .padding(10)
                .size(15)
                .style(theme::TextInput::style()),
            text_input("New Name", &state.update_user.name)
                .on_input(Message::UpdateUserNameChanged)
                .padding(10)
                .size(15)
                .style(theme::TextInput::style()),
            text_input("New Email", &state.update_user.email)
                .on_input(Message::UpdateUserEmailChanged)
                .padding(10)
                .size(15)
                .style(theme::TextInput::style()),
            button(text("Update User").size(15))
                .on_press(Message::UpdateSubmitted)
                .padding([10, 24])
                .width(Length::Fill)
                .style(theme::Button::Primary.style()),
        ]
        .spacing(8),
    )
    .padding(16)
    .width(Length::Fixed(FORM_WIDTH))
    .style(theme::Container::Card.style())
    .into()
}

fn user_list(state: &State, accent: Color) -> Element<'_, Message> {
    let mut list = column![].spacing(12).align_x(Alignment::Center);

    for user in &state.users {
        list = list.push(user_row(user, accent));
    }

    list.into()
}

fn user_row(user: &UserRecord, accent: Color) -> Element<'_, Message> {
    row![
        components::user_card(user),
        button(text("Delete User").size(14))
            .on_press(Message::DeleteUser(user.id))
            .padding([16, 18])
            .style(theme::target_button(accent)),
    ]
    .spacing(12)
    .align_y(Alignment::Center)
    .width(Length::Fixed(FORM_WIDTH))
    .into()
}

fn backend_title(target: &str) -> String {
    let mut chars = target.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{capitalized} Backend")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_title_capitalizes_the_target() {
        assert_eq!(backend_title("axum"), "Axum Backend");
        assert_eq!(backend_title("demo"), "Demo Backend");
        assert_eq!(backend_title(""), " Backend");
    }
}
