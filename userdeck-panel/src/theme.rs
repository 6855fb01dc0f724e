use iced::{
    Background, Border, Color, Shadow, Theme, theme,
    widget::{button, container, text_input},
};

/// Dark admin-panel theme with a per-target accent.
#[derive(Debug, Clone, Copy)]
pub struct UserDeckTheme;

impl UserDeckTheme {
    // Core colors
    pub const BLACK: Color = Color::from_rgb(0.0, 0.0, 0.0); // #000000
    pub const ACCENT_BLUE: Color = Color::from_rgb(0.0, 0.5, 1.0); // #0080FF
    pub const ACCENT_BLUE_HOVER: Color = Color::from_rgb(0.0, 0.6, 1.0); // #0099FF

    // Grays
    pub const CARD_BG: Color = Color::from_rgb(0.1, 0.1, 0.1); // #1A1A1A
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.2, 0.2); // #333333

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(1.0, 1.0, 1.0); // #FFFFFF
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.7, 0.7, 0.7); // #B3B3B3
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.5, 0.5, 0.5); // #808080

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.0, 0.8, 0.4); // #00CC66
    pub const ERROR: Color = Color::from_rgb(1.0, 0.2, 0.2); // #FF3333

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::DARK;
        palette.background = Self::BLACK;
        palette.text = Self::TEXT_PRIMARY;
        palette.primary = Self::ACCENT_BLUE;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("UserDeck".to_string(), palette)
    }
}

/// Accent color for a backend target name.
///
/// Unknown targets fall back to gray; the map is deliberately a plain
/// match rather than anything dynamic.
pub fn target_accent(target: &str) -> Color {
    match target {
        "axum" => UserDeckTheme::ACCENT_BLUE,
        "demo" => UserDeckTheme::SUCCESS,
        _ => UserDeckTheme::TEXT_DIMMED,
    }
}

/// Button style tinted with the current target accent.
pub fn target_button(
    accent: Color,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                Color { a: 0.85, ..accent }
            }
            _ => accent,
        };

        button::Style {
            background: Some(Background::Color(background)),
            text_color: UserDeckTheme::TEXT_PRIMARY,
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: 4.0.into(),
            },
            shadow: Shadow::default(),
        }
    }
}

// Container styles using closures
pub enum Container {
    Default,
    Card,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Default => |_| container::Style {
                text_color: Some(UserDeckTheme::TEXT_PRIMARY),
                background: Some(Background::Color(UserDeckTheme::BLACK)),
                border: Border::default(),
                shadow: Shadow::default(),
            },
            Container::Card => |_| container::Style {
                text_color: Some(UserDeckTheme::TEXT_PRIMARY),
                background: Some(Background::Color(UserDeckTheme::CARD_BG)),
                border: Border {
                    color: UserDeckTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
            },
        }
    }
}

pub enum Button {
    Primary,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_theme, status| {
                let background = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        UserDeckTheme::ACCENT_BLUE_HOVER
                    }
                    _ => UserDeckTheme::ACCENT_BLUE,
                };

                button::Style {
                    background: Some(Background::Color(background)),
                    text_color: UserDeckTheme::TEXT_PRIMARY,
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 4.0.into(),
                    },
                    shadow: Shadow::default(),
                }
            },
        }
    }
}

pub struct TextInput;

impl TextInput {
    pub fn style() -> fn(&Theme, text_input::Status) -> text_input::Style {
        |_theme, status| {
            let border_color = match status {
                text_input::Status::Focused => UserDeckTheme::ACCENT_BLUE,
                text_input::Status::Hovered => UserDeckTheme::TEXT_DIMMED,
                _ => UserDeckTheme::BORDER_COLOR,
            };

            text_input::Style {
                background: Background::Color(UserDeckTheme::CARD_BG),
                border: Border {
                    color: border_color,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                icon: UserDeckTheme::TEXT_SECONDARY,
                placeholder: UserDeckTheme::TEXT_DIMMED,
                value: UserDeckTheme::TEXT_PRIMARY,
                selection: UserDeckTheme::ACCENT_BLUE,
            }
        }
    }
}
