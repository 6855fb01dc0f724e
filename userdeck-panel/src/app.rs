//! Application wiring: resolved configuration, settings, and boot.

use iced::{Settings, Size, Task, Theme, window};

use crate::config::Config;
use crate::messages::Message;
use crate::state::State;
use crate::{theme, update, view};

/// Runtime configuration resolved from the config file and environment.
#[derive(Clone, Debug)]
pub struct AppConfig {
    pub server_url: String,
    pub target: String,
    pub known_targets: Vec<String>,
}

impl AppConfig {
    /// Resolve configuration: environment variables win over the config
    /// file, which wins over the built-in defaults.
    pub fn from_environment() -> Self {
        let file = Config::load();

        let server_url = std::env::var("USERDECK_SERVER_URL")
            .unwrap_or(file.server_url);
        let target =
            std::env::var("USERDECK_TARGET").unwrap_or(file.target);

        let server_url = match url::Url::parse(&server_url) {
            Ok(_) => server_url,
            Err(err) => {
                let fallback = Config::default().server_url;
                log::warn!(
                    "Invalid server URL {server_url:?} ({err}), using {fallback}"
                );
                fallback
            }
        };

        Self {
            server_url,
            target,
            known_targets: file.known_targets,
        }
    }
}

/// Run the panel application.
pub fn run(config: AppConfig) -> iced::Result {
    iced::application("UserDeck", update::update, view::view)
        .settings(default_settings())
        .theme(app_theme)
        .window(window::Settings {
            size: Size::new(900.0, 720.0),
            resizable: true,
            decorations: true,
            ..Default::default()
        })
        .run_with(move || boot(&config))
}

/// Initial state plus the first load of the record list.
pub fn boot(config: &AppConfig) -> (State, Task<Message>) {
    let state = State::new(
        config.server_url.clone(),
        config.target.clone(),
        config.known_targets.clone(),
    );
    let load = update::load_users(&state);
    (state, load)
}

fn default_settings() -> Settings {
    Settings {
        id: Some("userdeck-panel".to_string()),
        antialiasing: true,
        ..Default::default()
    }
}

fn app_theme(_: &State) -> Theme {
    theme::UserDeckTheme::theme()
}
