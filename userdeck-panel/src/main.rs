use userdeck_panel::app::{self, AppConfig};
use userdeck_panel::config::Config;

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("userdeck_panel", LevelFilter::Debug)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    // Seed a config file on first launch so there is something to edit.
    if Config::path().is_some_and(|path| !path.exists()) {
        if let Err(err) = Config::default().save() {
            log::warn!("Failed to write default config: {err}");
        }
    }

    let config = AppConfig::from_environment();

    app::run(config)
}
