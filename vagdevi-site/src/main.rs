use vagdevi_site::app::{self, AppConfig};

use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("vagdevi_site", LevelFilter::Debug)
        .filter_module("vagdevi_config", LevelFilter::Info)
        .init();
}

fn main() -> iced::Result {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = match AppConfig::from_environment() {
        Ok(config) => config,
        Err(err) => {
            log::error!("Failed to load configuration: {err:#}");
            std::process::exit(1);
        }
    };

    app::application(config).run()
}
