mod config;
mod engine;
mod error;
mod layout;
mod types;
mod ui;

use std::process::ExitCode;

use config::WindowConfig;
use layout::DemoLayout;
use ui::app::App;

fn run(config: &WindowConfig) -> error::Result<()> {
    log::info!("opening \"{}\" at {}", config.title, config.geometry());
    eframe::run_native(
        config.title,
        config.native_options(),
        Box::new(|cc| Ok(Box::new(App::new(cc, DemoLayout::standard())))),
    )?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    match run(&WindowConfig::default()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
