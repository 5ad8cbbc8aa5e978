mod app;
mod error;
mod paths;
mod settings;
mod term;
mod theme;
mod view;

use std::fs::{self, File};
use std::process::ExitCode;

use datatable_lib::dataset;
use datatable_lib::engine::ClientEngine;
use datatable_lib::model::athlete_columns;
use simplelog::{Config, WriteLogger};

use crate::app::{App, AppOptions};
use crate::error::AppError;
use crate::settings::Settings;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let settings = Settings::load_default()?;
    init_logging(&settings)?;
    log::info!("Starting with {:?}", settings);

    let athletes = match &settings.data_file {
        Some(path) => dataset::load_athletes_from(path)?,
        None => dataset::bundled_athletes()?,
    };
    let engine = ClientEngine::new(athlete_columns(), athletes).with_page_size(settings.page_size);
    let app = App::new(
        engine,
        "Olympic Winners",
        AppOptions {
            abandon_policy: settings.abandon_policy,
            apply_edits: settings.apply_edits,
        },
    );

    app::run(app).await?;
    log::info!("Exited cleanly");
    Ok(())
}

/// Log to `latest.log` in the cache directory, archiving the previous one.
fn init_logging(settings: &Settings) -> Result<(), AppError> {
    let Some(path) = paths::log_file() else {
        return Ok(());
    };
    paths::rotate_logs();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let file = File::create(&path)?;
    WriteLogger::init(settings.level_filter()?, Config::default(), file)?;
    Ok(())
}
