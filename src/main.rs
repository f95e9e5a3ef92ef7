//! rpi-uploader - File Uploader
//!
//! ファイルをマルチパートで HTTP エンドポイントへアップロード

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::{CommandFactory, Parser};
use log::warn;
use std::process::ExitCode;

use rpi_uploader::adapter::config::Config;
use rpi_uploader::driver::settings::expand_path;
use rpi_uploader::driver::workflow::EXIT_FAILURE;
use rpi_uploader::driver::{Args, Settings, UploaderWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    // Load configuration (a missing file is not an error)
    let config_path = args.config.as_deref().map(expand_path);
    let loaded = match &config_path {
        Some(path) => Config::load_if_exists(path)?,
        None => None,
    };
    let missing_config = match (&config_path, &loaded) {
        (Some(path), None) => Some(path.clone()),
        _ => None,
    };
    let config = loaded.unwrap_or_default();

    let default_filter = if Settings::resolve_verbose(&args, &config) {
        "info"
    } else {
        "off"
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if let Some(path) = missing_config {
        warn!("Config file {} not found, using defaults", path.display());
    }

    let settings = match Settings::resolve(&args, &config) {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Error: {}.", e);
            Args::command().print_help()?;
            println!();
            return Ok(ExitCode::from(EXIT_FAILURE));
        }
    };

    // Create workflow with injected dependencies
    let workflow = UploaderWorkflow::new(settings)?;

    let code = workflow.execute().await?;
    Ok(ExitCode::from(code))
}
