//! Workflow Orchestration
//!
//! 実行モードごとのワークフロー

use anyhow::{Context, Result};
use clap::CommandFactory;
use log::info;
use std::path::Path;
use std::sync::Arc;

use crate::adapter::http::client::HttpUploadRepository;
use crate::adapter::http::endpoint::EndpointConfig;
use crate::adapter::repositories::local_file_repository::LocalFileRepository;
use crate::adapter::timer::ShutdownAwareTimer;
use crate::application::dto::watch_config::WatchConfig;
use crate::application::use_cases::test_connection::TestConnectionUseCase;
use crate::application::use_cases::upload_file::UploadFileUseCase;
use crate::application::use_cases::watch_directory::{PollTimer, WatchDirectoryUseCase};
use crate::domain::entities::watch_state::WatchState;

use super::cli::Args;
use super::settings::{Mode, MonitorSettings, Settings};

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
/// 監視モードがシグナルで停止した場合
pub const EXIT_INTERRUPTED: u8 = 130;

/// Uploader Workflow
pub struct UploaderWorkflow {
    settings: Settings,
    upload_repository: Arc<HttpUploadRepository>,
}

impl UploaderWorkflow {
    /// Create a new workflow instance with dependency injection
    ///
    /// # Errors
    ///
    /// URLが不正な場合、またはHTTPクライアントを作成できない場合にエラーを返す
    pub fn new(settings: Settings) -> Result<Self> {
        let endpoint = EndpointConfig::new(&settings.url, settings.key.clone())?;
        let upload_repository = Arc::new(HttpUploadRepository::new(endpoint)?);

        Ok(Self {
            settings,
            upload_repository,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Execute the selected mode and return the process exit code
    pub async fn execute(&self) -> Result<u8> {
        match &self.settings.mode {
            Mode::TestConnection => Ok(self.test_connection().await),
            Mode::SingleFile(path) => Ok(self.upload_single(path).await),
            Mode::Monitor(monitor) => {
                // シグナルハンドラは監視モードでのみ登録する
                let timer = ShutdownAwareTimer::new()
                    .context("Failed to install shutdown signal handlers")?;
                self.monitor(monitor, &timer).await
            }
            Mode::Help => {
                Args::command().print_help()?;
                println!();
                Ok(EXIT_SUCCESS)
            }
        }
    }

    /// 監視モードの待機処理を差し替えて実行する（他のモードは `execute` と同じ）
    pub async fn execute_with_timer<T: PollTimer + ?Sized>(&self, timer: &T) -> Result<u8> {
        match &self.settings.mode {
            Mode::Monitor(monitor) => self.monitor(monitor, timer).await,
            _ => self.execute().await,
        }
    }

    fn upload_use_case(&self) -> UploadFileUseCase<HttpUploadRepository> {
        UploadFileUseCase::new(self.upload_repository.clone())
            .with_default_metadata(self.settings.metadata.clone())
    }

    async fn test_connection(&self) -> u8 {
        let use_case = TestConnectionUseCase::new(self.upload_repository.clone());

        if use_case.execute().await {
            println!("✓ Connection to the API established successfully!");
            EXIT_SUCCESS
        } else {
            println!("✗ Failed to connect to the API.");
            EXIT_FAILURE
        }
    }

    async fn upload_single(&self, path: &Path) -> u8 {
        match self.upload_use_case().execute(path, None).await {
            Ok(receipt) => {
                println!("✓ Uploaded {}", path.display());
                if let Some(url) = receipt.file_url() {
                    println!("  File URL: {}", url);
                }
                EXIT_SUCCESS
            }
            Err(e) => {
                eprintln!("✗ Upload failed: {}", e);
                EXIT_FAILURE
            }
        }
    }

    async fn monitor<T: PollTimer + ?Sized>(
        &self,
        monitor: &MonitorSettings,
        timer: &T,
    ) -> Result<u8> {
        if let Some(move_to) = &monitor.move_to {
            if !move_to.exists() {
                if let Err(e) = tokio::fs::create_dir_all(move_to).await {
                    eprintln!("✗ Could not create directory {}: {}", move_to.display(), e);
                    return Ok(EXIT_FAILURE);
                }
                info!("Created archive directory {}", move_to.display());
            }
        }

        let config = match WatchConfig::new(
            &monitor.directory,
            monitor.interval_secs,
            monitor.extensions.clone(),
            monitor.move_to.clone(),
        ) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("✗ Invalid monitor settings: {}", e);
                return Ok(EXIT_FAILURE);
            }
        };

        let mut watcher = WatchDirectoryUseCase::new(
            Arc::new(self.upload_use_case()),
            Arc::new(LocalFileRepository::new()),
            config,
            WatchState::new(),
        );

        watcher.run(timer).await;

        info!(
            "Stopped monitoring {}, {} files uploaded during this run",
            watcher.config().directory.display(),
            watcher.state().len()
        );

        Ok(EXIT_INTERRUPTED)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::upload_metadata::UploadMetadata;

    fn settings(url: &str, mode: Mode) -> Settings {
        Settings {
            url: url.to_string(),
            key: "key".to_string(),
            verbose: false,
            metadata: UploadMetadata::new(),
            mode,
        }
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = UploaderWorkflow::new(settings("not a url", Mode::TestConnection));
        assert!(result.is_err());
    }

    #[test]
    fn test_new_accepts_valid_url() {
        let workflow =
            UploaderWorkflow::new(settings("https://example.com/upload", Mode::Help)).unwrap();
        assert_eq!(workflow.settings().mode, Mode::Help);
    }

    #[tokio::test]
    async fn test_single_file_missing_returns_failure() {
        let workflow = UploaderWorkflow::new(settings(
            "http://127.0.0.1:9/upload",
            Mode::SingleFile("/nonexistent/photo.jpg".into()),
        ))
        .unwrap();

        assert_eq!(workflow.execute().await.unwrap(), EXIT_FAILURE);
    }
}
