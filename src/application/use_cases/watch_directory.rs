//! # Watch Directory Use Case
//!
//! ディレクトリ監視ユースケース
//!
//! 一定間隔でディレクトリを走査し、未処理のファイルを1つずつアップロードする。
//! アップロードに失敗したファイルは記録されないため、次回のポーリングで再試行される。

use async_trait::async_trait;
use log::{debug, error, info, warn};
use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

use crate::application::dto::watch_config::WatchConfig;
use crate::application::use_cases::upload_file::UploadFileUseCase;
use crate::domain::entities::watch_state::WatchState;
use crate::domain::repositories::file_repository::FileRepository;
use crate::domain::repositories::upload_repository::UploadRepository;

/// ポーリング間の待機
#[async_trait]
pub trait PollTimer: Send + Sync {
    /// `interval` だけ待機する
    ///
    /// # Returns
    ///
    /// 監視を続ける場合は `true`、停止要求を受けた場合は `false`
    async fn wait(&self, interval: Duration) -> bool;
}

/// 1回のポーリング中に発生したファイルシステムエラー
#[derive(Debug, Error)]
pub enum WatchError {
    #[error("failed to list directory {}: {source}", .directory.display())]
    Listing {
        directory: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to move {} to {}: {source}", .file.display(), .destination.display())]
    Relocation {
        file: PathBuf,
        destination: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// 1回のポーリング結果のサマリー
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PollReport {
    /// アップロードに成功したファイル
    pub uploaded: Vec<PathBuf>,
    /// アップロードに失敗したファイル（次回再試行）
    pub failed: Vec<PathBuf>,
    /// 移動後のパス
    pub relocated: Vec<PathBuf>,
    /// 拡張子フィルタで除外されたファイル数
    pub filtered_count: usize,
}

/// ディレクトリ監視ユースケース
///
/// 状態遷移: Idle → Scanning → (Uploading → Scanning)* → Idle → 待機
pub struct WatchDirectoryUseCase<U: UploadRepository, F: FileRepository> {
    upload_use_case: Arc<UploadFileUseCase<U>>,
    file_repository: Arc<F>,
    config: WatchConfig,
    state: WatchState,
}

impl<U: UploadRepository, F: FileRepository> WatchDirectoryUseCase<U, F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `upload_use_case` - ファイルアップロードユースケース
    /// * `file_repository` - ファイルリポジトリ
    /// * `config` - 監視設定
    /// * `state` - 監視状態（通常は `WatchState::new()`）
    pub fn new(
        upload_use_case: Arc<UploadFileUseCase<U>>,
        file_repository: Arc<F>,
        config: WatchConfig,
        state: WatchState,
    ) -> Self {
        Self {
            upload_use_case,
            file_repository,
            config,
            state,
        }
    }

    pub fn state(&self) -> &WatchState {
        &self.state
    }

    pub fn config(&self) -> &WatchConfig {
        &self.config
    }

    /// 停止要求を受けるまで監視を続ける
    ///
    /// ポーリング中のエラーはログに記録するだけで、ループは止めない。
    ///
    /// # Returns
    ///
    /// 実行したポーリング回数
    pub async fn run<T: PollTimer + ?Sized>(&mut self, timer: &T) -> usize {
        info!(
            "Monitoring directory {} for new files...",
            self.config.directory.display()
        );
        if let Some(filter) = &self.config.extensions {
            info!("Filtering by extensions: {}", filter.extensions().join(", "));
        }

        let mut polls = 0;
        loop {
            polls += 1;
            match self.poll_once().await {
                Ok(report) => debug!(
                    "Poll {} finished: {} uploaded, {} failed, {} filtered",
                    polls,
                    report.uploaded.len(),
                    report.failed.len(),
                    report.filtered_count
                ),
                Err(e) => error!("Error while monitoring directory: {}", e),
            }

            if !timer.wait(self.config.interval).await {
                info!("Stopping directory monitor after {} polls", polls);
                break;
            }
        }

        polls
    }

    /// ディレクトリを1回走査する
    ///
    /// # Errors
    ///
    /// ディレクトリの一覧取得、またはファイルの移動に失敗した場合にエラーを返す。
    /// 移動の失敗時点で、そのファイルは既に処理済みとして記録されている。
    pub async fn poll_once(&mut self) -> Result<PollReport, WatchError> {
        let files = self
            .file_repository
            .list_files(&self.config.directory)
            .await
            .map_err(|source| WatchError::Listing {
                directory: self.config.directory.clone(),
                source,
            })?;

        let mut report = PollReport::default();

        for path in files {
            if self.state.is_processed(&path) {
                continue;
            }

            let file_name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();

            if let Some(filter) = &self.config.extensions {
                if !filter.matches(&file_name) {
                    report.filtered_count += 1;
                    continue;
                }
            }

            info!("New file detected: {}", file_name);

            if self.upload_use_case.execute(&path, None).await.is_err() {
                report.failed.push(path);
                continue;
            }

            // 移動より先に記録する（移動に失敗しても再アップロードしない）
            self.state.mark_processed(path.clone());
            report.uploaded.push(path.clone());

            if let Some(archive_dir) = &self.config.archive_dir {
                if self.file_repository.directory_exists(archive_dir).await {
                    let destination = self
                        .file_repository
                        .relocate(&path, archive_dir)
                        .await
                        .map_err(|source| WatchError::Relocation {
                            file: path.clone(),
                            destination: archive_dir.clone(),
                            source,
                        })?;
                    info!("File moved to: {}", destination.display());
                    report.relocated.push(destination);
                } else {
                    warn!(
                        "Archive directory {} does not exist, leaving {} in place",
                        archive_dir.display(),
                        file_name
                    );
                }
            }
        }

        Ok(report)
    }
}
