//! # Upload File Use Case
//!
//! 1ファイルのアップロードユースケース

use chrono::Local;
use log::{debug, info, warn};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use crate::domain::entities::upload_metadata::UploadMetadata;
use crate::domain::entities::upload_result::{UploadError, UploadResult};
use crate::domain::repositories::upload_repository::UploadRepository;

/// ファイルアップロードユースケース
///
/// ファイルの存在を確認し、メタデータを組み立ててから1回だけアップロードする。
/// リトライは行わない（再試行するかどうかは呼び出し元が決める）。
pub struct UploadFileUseCase<U: UploadRepository> {
    upload_repository: Arc<U>,
    default_metadata: UploadMetadata,
}

impl<U: UploadRepository> UploadFileUseCase<U> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `upload_repository` - アップロードリポジトリ
    pub fn new(upload_repository: Arc<U>) -> Self {
        Self {
            upload_repository,
            default_metadata: UploadMetadata::new(),
        }
    }

    /// 全てのアップロードに付与するメタデータを設定
    pub fn with_default_metadata(mut self, metadata: UploadMetadata) -> Self {
        self.default_metadata = metadata;
        self
    }

    /// ファイルをアップロード
    ///
    /// # Arguments
    ///
    /// * `file_path` - アップロードするファイル
    /// * `metadata` - この呼び出しだけに付与するメタデータ
    ///
    /// # Returns
    ///
    /// アップロード結果。ファイルが存在しない場合は通信せずに `UploadError::NotFound`
    pub async fn execute(
        &self,
        file_path: &Path,
        metadata: Option<&UploadMetadata>,
    ) -> UploadResult {
        let file_metadata = match tokio::fs::metadata(file_path).await {
            Ok(m) if m.is_file() => m,
            Ok(_) => {
                warn!("Not a regular file: {}", file_path.display());
                return Err(UploadError::NotFound(file_path.to_path_buf()));
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!("File does not exist: {}", file_path.display());
                return Err(UploadError::NotFound(file_path.to_path_buf()));
            }
            Err(e) => {
                return Err(UploadError::FileRead {
                    path: file_path.to_path_buf(),
                    message: e.to_string(),
                });
            }
        };

        let file_size = file_metadata.len();
        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut upload_metadata = self.default_metadata.clone();
        if let Some(extra) = metadata {
            upload_metadata = upload_metadata.merged_with(extra);
        }
        let upload_metadata =
            upload_metadata.with_derived_fields(&file_name, file_size, Local::now());

        info!("Uploading file: {} ({} bytes)", file_name, file_size);

        let started = Instant::now();
        let result = self
            .upload_repository
            .upload(file_path, &upload_metadata)
            .await;
        let elapsed = started.elapsed().as_secs_f64();

        match &result {
            Ok(receipt) => {
                info!("Upload succeeded in {:.2} seconds", elapsed);
                info!("File URL: {}", receipt.file_url().unwrap_or("<none>"));
                debug!("Server response: {:?}", receipt.body());
            }
            Err(e) => {
                warn!("Upload of {} failed after {:.2} seconds: {}", file_name, elapsed, e);
            }
        }

        result
    }
}
