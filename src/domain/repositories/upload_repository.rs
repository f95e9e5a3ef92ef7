//! # Upload Repository Trait
//!
//! アップロード先エンドポイントとの通信を抽象化

use async_trait::async_trait;
use std::path::Path;

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::upload_metadata::UploadMetadata;
use crate::domain::entities::upload_result::UploadResult;

/// アップロードリポジトリ
///
/// 接続テストとファイルのアップロードを担当する。
/// どちらのメソッドもエラーをpanicやErrで外に漏らさず、結果として返す。
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UploadRepository: Send + Sync {
    /// 接続テスト
    ///
    /// # Returns
    ///
    /// サーバーが200を返し、レスポンスが期待した形式の場合のみ `true`
    async fn probe(&self) -> bool;

    /// ファイルを1回だけアップロードする
    ///
    /// # Arguments
    ///
    /// * `file_path` - アップロードするファイル
    /// * `metadata` - テキストフィールドとして送信するメタデータ
    ///
    /// # Returns
    ///
    /// 200/201の場合は `Ok(UploadReceipt)`、それ以外は `Err(UploadError)`
    async fn upload(&self, file_path: &Path, metadata: &UploadMetadata) -> UploadResult;
}
