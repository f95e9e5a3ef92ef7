//! # Upload Result
//!
//! 1回のアップロード試行の結果

use serde_json::{Map, Value};
use std::path::PathBuf;
use thiserror::Error;

/// アップロード成功時のレスポンス
#[derive(Debug, Clone, PartialEq)]
pub struct UploadReceipt {
    body: Map<String, Value>,
}

impl UploadReceipt {
    pub fn new(body: Map<String, Value>) -> Self {
        Self { body }
    }

    /// レスポンスボディ（JSONオブジェクト）
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// アップロードされたファイルのURL（サーバーが返した場合のみ）
    pub fn file_url(&self) -> Option<&str> {
        self.body.get("file_url").and_then(Value::as_str)
    }
}

/// アップロード失敗の理由
#[derive(Debug, Error)]
pub enum UploadError {
    /// ローカルファイルが存在しない（通常ファイルではない場合も含む）
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// ローカルファイルは存在するが読み取れない
    #[error("failed to read {}: {message}", .path.display())]
    FileRead { path: PathBuf, message: String },

    /// 200/201以外のHTTPステータス
    #[error("server responded with status {status}: {body}")]
    Http { status: u16, body: String },

    /// ネットワークエラー、タイムアウト、不正なレスポンス
    #[error("transport error: {0}")]
    Transport(String),
}

/// アップロード結果
pub type UploadResult = Result<UploadReceipt, UploadError>;
