//! HTTP Wire Models
//!
//! エンドポイントとやり取りするJSONの型

use serde::Deserialize;

/// APIキーを送るヘッダー
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// multipartのファイルフィールド名
pub const FILE_FIELD: &str = "file";

/// 接続テストのレスポンス
///
/// `time` はサーバーによって文字列または数値で返るため型を固定しない
#[derive(Debug, Clone, Deserialize)]
pub struct ProbeResponse {
    pub message: String,
    pub time: serde_json::Value,
}
