//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **UploadMetadata**: アップロード時に送信するメタデータ
//! - **UploadResult**: 1回のアップロード試行の結果
//! - **WatchState**: アップロード済みファイルの集合

pub mod upload_metadata;
pub mod upload_result;
pub mod watch_state;
