//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadFileUseCase**: 1ファイルのアップロード
//! - **TestConnectionUseCase**: エンドポイントへの接続テスト
//! - **WatchDirectoryUseCase**: ディレクトリ監視と自動アップロード

pub mod test_connection;
pub mod upload_file;
pub mod watch_directory;
