//! Adapter Layer
//!
//! 外部システム（HTTPエンドポイント, ファイルシステム, シグナル）との統合

pub mod config;
pub mod http;
pub mod repositories;
pub mod timer;
