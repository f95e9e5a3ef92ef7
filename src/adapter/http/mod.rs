//! HTTP Adapter Modules
//!
//! アップロード先エンドポイントとの通信

pub mod client;
pub mod endpoint;
pub mod models;
