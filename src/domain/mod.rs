//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - フレームワークに依存しない
//! - HTTPやファイルシステムについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（UploadMetadata, WatchStateなど）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（拡張子フィルタ）

pub mod entities;
pub mod repositories;
pub mod services;
