//! # rpi-uploader
//!
//! Raspberry Pi 上のファイルを HTTP エンドポイントへマルチパートでアップロードするツール
//!
//! 単一ファイルのアップロード、ディレクトリ監視による自動アップロード、
//! 接続テストの3つのモードを持つ。
//!
//! クリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: メタデータ、アップロード結果、監視状態などのエンティティ（外部依存なし）
//! - **Application層**: アップロード・接続テスト・監視のユースケース
//! - **Adapter層**: 外部システムとの統合（HTTP, ファイルシステム, 設定ファイル, シグナル）
//! - **Driver層**: CLI、設定の解決、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時にシグナル待ちなどのコードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
