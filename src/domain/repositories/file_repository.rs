//! # File Repository Trait
//!
//! 監視ディレクトリの一覧取得とアップロード後のファイル移動を抽象化

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};

/// ファイルリポジトリ
#[async_trait]
pub trait FileRepository: Send + Sync {
    /// ディレクトリ直下の通常ファイルを一覧する（サブディレクトリは含めない）
    ///
    /// # Arguments
    ///
    /// * `directory` - 監視ディレクトリ
    ///
    /// # Returns
    ///
    /// ディレクトリの列挙順に並んだファイルパス
    ///
    /// # Errors
    ///
    /// ディレクトリ自体を読み取れない場合にエラーを返す
    async fn list_files(&self, directory: &Path) -> io::Result<Vec<PathBuf>>;

    /// ファイルを同じファイル名のまま `destination_dir` に移動する
    ///
    /// # Returns
    ///
    /// 移動後のパス
    async fn relocate(&self, source: &Path, destination_dir: &Path) -> io::Result<PathBuf>;

    /// ディレクトリが存在するか
    async fn directory_exists(&self, path: &Path) -> bool;
}
