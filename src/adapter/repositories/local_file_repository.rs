//! Local File Repository Implementation
//!
//! FileRepositoryのローカルファイルシステム実装

use async_trait::async_trait;
use log::{debug, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::repositories::file_repository::FileRepository;

/// ローカルファイルシステムベースのファイルリポジトリ
pub struct LocalFileRepository;

impl LocalFileRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// ディレクトリ直下の通常ファイルを一覧する（内部実装）
    fn list_files_internal(directory: &Path) -> io::Result<Vec<PathBuf>> {
        let mut files = Vec::new();

        for entry in WalkDir::new(directory).min_depth(1).max_depth(1) {
            let entry = match entry {
                Ok(entry) => entry,
                // ルートを読めない場合はポーリング全体のエラー
                Err(e) if e.path().map_or(true, |p| p == directory) => {
                    return Err(e.into_io_error().unwrap_or_else(|| {
                        io::Error::other(format!("failed to read {}", directory.display()))
                    }));
                }
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", directory.display(), e);
                    continue;
                }
            };

            // シンボリックリンクはリンク先で判定する
            let path = entry.path();
            if path.is_file() {
                files.push(path.to_path_buf());
            }
        }

        debug!("Found {} files in {}", files.len(), directory.display());

        Ok(files)
    }

    /// ファイルを移動する（内部実装）
    fn relocate_internal(source: &Path, destination_dir: &Path) -> io::Result<PathBuf> {
        let file_name = source.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", source.display()),
            )
        })?;

        let destination = destination_dir.join(file_name);
        fs::rename(source, &destination)?;

        Ok(destination)
    }
}

#[async_trait]
impl FileRepository for LocalFileRepository {
    async fn list_files(&self, directory: &Path) -> io::Result<Vec<PathBuf>> {
        let directory = directory.to_path_buf();
        tokio::task::spawn_blocking(move || Self::list_files_internal(&directory))
            .await
            .map_err(|e| io::Error::other(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn relocate(&self, source: &Path, destination_dir: &Path) -> io::Result<PathBuf> {
        let source = source.to_path_buf();
        let destination_dir = destination_dir.to_path_buf();
        tokio::task::spawn_blocking(move || Self::relocate_internal(&source, &destination_dir))
            .await
            .map_err(|e| io::Error::other(format!("Failed to spawn blocking task: {}", e)))?
    }

    async fn directory_exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path)
            .await
            .map(|m| m.is_dir())
            .unwrap_or(false)
    }
}

impl Default for LocalFileRepository {
    fn default() -> Self {
        Self::new()
    }
}
