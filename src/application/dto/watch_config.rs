//! # Watch Configuration DTO
//!
//! ディレクトリ監視設定のData Transfer Object

use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::domain::services::extension_filter::ExtensionFilter;

/// 監視間隔のデフォルト（秒）
pub const DEFAULT_CHECK_INTERVAL_SECS: u64 = 30;

/// 監視間隔の最小値（秒）
pub const MIN_CHECK_INTERVAL_SECS: u64 = 1;

#[derive(Debug, Error)]
pub enum WatchConfigError {
    #[error("monitor directory must not be empty")]
    EmptyDirectory,

    #[error("check interval must be at least 1 second, got {0}")]
    IntervalTooShort(u64),

    #[error("failed to resolve monitor directory {}: {source}", .path.display())]
    Resolve {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// 監視設定
///
/// 起動時に一度だけ作成され、以後変更されない
#[derive(Debug, Clone)]
pub struct WatchConfig {
    /// 監視ディレクトリ（絶対パス）
    pub directory: PathBuf,
    /// ポーリング間隔
    pub interval: Duration,
    /// 拡張子フィルタ（`None` の場合は全ファイルが対象）
    pub extensions: Option<ExtensionFilter>,
    /// アップロード成功後の移動先ディレクトリ
    pub archive_dir: Option<PathBuf>,
}

impl WatchConfig {
    /// 新しい監視設定を作成します。
    ///
    /// 監視ディレクトリは絶対パスに変換される（存在している必要はない）。
    ///
    /// # 例
    ///
    /// ```
    /// use rpi_uploader::application::dto::watch_config::WatchConfig;
    /// use rpi_uploader::domain::services::extension_filter::ExtensionFilter;
    ///
    /// let config = WatchConfig::new(
    ///     "/home/pi/camera",
    ///     30,
    ///     ExtensionFilter::new([".jpg"]),
    ///     Some("/home/pi/uploaded".into()),
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(config.interval.as_secs(), 30);
    /// assert!(config.directory.is_absolute());
    ///
    /// // 1秒未満の間隔はエラー
    /// assert!(WatchConfig::new("/home/pi/camera", 0, None, None).is_err());
    /// ```
    pub fn new(
        directory: impl AsRef<Path>,
        interval_secs: u64,
        extensions: Option<ExtensionFilter>,
        archive_dir: Option<PathBuf>,
    ) -> Result<Self, WatchConfigError> {
        let directory = directory.as_ref();
        if directory.as_os_str().is_empty() {
            return Err(WatchConfigError::EmptyDirectory);
        }

        if interval_secs < MIN_CHECK_INTERVAL_SECS {
            return Err(WatchConfigError::IntervalTooShort(interval_secs));
        }

        let directory =
            std::path::absolute(directory).map_err(|source| WatchConfigError::Resolve {
                path: directory.to_path_buf(),
                source,
            })?;

        Ok(Self {
            directory,
            interval: Duration::from_secs(interval_secs),
            extensions,
            archive_dir,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_watch_config_new() {
        let config = WatchConfig::new(
            "/data/incoming",
            5,
            ExtensionFilter::new([".jpg"]),
            Some(PathBuf::from("/data/done")),
        )
        .unwrap();

        assert_eq!(config.directory, PathBuf::from("/data/incoming"));
        assert_eq!(config.interval, Duration::from_secs(5));
        assert!(config.extensions.is_some());
        assert_eq!(config.archive_dir, Some(PathBuf::from("/data/done")));
    }

    #[test]
    fn test_relative_directory_made_absolute() {
        let config = WatchConfig::new("incoming", 1, None, None).unwrap();

        assert!(config.directory.is_absolute());
        assert!(config.directory.ends_with("incoming"));
    }

    #[test]
    fn test_interval_too_short() {
        let result = WatchConfig::new("/data/incoming", 0, None, None);
        assert!(matches!(result, Err(WatchConfigError::IntervalTooShort(0))));
    }

    #[test]
    fn test_empty_directory() {
        let result = WatchConfig::new("", 30, None, None);
        assert!(matches!(result, Err(WatchConfigError::EmptyDirectory)));
    }
}
