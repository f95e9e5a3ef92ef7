//! Configuration File
//!
//! JSON設定ファイルの読み込み（全てのキーは省略可能）

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::entities::upload_metadata::UploadMetadata;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    /// アップロードURL
    pub url: Option<String>,
    /// APIキー
    pub key: Option<String>,
    #[serde(default)]
    pub verbose: bool,
    /// 監視対象の拡張子（例: `[".jpg", ".png"]`）
    pub extensions: Option<Vec<String>>,
    pub monitor_directory: Option<String>,
    /// 監視間隔（秒）
    pub check_interval: Option<u64>,
    /// アップロード後の移動先
    pub move_to: Option<String>,
    /// 全てのアップロードに付与する追加メタデータ
    #[serde(default)]
    pub metadata: UploadMetadata,
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// ファイルが存在する場合のみ読み込む
    ///
    /// # Returns
    ///
    /// ファイルが存在しない場合は `None`
    pub fn load_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        Self::load(path).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::upload_metadata::MetadataValue;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        let json = r#"{
            "url": "https://example.com/wp-json/raspberry/v1/upload",
            "key": "secret",
            "verbose": true,
            "extensions": [".jpg", ".png"],
            "monitor_directory": "/home/pi/camera",
            "check_interval": 60,
            "move_to": "/home/pi/uploaded",
            "metadata": {"site": "greenhouse", "zone": 4}
        }"#;
        file.write_all(json.as_bytes()).unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(
            config.url.as_deref(),
            Some("https://example.com/wp-json/raspberry/v1/upload")
        );
        assert_eq!(config.key.as_deref(), Some("secret"));
        assert!(config.verbose);
        assert_eq!(
            config.extensions,
            Some(vec![".jpg".to_string(), ".png".to_string()])
        );
        assert_eq!(config.monitor_directory.as_deref(), Some("/home/pi/camera"));
        assert_eq!(config.check_interval, Some(60));
        assert_eq!(config.move_to.as_deref(), Some("/home/pi/uploaded"));
        assert_eq!(config.metadata.get("zone"), Some(&MetadataValue::Integer(4)));
    }

    #[test]
    fn test_load_empty_object() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{}").unwrap();

        let config = Config::load(file.path()).unwrap();

        assert!(config.url.is_none());
        assert!(!config.verbose);
        assert!(config.extensions.is_none());
        assert!(config.metadata.is_empty());
    }

    #[test]
    fn test_load_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();

        assert!(Config::load(file.path()).is_err());
    }

    #[test]
    fn test_load_if_exists_missing() {
        let result = Config::load_if_exists(Path::new("/nonexistent/path/config.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_if_exists_present() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(br#"{"key": "abc"}"#).unwrap();

        let config = Config::load_if_exists(file.path())
            .unwrap()
            .unwrap();
        assert_eq!(config.key.as_deref(), Some("abc"));
    }
}
