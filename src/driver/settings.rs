//! Settings Resolution
//!
//! CLI引数と設定ファイルをマージして実行モードを決める（CLIが優先）

use std::path::PathBuf;
use thiserror::Error;

use crate::adapter::config::Config;
use crate::application::dto::watch_config::DEFAULT_CHECK_INTERVAL_SECS;
use crate::domain::entities::upload_metadata::UploadMetadata;
use crate::domain::services::extension_filter::ExtensionFilter;

use super::cli::Args;

#[derive(Debug, Error, PartialEq)]
pub enum SettingsError {
    #[error("API URL and API key are required")]
    MissingCredentials,
}

/// Expands a leading tilde and returns the path
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).as_ref())
}

/// 監視モードの設定
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorSettings {
    pub directory: PathBuf,
    pub interval_secs: u64,
    pub extensions: Option<ExtensionFilter>,
    pub move_to: Option<PathBuf>,
}

/// 実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// 接続テスト
    TestConnection,
    /// 1ファイルのアップロード
    SingleFile(PathBuf),
    /// ディレクトリ監視
    Monitor(MonitorSettings),
    /// モード指定なし（ヘルプを表示）
    Help,
}

/// 解決済みの実行設定
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub url: String,
    pub key: String,
    pub verbose: bool,
    pub metadata: UploadMetadata,
    pub mode: Mode,
}

impl Settings {
    /// verboseはURL/キーの検証前にロガーを初期化するため単独で解決する
    pub fn resolve_verbose(args: &Args, config: &Config) -> bool {
        args.verbose || config.verbose
    }

    /// CLI引数と設定ファイルから実行設定を作成
    ///
    /// モードの優先順位: `--test` > `--file` > 監視（`--monitor` または `monitor_directory`）
    ///
    /// # Errors
    ///
    /// URLまたはAPIキーがどちらにも指定されていない場合にエラーを返す
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, SettingsError> {
        let url = args.url.clone().or_else(|| config.url.clone());
        let key = args.key.clone().or_else(|| config.key.clone());
        let (url, key) = match (url, key) {
            (Some(url), Some(key)) if !url.is_empty() && !key.is_empty() => (url, key),
            _ => return Err(SettingsError::MissingCredentials),
        };

        let mut metadata = config.metadata.clone();
        for (name, value) in &args.metadata {
            metadata.insert(name.clone(), value.clone());
        }

        Ok(Self {
            url,
            key,
            verbose: Self::resolve_verbose(args, config),
            metadata,
            mode: Self::resolve_mode(args, config),
        })
    }

    fn resolve_mode(args: &Args, config: &Config) -> Mode {
        if args.test {
            return Mode::TestConnection;
        }

        if let Some(file) = &args.file {
            return Mode::SingleFile(expand_path(file));
        }

        let Some(directory) = args.monitor.as_ref().or(config.monitor_directory.as_ref()) else {
            return Mode::Help;
        };

        let extensions = match &args.extensions {
            Some(list) => ExtensionFilter::parse_list(list),
            None => config
                .extensions
                .as_ref()
                .and_then(|list| ExtensionFilter::new(list)),
        };

        Mode::Monitor(MonitorSettings {
            directory: expand_path(directory),
            interval_secs: args
                .interval
                .or(config.check_interval)
                .unwrap_or(DEFAULT_CHECK_INTERVAL_SECS),
            extensions,
            move_to: args
                .move_to
                .as_ref()
                .or(config.move_to.as_ref())
                .map(|p| expand_path(p)),
        })
    }
}
