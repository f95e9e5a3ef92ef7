//! Endpoint Configuration
//!
//! アップロード先URLとAPIキー

use anyhow::{bail, Context, Result};
use reqwest::Url;
use std::fmt;

/// アップロードURLの末尾セグメント
pub const UPLOAD_SEGMENT: &str = "upload";
/// 接続テストURLの末尾セグメント
pub const PROBE_SEGMENT: &str = "test";

/// エンドポイント設定（作成後は変更されない）
#[derive(Clone)]
pub struct EndpointConfig {
    upload_url: Url,
    api_key: String,
}

impl EndpointConfig {
    /// URLを検証してエンドポイント設定を作成
    ///
    /// # Errors
    ///
    /// URLが不正、またはhttp/https以外の場合にエラーを返す
    pub fn new(upload_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let upload_url =
            Url::parse(upload_url).with_context(|| format!("Invalid API URL: {}", upload_url))?;

        if !matches!(upload_url.scheme(), "http" | "https") {
            bail!("Unsupported URL scheme: {}", upload_url.scheme());
        }

        Ok(Self {
            upload_url,
            api_key: api_key.into(),
        })
    }

    pub fn upload_url(&self) -> &Url {
        &self.upload_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// 接続テスト用URL
    ///
    /// 末尾のパスセグメントが `upload` の場合は `test` に置き換える。
    /// それ以外の場合はアップロードURLをそのまま使う。
    ///
    /// # 例
    ///
    /// ```
    /// use rpi_uploader::adapter::http::endpoint::EndpointConfig;
    ///
    /// let endpoint = EndpointConfig::new(
    ///     "https://example.com/wp-json/raspberry/v1/upload",
    ///     "secret",
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(
    ///     endpoint.probe_url().as_str(),
    ///     "https://example.com/wp-json/raspberry/v1/test"
    /// );
    /// ```
    pub fn probe_url(&self) -> Url {
        let mut url = self.upload_url.clone();

        let mut segments: Vec<String> = match url.path_segments() {
            Some(segments) => segments.map(str::to_string).collect(),
            None => return url,
        };

        // 末尾スラッシュ（空セグメント）は保持したまま直前のセグメントを見る
        let trailing_slash = segments.last().is_some_and(|s| s.is_empty());
        let index = if trailing_slash {
            segments.len().checked_sub(2)
        } else {
            segments.len().checked_sub(1)
        };

        if let Some(index) = index {
            if segments[index] == UPLOAD_SEGMENT {
                segments[index] = PROBE_SEGMENT.to_string();
                url.set_path(&segments.join("/"));
            }
        }

        url
    }
}

// APIキーをログに出さない
impl fmt::Debug for EndpointConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EndpointConfig")
            .field("upload_url", &self.upload_url.as_str())
            .field("api_key", &"***")
            .finish()
    }
}
