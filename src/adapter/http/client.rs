//! HTTP Upload Client
//!
//! UploadRepositoryのreqwest実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use std::error::Error as StdError;
use std::path::Path;
use std::time::Duration;

use super::endpoint::EndpointConfig;
use super::models::{ProbeResponse, API_KEY_HEADER, FILE_FIELD};
use crate::domain::entities::upload_metadata::UploadMetadata;
use crate::domain::entities::upload_result::{UploadError, UploadReceipt, UploadResult};
use crate::domain::repositories::upload_repository::UploadRepository;

pub const PROBE_TIMEOUT: Duration = Duration::from_secs(10);
pub const UPLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Convert an error and all of its sources to a single line
pub fn error_chain_to_string(e: &(dyn StdError + 'static)) -> String {
    let mut messages = vec![e.to_string()];
    let mut source = e.source();
    while let Some(cause) = source {
        messages.push(cause.to_string());
        source = cause.source();
    }
    messages.join(" | ")
}

/// HTTPベースのアップロードリポジトリ
pub struct HttpUploadRepository {
    client: Client,
    endpoint: EndpointConfig,
}

impl HttpUploadRepository {
    /// 新しいリポジトリを作成
    ///
    /// # Errors
    ///
    /// HTTPクライアントの初期化に失敗した場合にエラーを返す
    pub fn new(endpoint: EndpointConfig) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self { client, endpoint })
    }

    /// multipartフォームを組み立てる
    ///
    /// ファイルはここで全て読み込むので、リクエスト送信前にハンドルは閉じられる
    async fn build_form(file_path: &Path, metadata: &UploadMetadata) -> Result<Form, UploadError> {
        let bytes = tokio::fs::read(file_path)
            .await
            .map_err(|e| UploadError::FileRead {
                path: file_path.to_path_buf(),
                message: e.to_string(),
            })?;

        let file_name = file_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let mut form = Form::new().part(FILE_FIELD, Part::bytes(bytes).file_name(file_name));
        for (key, value) in metadata.iter() {
            form = form.text(key.clone(), value.to_string());
        }

        Ok(form)
    }
}

#[async_trait]
impl UploadRepository for HttpUploadRepository {
    async fn probe(&self) -> bool {
        let url = self.endpoint.probe_url();
        debug!("Testing connection: GET {}", url);

        let response = match self
            .client
            .get(url)
            .header(API_KEY_HEADER, self.endpoint.api_key())
            .timeout(PROBE_TIMEOUT)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Error testing connection: {}", error_chain_to_string(&e));
                return false;
            }
        };

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            warn!("Connection error: {}", status.as_u16());
            warn!("{}", body);
            return false;
        }

        match response.json::<ProbeResponse>().await {
            Ok(probe) => {
                info!("Connection succeeded: {}", probe.message);
                info!("Server time: {}", probe.time);
                true
            }
            Err(e) => {
                warn!("Unexpected connection test response: {}", error_chain_to_string(&e));
                false
            }
        }
    }

    async fn upload(&self, file_path: &Path, metadata: &UploadMetadata) -> UploadResult {
        let form = Self::build_form(file_path, metadata).await?;

        debug!("Starting upload: POST {}", self.endpoint.upload_url());

        let response = self
            .client
            .post(self.endpoint.upload_url().clone())
            .header(API_KEY_HEADER, self.endpoint.api_key())
            .multipart(form)
            .timeout(UPLOAD_TIMEOUT)
            .send()
            .await
            .map_err(|e| UploadError::Transport(error_chain_to_string(&e)))?;

        let status = response.status();
        if status != StatusCode::OK && status != StatusCode::CREATED {
            let body = response.text().await.unwrap_or_default();
            return Err(UploadError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| UploadError::Transport(error_chain_to_string(&e)))?;

        match body {
            Value::Object(map) => Ok(UploadReceipt::new(map)),
            other => Err(UploadError::Transport(format!(
                "expected a JSON object in the upload response, got: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Layer {
        message: &'static str,
        source: Option<Box<Layer>>,
    }

    impl fmt::Display for Layer {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.message)
        }
    }

    impl StdError for Layer {
        fn source(&self) -> Option<&(dyn StdError + 'static)> {
            self.source.as_deref().map(|s| s as &(dyn StdError + 'static))
        }
    }

    #[test]
    fn test_error_chain_to_string() {
        let error = Layer {
            message: "error sending request",
            source: Some(Box::new(Layer {
                message: "connection refused",
                source: None,
            })),
        };

        assert_eq!(
            error_chain_to_string(&error),
            "error sending request | connection refused"
        );
    }

    #[tokio::test]
    async fn test_build_form_missing_file() {
        let result =
            HttpUploadRepository::build_form(Path::new("/nonexistent/photo.jpg"), &UploadMetadata::new())
                .await;
        assert!(matches!(result, Err(UploadError::FileRead { .. })));
    }
}
