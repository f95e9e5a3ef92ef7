//! # Test Connection Use Case
//!
//! エンドポイントへの接続テストユースケース

use std::sync::Arc;

use crate::domain::repositories::upload_repository::UploadRepository;

/// 接続テストユースケース
pub struct TestConnectionUseCase<U: UploadRepository> {
    upload_repository: Arc<U>,
}

impl<U: UploadRepository> TestConnectionUseCase<U> {
    pub fn new(upload_repository: Arc<U>) -> Self {
        Self { upload_repository }
    }

    /// 接続テストを実行
    ///
    /// # Returns
    ///
    /// エンドポイントが正常に応答した場合に `true`
    pub async fn execute(&self) -> bool {
        self.upload_repository.probe().await
    }
}
