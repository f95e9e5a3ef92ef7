//! # UploadMetadata Value Object
//!
//! アップロード時にファイルと一緒に送信するメタデータ

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 全てのアップロードに付与するデバイスタグ
pub const DEVICE_TAG: &str = "raspberry_pi";

pub const TIMESTAMP_FIELD: &str = "timestamp";
pub const DEVICE_FIELD: &str = "device";
pub const FILENAME_FIELD: &str = "filename";
pub const FILESIZE_FIELD: &str = "filesize";

/// メタデータの値（文字列または数値）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetadataValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for MetadataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MetadataValue::Integer(n) => write!(f, "{}", n),
            MetadataValue::Float(n) => write!(f, "{}", n),
            MetadataValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MetadataValue {
    fn from(value: &str) -> Self {
        MetadataValue::Text(value.to_string())
    }
}

impl From<String> for MetadataValue {
    fn from(value: String) -> Self {
        MetadataValue::Text(value)
    }
}

impl From<i64> for MetadataValue {
    fn from(value: i64) -> Self {
        MetadataValue::Integer(value)
    }
}

impl From<u64> for MetadataValue {
    fn from(value: u64) -> Self {
        i64::try_from(value)
            .map(MetadataValue::Integer)
            .unwrap_or(MetadataValue::Float(value as f64))
    }
}

/// アップロードメタデータ
///
/// キーの順序を固定するため `BTreeMap` で保持する。
/// multipartのテキストフィールドとしてそのまま送信される。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UploadMetadata {
    fields: BTreeMap<String, MetadataValue>,
}

impl UploadMetadata {
    /// 空のメタデータを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールドを設定（既存のキーは上書き）
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<MetadataValue>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.fields.get(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MetadataValue)> {
        self.fields.iter()
    }

    /// 別のメタデータをマージする
    ///
    /// 同じキーが存在する場合は `other` の値が優先される
    pub fn merged_with(mut self, other: &UploadMetadata) -> Self {
        for (key, value) in other.iter() {
            self.fields.insert(key.clone(), value.clone());
        }
        self
    }

    /// 自動付与フィールドを追加したメタデータを返す
    ///
    /// `timestamp`, `device`, `filename`, `filesize` は呼び出し元の値より優先される。
    ///
    /// # 例
    ///
    /// ```
    /// use chrono::{Local, TimeZone};
    /// use rpi_uploader::domain::entities::upload_metadata::{MetadataValue, UploadMetadata};
    ///
    /// let mut caller = UploadMetadata::new();
    /// caller.insert("filename", "spoofed.jpg");
    /// caller.insert("camera", "front-door");
    ///
    /// let captured_at = Local.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
    /// let metadata = caller.with_derived_fields("photo.jpg", 2048, captured_at);
    ///
    /// assert_eq!(metadata.get("filename"), Some(&MetadataValue::from("photo.jpg")));
    /// assert_eq!(metadata.get("filesize"), Some(&MetadataValue::Integer(2048)));
    /// assert_eq!(metadata.get("camera"), Some(&MetadataValue::from("front-door")));
    /// ```
    pub fn with_derived_fields(
        mut self,
        file_name: &str,
        file_size: u64,
        captured_at: DateTime<Local>,
    ) -> Self {
        self.insert(TIMESTAMP_FIELD, captured_at.to_rfc3339());
        self.insert(DEVICE_FIELD, DEVICE_TAG);
        self.insert(FILENAME_FIELD, file_name);
        self.insert(FILESIZE_FIELD, file_size);
        self
    }
}
