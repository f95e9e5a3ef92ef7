//! # Extension Filter Service
//!
//! ファイル名の拡張子によるフィルタリング

/// 拡張子フィルタ
///
/// ファイル名（小文字化）が許可された拡張子（小文字化）のいずれかで終わる場合に一致する。
/// `.jpg` と `jpg` のどちらの形式でも指定できる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    extensions: Vec<String>,
}

impl ExtensionFilter {
    /// フィルタを作成
    ///
    /// 空白を除去し、空の要素は無視する。有効な拡張子が1つもない場合は `None`
    /// （フィルタなし）を返す。
    ///
    /// # 例
    ///
    /// ```
    /// use rpi_uploader::domain::services::extension_filter::ExtensionFilter;
    ///
    /// let filter = ExtensionFilter::new([".jpg", " .PNG "]).unwrap();
    /// assert!(filter.matches("holiday.JPG"));
    /// assert!(filter.matches("scan.png"));
    /// assert!(!filter.matches("notes.txt"));
    ///
    /// assert!(ExtensionFilter::new(["", "  "]).is_none());
    /// ```
    pub fn new<I, S>(extensions: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions: Vec<String> = extensions
            .into_iter()
            .map(|ext| ext.as_ref().trim().to_lowercase())
            .filter(|ext| !ext.is_empty())
            .collect();

        if extensions.is_empty() {
            None
        } else {
            Some(Self { extensions })
        }
    }

    /// カンマ区切りの文字列から作成（例: `".jpg,.png"`）
    pub fn parse_list(list: &str) -> Option<Self> {
        Self::new(list.split(','))
    }

    /// ファイル名が許可された拡張子に一致するか
    pub fn matches(&self, file_name: &str) -> bool {
        let file_name = file_name.to_lowercase();
        self.extensions.iter().any(|ext| file_name.ends_with(ext))
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }
}
