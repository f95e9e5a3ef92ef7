//! # WatchState Entity
//!
//! このプロセスの実行中にアップロードが成功したファイルの集合

use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// 監視状態
///
/// アップロードに成功したパスだけが追加される。削除はされず、
/// プロセスの再起動でのみ空に戻る（永続化しない）。
#[derive(Debug, Clone, Default)]
pub struct WatchState {
    processed: HashSet<PathBuf>,
}

impl WatchState {
    /// 空の監視状態を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// パスが処理済みかどうかを確認
    pub fn is_processed(&self, path: &Path) -> bool {
        self.processed.contains(path)
    }

    /// パスを処理済みとして記録
    ///
    /// 新しく追加された場合に `true`
    pub fn mark_processed(&mut self, path: PathBuf) -> bool {
        self.processed.insert(path)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processed.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processed.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = WatchState::new();
        assert!(state.is_empty());
        assert_eq!(state.len(), 0);
    }

    #[test]
    fn test_mark_processed() {
        let mut state = WatchState::new();

        assert!(state.mark_processed(PathBuf::from("/watch/photo1.jpg")));
        assert!(state.is_processed(Path::new("/watch/photo1.jpg")));
        assert!(!state.is_processed(Path::new("/watch/photo2.jpg")));
    }

    #[test]
    fn test_mark_processed_twice() {
        let mut state = WatchState::new();

        assert!(state.mark_processed(PathBuf::from("/watch/photo1.jpg")));
        assert!(!state.mark_processed(PathBuf::from("/watch/photo1.jpg")));
        assert_eq!(state.len(), 1);
    }
}
