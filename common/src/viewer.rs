//! 画像ビューア（モーダル）の状態機械
//!
//! 状態は Closed / Open(project, index) の2つ。indexは循環インデックスで、
//! 末尾の次は先頭に戻る。画像が無いプロジェクトはプレースホルダを表示し、
//! どの操作でもパニックしない。

use crate::error::{Error, Result};
use crate::types::Project;

/// 画像が無い場合の代替画像パス
pub const PLACEHOLDER_IMAGE: &str = "assets/images/placeholder.svg";

/// ビューア状態
///
/// `selected`がSomeのときだけ開いている。`current_index`は
/// 画像がある限り常に `0..images.len()` の範囲に収まる。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewerState {
    selected: Option<Project>,
    current_index: usize,
}

impl ViewerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    pub fn selected_project(&self) -> Option<&Project> {
        self.selected.as_ref()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 開いているプロジェクトの画像枚数
    pub fn image_count(&self) -> usize {
        self.selected.as_ref().map_or(0, |p| p.images.len())
    }

    /// プロジェクトを開く（先頭画像から）
    pub fn open(&mut self, project: Project) {
        self.selected = Some(project);
        self.current_index = 0;
    }

    /// 閉じる。既に閉じていれば何もしない
    pub fn close(&mut self) {
        self.selected = None;
        self.current_index = 0;
    }

    /// 次の画像へ（循環）。画像が0枚/1枚なら何もしない
    pub fn next(&mut self) {
        let n = self.image_count();
        if n > 1 {
            self.current_index = (self.current_index + 1) % n;
        }
    }

    /// 前の画像へ（循環）。画像が0枚/1枚なら何もしない
    pub fn previous(&mut self) {
        let n = self.image_count();
        if n > 1 {
            self.current_index = (self.current_index + n - 1) % n;
        }
    }

    /// 指定インデックスへジャンプ
    ///
    /// 範囲外は`InvalidIndex`で拒否し、状態は変更しない。
    pub fn jump_to(&mut self, index: usize) -> Result<()> {
        let len = self.image_count();
        if index >= len {
            return Err(Error::InvalidIndex { index, len });
        }
        self.current_index = index;
        Ok(())
    }

    /// 現在の画像パス
    ///
    /// 画像が無い場合もnull相当を返さず、プレースホルダを返す。
    pub fn current_image(&self) -> &str {
        self.selected
            .as_ref()
            .and_then(|p| p.images.get(self.current_index))
            .map_or(PLACEHOLDER_IMAGE, |s| s.as_str())
    }
}
