//! ギャラリー状態（カテゴリ選択 + ビューア）
//!
//! フィルタ状態とビューア状態を束ねるページ単位の状態。変更は
//! ここを経由する操作のみ（レンダリング層は読み取りとイベント送出だけ）。

use crate::catalog::{Catalog, ALL_CATEGORY};
use crate::types::Project;
use crate::viewer::ViewerState;

/// フィルタ結果が空のときに表示する文言
pub const EMPTY_FILTER_MESSAGE: &str = "このカテゴリのプロジェクトはまだありません";

/// カタログ自体が空のときに表示する文言
pub const EMPTY_CATALOG_MESSAGE: &str = "プロジェクトは準備中です";

/// ギャラリーページの状態
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    selected_category: String,
    viewer: ViewerState,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            selected_category: ALL_CATEGORY.to_string(),
            viewer: ViewerState::new(),
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn viewer(&self) -> &ViewerState {
        &self.viewer
    }

    pub fn viewer_mut(&mut self) -> &mut ViewerState {
        &mut self.viewer
    }

    /// カテゴリを切り替える
    ///
    /// ビューアが開いたままのカテゴリ変更は未定義動作なので、
    /// 先に暗黙的に閉じる。
    pub fn select_category(&mut self, category: &str) {
        self.viewer.close();
        self.selected_category = category.to_string();
    }

    /// カードの選択：ビューアを先頭画像で開く
    pub fn select_project(&mut self, project: Project) {
        self.viewer.open(project);
    }

    /// 現在のフィルタ結果
    pub fn filtered_projects(&self, catalog: &Catalog) -> Vec<Project> {
        catalog.apply_filter(&self.selected_category)
    }

    /// 空状態の表示文言（空でなければNone）
    pub fn empty_message(&self, catalog: &Catalog) -> Option<&'static str> {
        if catalog.is_empty() {
            Some(EMPTY_CATALOG_MESSAGE)
        } else if self.filtered_projects(catalog).is_empty() {
            Some(EMPTY_FILTER_MESSAGE)
        } else {
            None
        }
    }
}
