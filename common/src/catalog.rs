//! プロジェクトカタログとカテゴリフィルタ
//!
//! カタログは読み取り専用の順序付きリスト。フィルタは選択カテゴリに
//! 一致する部分列を元の順序のまま返す。

use crate::error::{Error, Result};
use crate::types::Project;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// 全カテゴリを表す擬似カテゴリ名
pub const ALL_CATEGORY: &str = "All";

/// プロジェクトカタログ
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    projects: Vec<Project>,
}

impl Catalog {
    pub fn new(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        Ok(catalog)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// IDの一意性を検証する
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(Error::DuplicateId(project.id));
            }
        }
        Ok(())
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// 選択可能なカテゴリ一覧
    ///
    /// 先頭は常に"All"、以降はカタログでの初出順に重複なく並ぶ。
    pub fn list_categories(&self) -> Vec<String> {
        let mut categories = vec![ALL_CATEGORY.to_string()];
        let mut seen = HashSet::new();
        for project in &self.projects {
            if seen.insert(project.category.as_str()) {
                categories.push(project.category.clone());
            }
        }
        categories
    }

    /// カテゴリで絞り込んだ部分列を返す
    ///
    /// "All"なら全件。一致なしは空のVec（エラーではない）。
    /// カタログ内の相対順序は保存される。
    pub fn apply_filter(&self, selected_category: &str) -> Vec<Project> {
        if selected_category == ALL_CATEGORY {
            return self.projects.clone();
        }
        self.projects
            .iter()
            .filter(|p| p.category == selected_category)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog::new(vec![
            Project {
                id: 1,
                title: "写真台帳Web".to_string(),
                category: "Web".to_string(),
                images: vec!["a.png".to_string(), "b.png".to_string()],
                ..Default::default()
            },
            Project {
                id: 2,
                title: "路面診断ML".to_string(),
                category: "ML".to_string(),
                images: vec![],
                ..Default::default()
            },
            Project {
                id: 3,
                title: "現場アプリ".to_string(),
                category: "Web".to_string(),
                images: vec!["c.png".to_string()],
                ..Default::default()
            },
        ])
    }

    #[test]
    fn test_from_json() {
        let json = r#"[{"id": 1, "title": "t", "category": "Web"}]"#;
        let catalog = Catalog::from_json(json).expect("パース失敗");
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.projects()[0].category, "Web");
    }

    #[test]
    fn test_from_json_invalid() {
        let result = Catalog::from_json("{ not json");
        assert!(matches!(result, Err(Error::Json(_))));
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(sample_catalog().validate().is_ok());
    }

    #[test]
    fn test_validate_duplicate_ids() {
        let catalog = Catalog::new(vec![
            Project { id: 1, ..Default::default() },
            Project { id: 1, ..Default::default() },
        ]);
        let err = catalog.validate().unwrap_err();
        assert!(matches!(err, Error::DuplicateId(1)));
    }

    #[test]
    fn test_list_categories_first_occurrence_order() {
        let categories = sample_catalog().list_categories();
        assert_eq!(categories, vec!["All", "Web", "ML"]);
    }

    #[test]
    fn test_list_categories_empty_catalog() {
        let categories = Catalog::default().list_categories();
        assert_eq!(categories, vec!["All"]);
    }

    #[test]
    fn test_apply_filter_all_returns_everything() {
        let catalog = sample_catalog();
        let filtered = catalog.apply_filter(ALL_CATEGORY);
        assert_eq!(filtered.len(), 3);
        // 順序も要素も一致する
        assert_eq!(filtered, catalog.projects());
    }

    #[test]
    fn test_apply_filter_by_category() {
        let filtered = sample_catalog().apply_filter("Web");
        assert_eq!(filtered.len(), 2);
        assert!(filtered.iter().all(|p| p.category == "Web"));
        // カタログ順が保存される
        assert_eq!(filtered[0].id, 1);
        assert_eq!(filtered[1].id, 3);
    }

    // シナリオA: MLで絞るとid=2のみ
    #[test]
    fn test_apply_filter_scenario_ml() {
        let filtered = sample_catalog().apply_filter("ML");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, 2);
    }

    // シナリオE: 存在しないカテゴリは空（クラッシュしない）
    #[test]
    fn test_apply_filter_nonexistent_category() {
        let filtered = sample_catalog().apply_filter("Nonexistent");
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_apply_filter_does_not_mutate_catalog() {
        let catalog = sample_catalog();
        let before = catalog.projects().to_vec();
        let _ = catalog.apply_filter("ML");
        assert_eq!(catalog.projects(), before.as_slice());
    }

    #[test]
    fn test_filter_soundness_for_all_listed_categories() {
        let catalog = sample_catalog();
        for category in catalog.list_categories() {
            for project in catalog.apply_filter(&category) {
                assert!(
                    category == ALL_CATEGORY || project.category == category,
                    "カテゴリ不一致: {} in {}",
                    project.id,
                    category
                );
            }
        }
    }
}
