//! データ集計
//!
//! `summary`/`categories`サブコマンドの表示用集計。

use crate::validator::parse_year_month;
use chrono::Datelike;
use portfolio_common::{Achievement, Catalog, Skill, ALL_CATEGORY};
use std::collections::BTreeMap;

/// カテゴリ別プロジェクト数（"All"を先頭に、初出順）
pub fn category_counts(catalog: &Catalog) -> Vec<(String, usize)> {
    catalog
        .list_categories()
        .into_iter()
        .map(|category| {
            let count = if category == ALL_CATEGORY {
                catalog.len()
            } else {
                catalog.apply_filter(&category).len()
            };
            (category, count)
        })
        .collect()
}

/// グループ別スキル数
pub fn skill_group_counts(skills: &[Skill]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for skill in skills {
        *counts.entry(skill.group.clone()).or_insert(0) += 1;
    }
    counts
}

/// 年別の実績数（日付不正は無視）
pub fn achievements_per_year(achievements: &[Achievement]) -> BTreeMap<i32, usize> {
    let mut counts = BTreeMap::new();
    for achievement in achievements {
        if let Some(date) = parse_year_month(&achievement.date) {
            *counts.entry(date.year()).or_insert(0) += 1;
        }
    }
    counts
}

/// カテゴリ集計を表形式で出力する
pub fn print_category_counts(catalog: &Catalog) {
    for (category, count) in category_counts(catalog) {
        println!("  {:<12} {}件", category, count);
    }
}

/// サマリを出力する
pub fn print_summary(catalog: &Catalog, skills: &[Skill], achievements: &[Achievement]) {
    println!("プロジェクト: {}件", catalog.len());
    print_category_counts(catalog);

    println!("\nスキル: {}件", skills.len());
    for (group, count) in skill_group_counts(skills) {
        println!("  {:<12} {}件", group, count);
    }

    println!("\n実績: {}件", achievements.len());
    for (year, count) in achievements_per_year(achievements) {
        println!("  {}年        {}件", year, count);
    }
}
