//! サイトデータの検証
//!
//! デプロイ前にJSONデータ一式を機械チェックする:
//! - projects.json: ID重複・リンク形式・画像参照
//! - skills.json: 必須フィールド
//! - achievements.json: ID重複・日付形式（YYYY-MM）
//! - site.json: お問い合わせ設定
//!
//! 欠落データはサイト側ではプレースホルダ表示で吸収されるため、
//! 画像ゼロ等は警告にとどめる（--strictでエラー昇格）。

use crate::error::{PortfolioError, Result};
use chrono::NaiveDate;
use lazy_static::lazy_static;
use portfolio_common::{Achievement, Catalog, Profile, SiteConfig, Skill};
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use walkdir::WalkDir;

pub const PROJECTS_FILE: &str = "projects.json";
pub const SKILLS_FILE: &str = "skills.json";
pub const ACHIEVEMENTS_FILE: &str = "achievements.json";
pub const PROFILE_FILE: &str = "profile.json";
pub const SITE_FILE: &str = "site.json";

lazy_static! {
    static ref HTTPS_URL: Regex = Regex::new(r"^https://[^\s]+$").unwrap();
}

/// 検証結果
#[derive(Debug, Default)]
pub struct ValidationReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationReport {
    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn warn(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    /// strictでは警告もエラー扱い
    pub fn is_ok(&self, strict: bool) -> bool {
        self.errors.is_empty() && (!strict || self.warnings.is_empty())
    }

    pub fn failure_count(&self, strict: bool) -> usize {
        self.errors.len() + if strict { self.warnings.len() } else { 0 }
    }
}

fn read_file(dir: &Path, name: &str) -> Result<String> {
    let path = dir.join(name);
    if !path.exists() {
        return Err(PortfolioError::FileNotFound(path.display().to_string()));
    }
    Ok(std::fs::read_to_string(&path)?)
}

/// データディレクトリ一式を検証する
pub fn validate_data_dir(
    data_dir: &Path,
    images_dir: Option<&Path>,
    report: &mut ValidationReport,
) -> Result<Catalog> {
    if !data_dir.is_dir() {
        return Err(PortfolioError::DataDirNotFound(
            data_dir.display().to_string(),
        ));
    }

    let catalog = Catalog::from_json(&read_file(data_dir, PROJECTS_FILE)?)?;
    validate_catalog(&catalog, images_dir, report);

    let skills: Vec<Skill> = serde_json::from_str(&read_file(data_dir, SKILLS_FILE)?)?;
    validate_skills(&skills, report);

    let achievements: Vec<Achievement> =
        serde_json::from_str(&read_file(data_dir, ACHIEVEMENTS_FILE)?)?;
    validate_achievements(&achievements, report);

    let profile: Profile = serde_json::from_str(&read_file(data_dir, PROFILE_FILE)?)?;
    validate_profile(&profile, report);

    let site: SiteConfig = serde_json::from_str(&read_file(data_dir, SITE_FILE)?)?;
    if !site.contact.is_configured() {
        report.warn("site.json: お問い合わせ設定が未完成（フォームは無効表示になる）");
    }

    Ok(catalog)
}

/// カタログの検証
pub fn validate_catalog(
    catalog: &Catalog,
    images_dir: Option<&Path>,
    report: &mut ValidationReport,
) {
    if let Err(err) = catalog.validate() {
        report.error(format!("{}: {}", PROJECTS_FILE, err));
    }
    if catalog.is_empty() {
        report.warn(format!("{}: プロジェクトが0件", PROJECTS_FILE));
    }

    let mut referenced = HashSet::new();
    for project in catalog.projects() {
        let label = format!("project #{}", project.id);

        if project.title.trim().is_empty() {
            report.error(format!("{}: タイトルが空", label));
        }
        if project.category.trim().is_empty() {
            report.error(format!("{}: カテゴリが空", label));
        }
        if !HTTPS_URL.is_match(&project.link) {
            report.error(format!("{}: linkがhttps URLでない: {:?}", label, project.link));
        }
        if let Some(demo) = &project.live_demo {
            if !HTTPS_URL.is_match(demo) {
                report.error(format!("{}: liveDemoがhttps URLでない: {:?}", label, demo));
            }
        }
        if project.images.is_empty() {
            report.warn(format!("{}: 画像なし（プレースホルダ表示になる）", label));
        }

        for image in &project.images {
            referenced.insert(image.clone());
            if let Some(base) = images_dir {
                if !base.join(image).exists() {
                    report.error(format!("{}: 画像が存在しない: {}", label, image));
                }
            }
        }
    }

    // 参照されていない画像ファイルは警告（消し忘れの検出）
    if let Some(base) = images_dir {
        for entry in WalkDir::new(base).into_iter().filter_map(|e| e.ok()) {
            if !entry.file_type().is_file() {
                continue;
            }
            let Ok(relative) = entry.path().strip_prefix(base) else {
                continue;
            };
            let relative = relative.to_string_lossy().replace('\\', "/");
            if !referenced.contains(relative.as_str()) {
                report.warn(format!("未参照の画像: {}", relative));
            }
        }
    }
}

fn validate_skills(skills: &[Skill], report: &mut ValidationReport) {
    if skills.is_empty() {
        report.warn(format!("{}: スキルが0件", SKILLS_FILE));
    }
    for (i, skill) in skills.iter().enumerate() {
        if skill.name.trim().is_empty() {
            report.error(format!("{}: [{}] nameが空", SKILLS_FILE, i));
        }
        if skill.group.trim().is_empty() {
            report.error(format!("{}: {:?} groupが空", SKILLS_FILE, skill.name));
        }
    }
}

fn validate_achievements(achievements: &[Achievement], report: &mut ValidationReport) {
    let mut seen = HashSet::new();
    for achievement in achievements {
        if !seen.insert(achievement.id) {
            report.error(format!(
                "{}: ID重複: {}",
                ACHIEVEMENTS_FILE, achievement.id
            ));
        }
        if parse_year_month(&achievement.date).is_none() {
            report.error(format!(
                "{}: #{} 日付がYYYY-MM形式でない: {:?}",
                ACHIEVEMENTS_FILE, achievement.id, achievement.date
            ));
        }
    }
}

fn validate_profile(profile: &Profile, report: &mut ValidationReport) {
    if profile.name.trim().is_empty() {
        report.error(format!("{}: nameが空", PROFILE_FILE));
    }
    for social in &profile.socials {
        if !HTTPS_URL.is_match(&social.url) {
            report.error(format!(
                "{}: {:?} のURLがhttps URLでない: {:?}",
                PROFILE_FILE, social.label, social.url
            ));
        }
    }
}

/// "YYYY-MM" を日付として解釈する
pub fn parse_year_month(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d").ok()
}
