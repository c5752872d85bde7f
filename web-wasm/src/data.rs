//! 埋め込みデータセットの読み込み
//!
//! サイトのデータはビルド時に`include_str!`で埋め込み、起動時に一度だけ
//! パースする。壊れたJSONはビルド成果物の不具合なので、コンソールに
//! 警告を出して空データで縮退表示する（クラッシュさせない）。

use portfolio_common::{Achievement, Catalog, Profile, SiteConfig, Skill};
use web_sys::console;

const PROJECTS_JSON: &str = include_str!("../assets/data/projects.json");
const SKILLS_JSON: &str = include_str!("../assets/data/skills.json");
const ACHIEVEMENTS_JSON: &str = include_str!("../assets/data/achievements.json");
const PROFILE_JSON: &str = include_str!("../assets/data/profile.json");
const SITE_JSON: &str = include_str!("../assets/data/site.json");

fn warn_parse_failure(name: &str, err: &dyn std::fmt::Display) {
    console::warn_1(&format!("{}の読み込みに失敗: {}", name, err).into());
}

pub fn load_catalog() -> Catalog {
    match Catalog::from_json(PROJECTS_JSON) {
        Ok(catalog) => catalog,
        Err(err) => {
            warn_parse_failure("projects.json", &err);
            Catalog::default()
        }
    }
}

pub fn load_skills() -> Vec<Skill> {
    match serde_json::from_str(SKILLS_JSON) {
        Ok(skills) => skills,
        Err(err) => {
            warn_parse_failure("skills.json", &err);
            Vec::new()
        }
    }
}

pub fn load_achievements() -> Vec<Achievement> {
    match serde_json::from_str(ACHIEVEMENTS_JSON) {
        Ok(achievements) => achievements,
        Err(err) => {
            warn_parse_failure("achievements.json", &err);
            Vec::new()
        }
    }
}

pub fn load_profile() -> Profile {
    match serde_json::from_str(PROFILE_JSON) {
        Ok(profile) => profile,
        Err(err) => {
            warn_parse_failure("profile.json", &err);
            Profile::default()
        }
    }
}

pub fn load_site_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_JSON) {
        Ok(config) => config,
        Err(err) => {
            warn_parse_failure("site.json", &err);
            SiteConfig::default()
        }
    }
}
