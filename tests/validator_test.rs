//! データ検証の結合テスト
//!
//! 実ファイル構成に近いtempディレクトリを組み立てて検証を通す

use portfolio_rust::error::PortfolioError;
use portfolio_rust::validator::{self, ValidationReport};
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn write_valid_data_dir(dir: &Path) {
    fs::write(
        dir.join("projects.json"),
        r#"[
            {
                "id": 1,
                "title": "写真台帳Web",
                "description": "工事写真の台帳を自動生成するWebアプリ",
                "category": "Web",
                "images": ["projects/ledger-1.png", "projects/ledger-2.png"],
                "link": "https://github.com/example/ledger",
                "liveDemo": "https://ledger.example.dev"
            },
            {
                "id": 2,
                "title": "路面診断ML",
                "description": "路面画像の損傷分類モデル",
                "category": "ML",
                "images": [],
                "link": "https://github.com/example/road-ml"
            }
        ]"#,
    )
    .unwrap();

    fs::write(
        dir.join("skills.json"),
        r#"[
            {"name": "Rust", "icon": "rust", "group": "Languages"},
            {"name": "Leptos", "icon": "leptos", "group": "Frameworks"}
        ]"#,
    )
    .unwrap();

    fs::write(
        dir.join("achievements.json"),
        r#"[
            {"id": 1, "title": "応用情報技術者", "description": "", "date": "2021-10", "icon": "cert"}
        ]"#,
    )
    .unwrap();

    fs::write(
        dir.join("profile.json"),
        r#"{
            "name": "森下 健太",
            "role": "ソフトウェアエンジニア",
            "socials": [{"label": "GitHub", "url": "https://github.com/example", "icon": "github"}]
        }"#,
    )
    .unwrap();

    fs::write(
        dir.join("site.json"),
        r#"{
            "siteTitle": "Kenta Morishita | Portfolio",
            "contact": {
                "endpoint": "https://api.emailjs.com/api/v1.0/email/send",
                "serviceId": "service_x",
                "templateId": "template_y",
                "publicKey": "pk_z"
            }
        }"#,
    )
    .unwrap();
}

/// 正常なデータ一式は警告（画像なしプロジェクト）のみで通る
#[test]
fn test_validate_valid_data_dir() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_valid_data_dir(dir.path());

    let mut report = ValidationReport::default();
    let catalog = validator::validate_data_dir(dir.path(), None, &mut report)
        .expect("検証の実行自体は成功するはず");

    assert_eq!(catalog.len(), 2);
    assert!(report.errors.is_empty(), "errors: {:?}", report.errors);
    // project #2 は画像なし → 警告1件
    assert_eq!(report.warnings.len(), 1);
    assert!(report.is_ok(false));
    assert!(!report.is_ok(true));
}

/// 存在しないディレクトリ
#[test]
fn test_validate_missing_data_dir() {
    let mut report = ValidationReport::default();
    let result = validator::validate_data_dir(
        Path::new("/nonexistent/path/12345"),
        None,
        &mut report,
    );
    assert!(matches!(result, Err(PortfolioError::DataDirNotFound(_))));
}

/// データファイルの欠落
#[test]
fn test_validate_missing_projects_file() {
    let dir = tempdir().expect("Failed to create temp dir");

    let mut report = ValidationReport::default();
    let result = validator::validate_data_dir(dir.path(), None, &mut report);
    assert!(matches!(result, Err(PortfolioError::FileNotFound(_))));
}

/// ID重複はエラーとして報告される
#[test]
fn test_validate_duplicate_project_ids() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_valid_data_dir(dir.path());
    fs::write(
        dir.path().join("projects.json"),
        r#"[
            {"id": 1, "title": "a", "category": "Web", "link": "https://example.com/a"},
            {"id": 1, "title": "b", "category": "Web", "link": "https://example.com/b"}
        ]"#,
    )
    .unwrap();

    let mut report = ValidationReport::default();
    validator::validate_data_dir(dir.path(), None, &mut report).expect("実行は成功");
    assert!(report
        .errors
        .iter()
        .any(|e| e.contains("Duplicate project id")));
}

/// 画像の実在チェック: 参照切れはエラー、未参照はワーニング
#[test]
fn test_validate_image_references() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_valid_data_dir(dir.path());

    let images = tempdir().expect("Failed to create temp dir");
    fs::create_dir_all(images.path().join("projects")).unwrap();
    // ledger-1.png だけ実在させ、ledger-2.png は欠落させる
    fs::write(images.path().join("projects/ledger-1.png"), b"png").unwrap();
    fs::write(images.path().join("projects/orphan.png"), b"png").unwrap();

    let mut report = ValidationReport::default();
    validator::validate_data_dir(dir.path(), Some(images.path()), &mut report)
        .expect("実行は成功");

    assert!(
        report
            .errors
            .iter()
            .any(|e| e.contains("ledger-2.png")),
        "参照切れがエラーになっていない: {:?}",
        report.errors
    );
    assert!(
        report
            .warnings
            .iter()
            .any(|w| w.contains("orphan.png")),
        "未参照画像が警告になっていない: {:?}",
        report.warnings
    );
}

/// 不正な日付形式
#[test]
fn test_validate_bad_achievement_date() {
    let dir = tempdir().expect("Failed to create temp dir");
    write_valid_data_dir(dir.path());
    fs::write(
        dir.path().join("achievements.json"),
        r#"[{"id": 1, "title": "t", "description": "", "date": "来年ごろ", "icon": ""}]"#,
    )
    .unwrap();

    let mut report = ValidationReport::default();
    validator::validate_data_dir(dir.path(), None, &mut report).expect("実行は成功");
    assert!(report.errors.iter().any(|e| e.contains("YYYY-MM")));
}
