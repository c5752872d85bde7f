//! ギャラリーの利用フロー結合テスト
//!
//! カタログ読み込み → フィルタ → カード選択 → 画像送り → クローズ
//! の一連の操作を、実際のUI操作順で検証する。

use portfolio_common::{Catalog, GalleryState, EMPTY_FILTER_MESSAGE, PLACEHOLDER_IMAGE};

const CATALOG_JSON: &str = r#"[
    {
        "id": 1,
        "title": "写真台帳Web",
        "category": "Web",
        "images": ["a.png", "b.png"],
        "link": "https://github.com/example/ledger"
    },
    {
        "id": 2,
        "title": "路面診断ML",
        "category": "ML",
        "images": [],
        "link": "https://github.com/example/road-ml"
    },
    {
        "id": 3,
        "title": "現場カメラアプリ",
        "category": "Web",
        "images": ["c.png"],
        "link": "https://github.com/example/site-cam"
    }
]"#;

#[test]
fn test_full_user_flow() {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("カタログ読み込み失敗");
    catalog.validate().expect("ID検証失敗");

    let mut gallery = GalleryState::new();

    // 初期表示: 全件
    assert_eq!(gallery.filtered_projects(&catalog).len(), 3);
    assert_eq!(catalog.list_categories(), vec!["All", "Web", "ML"]);

    // Webで絞り込み
    gallery.select_category("Web");
    let filtered = gallery.filtered_projects(&catalog);
    assert_eq!(filtered.len(), 2);

    // カードを選択してビューアを開く
    gallery.select_project(filtered[0].clone());
    assert!(gallery.viewer().is_open());
    assert_eq!(gallery.viewer().current_image(), "a.png");

    // 画像送り（2枚なので一巡する）
    gallery.viewer_mut().next();
    assert_eq!(gallery.viewer().current_image(), "b.png");
    gallery.viewer_mut().next();
    assert_eq!(gallery.viewer().current_image(), "a.png");

    // ドットでジャンプ
    gallery.viewer_mut().jump_to(1).expect("範囲内");
    assert_eq!(gallery.viewer().current_index(), 1);

    // 閉じてもフィルタは保持
    gallery.viewer_mut().close();
    assert!(!gallery.viewer().is_open());
    assert_eq!(gallery.selected_category(), "Web");
    assert_eq!(gallery.filtered_projects(&catalog).len(), 2);
}

#[test]
fn test_project_without_images_shows_placeholder() {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("カタログ読み込み失敗");
    let mut gallery = GalleryState::new();

    gallery.select_category("ML");
    let filtered = gallery.filtered_projects(&catalog);
    gallery.select_project(filtered[0].clone());

    assert_eq!(gallery.viewer().current_image(), PLACEHOLDER_IMAGE);
    // 操作してもインデックスは動かない
    gallery.viewer_mut().next();
    gallery.viewer_mut().previous();
    assert_eq!(gallery.viewer().current_index(), 0);
}

#[test]
fn test_category_switch_while_viewer_open() {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("カタログ読み込み失敗");
    let mut gallery = GalleryState::new();

    gallery.select_project(catalog.projects()[0].clone());
    gallery.viewer_mut().next();
    assert!(gallery.viewer().is_open());

    // 開いたままの切り替えは暗黙クローズになる
    gallery.select_category("ML");
    assert!(!gallery.viewer().is_open());
    assert_eq!(gallery.viewer().current_index(), 0);
}

#[test]
fn test_unknown_category_shows_empty_state() {
    let catalog = Catalog::from_json(CATALOG_JSON).expect("カタログ読み込み失敗");
    let mut gallery = GalleryState::new();

    gallery.select_category("Mobile");
    assert!(gallery.filtered_projects(&catalog).is_empty());
    assert_eq!(gallery.empty_message(&catalog), Some(EMPTY_FILTER_MESSAGE));
}
