//! ハッシュベースの2ページルーティング
//!
//! `#/` → Home、`#/projects` → Projects。URLのhashを唯一の情報源とし、
//! hashchangeイベントでRouteシグナルを更新する。

use gloo::events::EventListener;
use leptos::prelude::*;

/// ページ種別
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Home,
    Projects,
}

impl Route {
    /// location.hash からの解釈
    ///
    /// 未知のhashはHome扱い（リンク切れでもエラーページにしない）。
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim().trim_start_matches('#');
        match path.trim_matches('/') {
            "projects" => Route::Projects,
            _ => Route::Home,
        }
    }

    pub fn to_hash(self) -> &'static str {
        match self {
            Route::Home => "#/",
            Route::Projects => "#/projects",
        }
    }

    /// ナビゲーションに出すラベル
    pub fn label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Projects => "Projects",
        }
    }
}

fn current_route() -> Route {
    let hash = web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default();
    Route::from_hash(&hash)
}

/// 現在ルートのシグナルを作り、hashchangeに追従させる
pub fn use_route() -> ReadSignal<Route> {
    let (route, set_route) = signal(current_route());

    if let Some(window) = web_sys::window() {
        let listener = EventListener::new(&window, "hashchange", move |_| {
            set_route.set(current_route());
        });
        // ページ生存期間のリスナなので解放しない
        listener.forget();
    }

    route
}

/// ルートへ遷移する（hash書き換え → hashchange経由でシグナル更新）
pub fn navigate(route: Route) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_hash(route.to_hash());
    }
}
