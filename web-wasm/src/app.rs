//! メインアプリケーションコンポーネント
//!
//! 埋め込みデータを起動時に一度だけ読み込み、コンテキストで配る。
//! ページはハッシュルートで切り替える（Home / Projects の2ページ）。

use leptos::prelude::*;

use crate::components::{footer::Footer, header::Header};
use crate::data;
use crate::pages::{home::HomePage, projects::ProjectsPage};
use crate::router::{self, Route};

#[component]
pub fn App() -> impl IntoView {
    let route = router::use_route();

    // 読み取り専用データ。変更APIは持たない
    provide_context(data::load_catalog());
    provide_context(data::load_profile());
    provide_context(data::load_site_config());

    view! {
        <div class="site">
            <Header route=route />

            <main>
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Projects => view! { <ProjectsPage /> }.into_any(),
                }}
            </main>

            <Footer />
        </div>
    }
}
