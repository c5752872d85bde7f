//! ヘッダーコンポーネント

use leptos::prelude::*;
use portfolio_common::Profile;

use crate::router::Route;

#[component]
pub fn Header(route: ReadSignal<Route>) -> impl IntoView {
    let profile = expect_context::<Profile>();

    view! {
        <header class="header">
            <a class="brand" href="#/">{profile.name.clone()}</a>
            <nav class="nav">
                {[Route::Home, Route::Projects]
                    .into_iter()
                    .map(|target| {
                        view! {
                            <a
                                href=target.to_hash()
                                class:active=move || route.get() == target
                            >
                                {target.label()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
