//! ヒーローコンポーネント

use leptos::prelude::*;
use portfolio_common::Profile;

use crate::router::{self, Route};

#[component]
pub fn Hero() -> impl IntoView {
    let profile = expect_context::<Profile>();

    view! {
        <section class="hero">
            <p class="hero-role">{profile.role.clone()}</p>
            <h1>{profile.name.clone()}</h1>
            <p class="hero-tagline">{profile.tagline.clone()}</p>
            <button
                class="btn btn-primary"
                on:click=move |_| router::navigate(Route::Projects)
            >
                "プロジェクトを見る"
            </button>
        </section>
    }
}
