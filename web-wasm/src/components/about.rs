//! 自己紹介コンポーネント

use leptos::prelude::*;
use portfolio_common::Profile;

#[component]
pub fn About() -> impl IntoView {
    let profile = expect_context::<Profile>();

    view! {
        <section class="about">
            <h2>"About"</h2>
            <p>{profile.about.clone()}</p>
            <ul class="about-meta">
                <li>{"拠点: "}{profile.location.clone()}</li>
                <li>
                    "連絡先: "
                    <a href=format!("mailto:{}", profile.email)>{profile.email.clone()}</a>
                </li>
            </ul>
        </section>
    }
}
