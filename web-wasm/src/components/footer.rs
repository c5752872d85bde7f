//! フッターコンポーネント

use leptos::prelude::*;
use portfolio_common::Profile;

#[component]
pub fn Footer() -> impl IntoView {
    let profile = expect_context::<Profile>();
    let name = profile.name.clone();

    view! {
        <footer class="footer">
            <ul class="social-links">
                {profile
                    .socials
                    .iter()
                    .map(|social| {
                        view! {
                            <li>
                                <a
                                    href=social.url.clone()
                                    target="_blank"
                                    rel="noopener noreferrer"
                                >
                                    <span class=format!("icon icon-{}", social.icon)></span>
                                    {social.label.clone()}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <p class="copyright">{format!("© 2025 {}", name)}</p>
        </footer>
    }
}
