//! 実績タイムラインコンポーネント

use leptos::prelude::*;
use portfolio_common::Achievement;

#[component]
pub fn Achievements(achievements: Vec<Achievement>) -> impl IntoView {
    let has_items = !achievements.is_empty();

    view! {
        <section class="achievements">
            <h2>"Achievements"</h2>
            <Show
                when=move || has_items
                fallback=|| view! { <p class="empty-state">"実績は準備中です"</p> }
            >
                <ol class="timeline">
                    <For
                        each={
                            let achievements = achievements.clone();
                            move || achievements.clone()
                        }
                        key=|achievement| achievement.id
                        children=move |achievement| {
                            view! {
                                <li class="timeline-item">
                                    <span class="timeline-date">{achievement.date.clone()}</span>
                                    <span class=format!("icon icon-{}", achievement.icon)></span>
                                    <div class="timeline-body">
                                        <h3>{achievement.title.clone()}</h3>
                                        <p>{achievement.description.clone()}</p>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ol>
            </Show>
        </section>
    }
}
