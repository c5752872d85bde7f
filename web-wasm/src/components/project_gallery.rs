//! プロジェクトギャラリーコンポーネント
//!
//! カテゴリボタン + カードグリッド。空のフィルタ結果は
//! 明示的な空状態メッセージとして表示する（黙って空グリッドにしない）。

use leptos::prelude::*;
use portfolio_common::{GalleryState, Project, PLACEHOLDER_IMAGE};

#[component]
pub fn ProjectGallery<FC, FP>(
    categories: Vec<String>,
    gallery: ReadSignal<GalleryState>,
    projects: Memo<Vec<Project>>,
    empty_message: Memo<Option<&'static str>>,
    on_select_category: FC,
    on_select_project: FP,
) -> impl IntoView
where
    FC: Fn(String) + 'static + Clone + Send,
    FP: Fn(Project) + 'static + Clone + Send,
{
    view! {
        <div class="category-filter">
            {categories
                .into_iter()
                .map(|category| {
                    let on_select_category = on_select_category.clone();
                    let label = category.clone();
                    let is_active = {
                        let category = category.clone();
                        move || gallery.get().selected_category() == category
                    };
                    view! {
                        <button
                            class="btn btn-filter"
                            class:active=is_active
                            on:click=move |_| on_select_category(category.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>

        {move || {
            empty_message
                .get()
                .map(|message| view! { <p class="empty-state">{message}</p> })
        }}

        <div class="project-grid">
            <For
                each=move || projects.get()
                key=|project| project.id
                children=move |project| {
                    let on_select_project = on_select_project.clone();
                    view! { <ProjectCard project=project on_select=on_select_project /> }
                }
            />
        </div>
    }
}

#[component]
fn ProjectCard<FP>(project: Project, on_select: FP) -> impl IntoView
where
    FP: Fn(Project) + 'static + Clone + Send,
{
    let cover = project
        .images
        .first()
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());

    view! {
        <div
            class="project-card"
            on:click={
                let project = project.clone();
                move |_| on_select(project.clone())
            }
        >
            <img src=cover alt=project.title.clone() loading="lazy" />
            <div class="project-info">
                <span class="category-badge">{project.category.clone()}</span>
                <h3>{project.title.clone()}</h3>
                <p>{project.description.clone()}</p>
            </div>
        </div>
    }
}
