//! Projectsページ
//!
//! カタログ → カテゴリフィルタ → ギャラリーグリッド → モーダルビューア。
//! 状態の変更はGalleryState/ViewerStateの操作だけを通す。

use leptos::prelude::*;
use portfolio_common::{Catalog, GalleryState, Project};

use crate::components::{project_gallery::ProjectGallery, project_modal::ProjectModal};
use crate::router::{self, Route};

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let categories = catalog.list_categories();
    let catalog = StoredValue::new(catalog);

    let (gallery, set_gallery) = signal(GalleryState::new());

    // フィルタ結果と空状態メッセージは派生値
    let filtered = Memo::new(move |_| {
        catalog.with_value(|c| gallery.get().filtered_projects(c))
    });
    let empty_message = Memo::new(move |_| {
        catalog.with_value(|c| gallery.get().empty_message(c))
    });

    let on_select_category = move |category: String| {
        set_gallery.update(|g| g.select_category(&category));
    };
    let on_select_project = move |project: Project| {
        set_gallery.update(|g| g.select_project(project));
    };
    let on_close = move |_| set_gallery.update(|g| g.viewer_mut().close());
    let on_next = move |_| set_gallery.update(|g| g.viewer_mut().next());
    let on_previous = move |_| set_gallery.update(|g| g.viewer_mut().previous());
    let on_jump = move |index: usize| {
        set_gallery.update(|g| {
            // 範囲外はビューア側で拒否される（状態は変わらない）
            let _ = g.viewer_mut().jump_to(index);
        });
    };

    view! {
        <section class="projects-page">
            <div class="page-head">
                <h2>"Projects"</h2>
                <button class="btn btn-secondary" on:click=move |_| router::navigate(Route::Home)>
                    "← ホームへ戻る"
                </button>
            </div>

            <ProjectGallery
                categories=categories
                gallery=gallery
                projects=filtered
                empty_message=empty_message
                on_select_category=on_select_category
                on_select_project=on_select_project
            />

            <ProjectModal
                gallery=gallery
                on_close=on_close
                on_next=on_next
                on_previous=on_previous
                on_jump=on_jump
            />
        </section>
    }
}
