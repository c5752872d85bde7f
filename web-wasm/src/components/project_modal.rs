//! プロジェクト詳細モーダル（画像ビューア）
//!
//! 画像送りは循環インデックス。画像が無いプロジェクトでは
//! プレースホルダを表示し、送りボタンとドットは出さない。

use leptos::prelude::*;
use portfolio_common::GalleryState;

#[component]
pub fn ProjectModal<FC, FN, FP, FJ>(
    gallery: ReadSignal<GalleryState>,
    on_close: FC,
    on_next: FN,
    on_previous: FP,
    on_jump: FJ,
) -> impl IntoView
where
    FC: Fn(()) + 'static + Clone + Send + Sync,
    FN: Fn(()) + 'static + Clone + Send + Sync,
    FP: Fn(()) + 'static + Clone + Send + Sync,
    FJ: Fn(usize) + 'static + Clone + Send + Sync,
{
    let on_next = StoredValue::new(on_next);
    let on_previous = StoredValue::new(on_previous);
    let on_jump = StoredValue::new(on_jump);
    let title = move || {
        gallery
            .get()
            .viewer()
            .selected_project()
            .map(|p| p.title.clone())
            .unwrap_or_default()
    };
    let description = move || {
        gallery
            .get()
            .viewer()
            .selected_project()
            .map(|p| p.description.clone())
            .unwrap_or_default()
    };
    let link = move || {
        gallery
            .get()
            .viewer()
            .selected_project()
            .map(|p| p.link.clone())
            .unwrap_or_default()
    };
    let live_demo = move || {
        gallery
            .get()
            .viewer()
            .selected_project()
            .and_then(|p| p.live_demo.clone())
    };
    let current_image = move || gallery.get().viewer().current_image().to_string();
    let image_count = move || gallery.get().viewer().image_count();
    let has_multiple_images = move || image_count() > 1;

    let on_close_backdrop = on_close.clone();
    let on_close_button = on_close.clone();

    view! {
        <Show when=move || gallery.get().viewer().is_open()>
            <div
                class="modal-backdrop"
                on:click={
                    let on_close_backdrop = on_close_backdrop.clone();
                    move |_| on_close_backdrop(())
                }
            >
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <button
                        class="modal-close"
                        on:click={
                            let on_close_button = on_close_button.clone();
                            move |_| on_close_button(())
                        }
                    >
                        "×"
                    </button>

                    <div class="modal-viewer">
                        <Show when=has_multiple_images>
                            <button
                                class="viewer-nav viewer-prev"
                                on:click=move |_| on_previous.with_value(|f| f(()))
                            >
                                "‹"
                            </button>
                        </Show>

                        <img src=current_image alt=title loading="lazy" />

                        <Show when=has_multiple_images>
                            <button
                                class="viewer-nav viewer-next"
                                on:click=move |_| on_next.with_value(|f| f(()))
                            >
                                "›"
                            </button>
                        </Show>
                    </div>

                    <Show when=has_multiple_images>
                        <div class="viewer-dots">
                            <For
                                each=move || 0..image_count()
                                key=|index| *index
                                children=move |index| {
                                    view! {
                                        <button
                                            class="dot"
                                            class:active=move || {
                                                gallery.get().viewer().current_index() == index
                                            }
                                            on:click=move |_| on_jump.with_value(|f| f(index))
                                        ></button>
                                    }
                                }
                            />
                        </div>
                    </Show>

                    <div class="modal-info">
                        <h3>{title}</h3>
                        <p>{description}</p>
                        <div class="modal-links">
                            <a href=link target="_blank" rel="noopener noreferrer">
                                "リポジトリ"
                            </a>
                            {move || {
                                live_demo()
                                    .map(|url| {
                                        view! {
                                            <a href=url target="_blank" rel="noopener noreferrer">
                                                "デモを見る"
                                            </a>
                                        }
                                    })
                            }}
                        </div>
                    </div>
                </div>
            </div>
        </Show>
    }
}
