//! お問い合わせフォームコンポーネント
//!
//! 入力はローカル検証してから送信する。送信先が未設定のビルドでは
//! フォームを無効表示にする（エラー画面にはしない）。

use leptos::prelude::*;
use portfolio_common::{ContactMessage, SiteConfig};
use wasm_bindgen_futures::spawn_local;

use crate::api;

/// 送信ステータス
#[derive(Clone, PartialEq)]
enum SubmitStatus {
    Idle,
    Sending,
    Sent,
    Failed(String),
}

impl SubmitStatus {
    fn message(&self) -> String {
        match self {
            SubmitStatus::Idle => String::new(),
            SubmitStatus::Sending => "送信中...".to_string(),
            SubmitStatus::Sent => "送信しました。ありがとうございます！".to_string(),
            SubmitStatus::Failed(reason) => reason.clone(),
        }
    }
}

#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let contact_config = StoredValue::new(config.contact.clone());
    let is_configured = config.contact.is_configured();

    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let form_message = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        if let Err(reason) = form_message.validate() {
            set_status.set(SubmitStatus::Failed(reason));
            return;
        }

        set_status.set(SubmitStatus::Sending);
        let config = contact_config.get_value();
        spawn_local(async move {
            match api::contact::send_message(&config, &form_message).await {
                Ok(()) => {
                    set_status.set(SubmitStatus::Sent);
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                }
                Err(_) => {
                    set_status.set(SubmitStatus::Failed(
                        "送信に失敗しました。時間をおいて再度お試しください".to_string(),
                    ));
                }
            }
        });
    };

    view! {
        <section class="contact">
            <h2>"Contact"</h2>
            <Show
                when=move || is_configured
                fallback=|| {
                    view! { <p class="empty-state">"お問い合わせは現在準備中です"</p> }
                }
            >
                <form class="contact-form" on:submit=on_submit>
                    <div class="form-group">
                        <label for="contact-name">"お名前"</label>
                        <input
                            type="text"
                            id="contact-name"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="contact-email">"メールアドレス"</label>
                        <input
                            type="email"
                            id="contact-email"
                            prop:value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                        />
                    </div>

                    <div class="form-group">
                        <label for="contact-message">"メッセージ"</label>
                        <textarea
                            id="contact-message"
                            rows="6"
                            prop:value=move || message.get()
                            on:input=move |ev| set_message.set(event_target_value(&ev))
                        ></textarea>
                    </div>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || status.get() == SubmitStatus::Sending
                    >
                        "送信"
                    </button>

                    <p class="form-status">{move || status.get().message()}</p>
                </form>
            </Show>
        </section>
    }
}
