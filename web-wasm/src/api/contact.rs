//! お問い合わせ送信（トランザクショナルメールAPI連携）
//!
//! 送信先・各種IDは起動時に注入されたContactConfigを使う。
//! プロバイダ固有の仕様には依存せず、汎用のJSON POSTにとどめる。

use portfolio_common::{ContactConfig, ContactMessage};
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// メール送信リクエスト
#[derive(Serialize)]
struct EmailSendRequest {
    service_id: String,
    template_id: String,
    user_id: String,
    template_params: TemplateParams,
}

#[derive(Serialize)]
struct TemplateParams {
    from_name: String,
    reply_to: String,
    message: String,
}

/// お問い合わせ内容を送信する
pub async fn send_message(
    config: &ContactConfig,
    message: &ContactMessage,
) -> Result<(), JsValue> {
    let request_body = EmailSendRequest {
        service_id: config.service_id.clone(),
        template_id: config.template_id.clone(),
        user_id: config.public_key.clone(),
        template_params: TemplateParams {
            from_name: message.name.clone(),
            reply_to: message.email.clone(),
            message: message.message.clone(),
        },
    };
    let body = serde_json::to_string(&request_body)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = Request::new_with_str_and_init(&config.endpoint, &opts)?;
    request.headers().set("Content-Type", "application/json")?;

    let window = web_sys::window().unwrap();
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!("API error: {}", resp.status())));
    }

    Ok(())
}
