//! ブラウザ上でのルーティング確認
//!
//! hash書き換えとRoute解釈の整合をヘッドレスブラウザで検証する。

#![cfg(target_arch = "wasm32")]

use portfolio_wasm::router::{self, Route};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn test_navigate_updates_hash() {
    router::navigate(Route::Projects);
    let hash = web_sys::window()
        .expect("no window")
        .location()
        .hash()
        .expect("hash取得失敗");
    assert_eq!(hash, "#/projects");
    assert_eq!(Route::from_hash(&hash), Route::Projects);

    router::navigate(Route::Home);
}
