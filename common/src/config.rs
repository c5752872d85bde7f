//! サイト設定
//!
//! 送信先サービスの識別子は起動時に注入する。モジュールロード時に
//! SDKを初期化するグローバル状態は持たず、秘密情報もソースに埋め込まない
//! （`public_key`は公開可能なクライアントキーのみ、設定ファイルから供給）。

use crate::error::Result;
use serde::{Deserialize, Serialize};

/// お問い合わせ送信（トランザクショナルメールAPI）の設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactConfig {
    /// 送信先エンドポイントURL
    pub endpoint: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl ContactConfig {
    /// 送信に必要な値がそろっているか
    pub fn is_configured(&self) -> bool {
        !self.endpoint.is_empty()
            && !self.service_id.is_empty()
            && !self.template_id.is_empty()
            && !self.public_key.is_empty()
    }
}

/// サイト全体の設定
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SiteConfig {
    /// ブラウザタブ等に出すサイト名
    pub site_title: String,

    pub contact: ContactConfig,
}

impl SiteConfig {
    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// JSONファイルから読み込み（非WASM環境のみ）
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}
