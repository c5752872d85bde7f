//! サイトデータの型定義
//!
//! CLIとWeb(WASM)で共有される型:
//! - Project: プロジェクト実績（ギャラリー表示用）
//! - Skill / Achievement: Homeページの一覧データ
//! - Profile / SocialLink: サイトメタ情報
//! - ContactMessage: お問い合わせフォームの送信内容

use serde::{Deserialize, Serialize};

/// プロジェクト実績
///
/// カタログはデプロイ時に固定される読み取り専用データ。
/// `images`の順序は意味を持つ（先頭がカバー画像）。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,

    /// 分類タグ（カテゴリフィルタで使用）
    pub category: String,

    /// 画像パス一覧（空も許容）
    pub images: Vec<String>,

    /// リポジトリ等の主リンク
    pub link: String,

    /// デモサイト（任意）
    pub live_demo: Option<String>,
}

/// スキル項目
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    pub name: String,
    pub icon: String,

    /// 表示グループ（"Languages" / "Frameworks" など）
    pub group: String,
}

/// 経歴・実績（タイムライン表示用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    pub id: u32,
    pub title: String,
    pub description: String,

    /// "YYYY-MM" 形式
    pub date: String,

    pub icon: String,
}

/// SNS等の外部リンク
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
    pub icon: String,
}

/// プロフィール（ヒーロー・アバウト表示用）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub about: String,
    pub email: String,
    pub location: String,

    #[serde(default)]
    pub socials: Vec<SocialLink>,
}

/// お問い合わせフォームの入力内容
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// 送信前のローカル検証
    ///
    /// 空欄とメールアドレスの形式だけを見る。配信可否は送信先サービスの責務。
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("お名前を入力してください".to_string());
        }
        if self.email.trim().is_empty() {
            return Err("メールアドレスを入力してください".to_string());
        }
        let email = self.email.trim();
        let valid = email
            .split_once('@')
            .map(|(local, domain)| !local.is_empty() && domain.contains('.'))
            .unwrap_or(false);
        if !valid {
            return Err("メールアドレスの形式が正しくありません".to_string());
        }
        if self.message.trim().is_empty() {
            return Err("メッセージを入力してください".to_string());
        }
        Ok(())
    }
}
