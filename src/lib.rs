//! ポートフォリオサイトのデータ検証・集計ツール

pub mod cli;
pub mod error;
pub mod summary;
pub mod validator;
