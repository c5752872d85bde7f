use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(about = "ポートフォリオサイトのデータ検証・集計ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// サイトデータ一式を検証
    Validate {
        /// データディレクトリ（projects.json等を含む）
        #[arg(required = true)]
        data_dir: PathBuf,

        /// 画像参照の実在チェックを行う基準ディレクトリ
        #[arg(short, long)]
        images_dir: Option<PathBuf>,

        /// 警告もエラー扱いにする
        #[arg(long)]
        strict: bool,
    },

    /// カテゴリ別のプロジェクト数を表示
    Categories {
        /// プロジェクトカタログJSON
        #[arg(required = true)]
        projects: PathBuf,
    },

    /// データ全体のサマリを表示
    Summary {
        /// データディレクトリ
        #[arg(required = true)]
        data_dir: PathBuf,
    },
}
