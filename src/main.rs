use clap::Parser;
use portfolio_rust::{cli, error, summary, validator};

use cli::{Cli, Commands};
use error::{PortfolioError, Result};
use portfolio_common::{Achievement, Catalog, Skill};
use validator::{ValidationReport, ACHIEVEMENTS_FILE, PROJECTS_FILE, SKILLS_FILE};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { data_dir, images_dir, strict } => {
            println!("🔍 portfolio - データ検証\n");

            println!("[1/2] データを読み込み中...");
            let mut report = ValidationReport::default();
            let catalog =
                validator::validate_data_dir(&data_dir, images_dir.as_deref(), &mut report)?;
            println!("✔ {}件のプロジェクトを読み込み\n", catalog.len());

            println!("[2/2] チェック結果");
            for warning in &report.warnings {
                println!("  ⚠ {}", warning);
            }
            for error in &report.errors {
                println!("  ✘ {}", error);
            }
            if report.warnings.is_empty() && report.errors.is_empty() {
                println!("  問題なし");
            }

            if cli.verbose {
                println!("\nカテゴリ内訳:");
                summary::print_category_counts(&catalog);
            }

            if !report.is_ok(strict) {
                return Err(PortfolioError::ValidationFailed(
                    report.failure_count(strict),
                ));
            }
            println!("\n✅ 検証OK");
        }

        Commands::Categories { projects } => {
            let catalog = Catalog::from_file(&projects)?;
            catalog.validate()?;
            summary::print_category_counts(&catalog);
        }

        Commands::Summary { data_dir } => {
            println!("📊 portfolio - サマリ\n");

            let catalog = Catalog::from_file(&data_dir.join(PROJECTS_FILE))?;
            let skills: Vec<Skill> =
                serde_json::from_str(&std::fs::read_to_string(data_dir.join(SKILLS_FILE))?)?;
            let achievements: Vec<Achievement> = serde_json::from_str(
                &std::fs::read_to_string(data_dir.join(ACHIEVEMENTS_FILE))?,
            )?;

            summary::print_summary(&catalog, &skills, &achievements);
        }
    }

    Ok(())
}
