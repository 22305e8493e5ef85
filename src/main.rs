use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use sankeygen::pipeline::statement::StatementPipeline;
use sankeygen::pipeline::translate::{TableKind, TranslatePipeline};
use sankeygen::pipeline::workbook::WorkbookPipeline;
use sankeygen::pipeline::{Pipeline, RunPipeline};
use sankeygen::sankey::sheets::SheetNames;
use sankeygen::sankey::summary::JurisdictionProfile;

#[derive(Parser)]
#[command(
    name = "sankeygen",
    version,
    about = "Convert government budget outlines and spreadsheet exports into Sankey diagram JSON"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert an outline plus per-sheet CSV tables into tree and summary JSON
    Workbook(WorkbookArgs),
    /// Convert a single REGRP statement CSV into a flat tree JSON
    Statement {
        /// Statement CSV with REGRP_Summary, REGRP_Name and Amount columns
        #[arg(long)]
        input: PathBuf,
        #[arg(long, default_value = "sankey.json")]
        output: PathBuf,
    },
    /// Translate French column values of a CSV export to English
    Translate {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        output: PathBuf,
        /// Export layout, decides which dictionary applies to which column
        #[arg(long, value_enum)]
        kind: TableKind,
    },
}

#[derive(Args)]
struct WorkbookArgs {
    /// Outline text file with tier-1/2/3 budget lines
    #[arg(long)]
    outline: PathBuf,
    /// Directory holding one CSV file per sheet
    #[arg(long)]
    sheets_dir: PathBuf,
    #[arg(long, default_value = "sankey.json")]
    tree_out: PathBuf,
    #[arg(long, default_value = "summary.json")]
    summary_out: PathBuf,

    // Jurisdiction profile; defaults describe the Toronto 2024 actuals.
    #[arg(long, default_value = "Toronto")]
    name: String,
    #[arg(long, default_value = "2024")]
    financial_year: String,
    #[arg(
        long,
        default_value = "https://www.toronto.ca/city-government/budget-finances/city-finance/annual-financial-report/"
    )]
    source_url: String,
    #[arg(long, default_value_t = 2_930_000)]
    population: u64,
    #[arg(long, default_value_t = 44_000)]
    total_employees: u64,
    #[arg(long, default_value = "Property taxes & taxation from other governments")]
    property_tax_label: String,

    /// Column carrying the reported amounts, in millions
    #[arg(long, default_value = "2024 ($M)")]
    amount_column: String,
    #[arg(long, default_value = "Income Tier 2")]
    income_sheet: String,
    #[arg(long, default_value = "Expense Tier 2")]
    expense_tier2_sheet: String,
    #[arg(long, default_value = "Expense Tier 3")]
    expense_tier3_sheet: String,
}

impl From<WorkbookArgs> for WorkbookPipeline {
    fn from(args: WorkbookArgs) -> WorkbookPipeline {
        WorkbookPipeline {
            outline_path: args.outline,
            sheets_dir: args.sheets_dir,
            sheet_names: SheetNames {
                income: args.income_sheet,
                expense_tier2: args.expense_tier2_sheet,
                expense_tier3: args.expense_tier3_sheet,
            },
            amount_column: args.amount_column,
            profile: JurisdictionProfile::new(
                args.name,
                args.financial_year,
                args.source_url,
                args.population,
                args.total_employees,
                args.property_tax_label,
            ),
            tree_out: args.tree_out,
            summary_out: args.summary_out,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let pipeline: Pipeline = match cli.command {
        Command::Workbook(args) => WorkbookPipeline::from(args).into(),
        Command::Statement { input, output } => StatementPipeline { input, output }.into(),
        Command::Translate { input, output, kind } => {
            TranslatePipeline { input, output, kind }.into()
        }
    };

    pipeline.run()?;

    Ok(())
}
