use std::path::PathBuf;

use log::info;

use super::{PipelineError, RunPipeline};
use crate::data;
use crate::sankey::builder::{build_revenue, build_spending, outline_totals};
use crate::sankey::outline::parse_outline;
use crate::sankey::sheets::{load_workbook, SheetNames};
use crate::sankey::summary::{generate_summary, JurisdictionProfile};
use crate::sankey::tree::{MunicipalFacts, SankeyDocument};

/// Outline + per-sheet tables → full tree JSON and summary JSON.
pub struct WorkbookPipeline {
    pub outline_path: PathBuf,
    pub sheets_dir: PathBuf,
    pub sheet_names: SheetNames,
    pub amount_column: String,
    pub profile: JurisdictionProfile,
    pub tree_out: PathBuf,
    pub summary_out: PathBuf,
}

impl RunPipeline for WorkbookPipeline {
    fn run(&self) -> Result<(), PipelineError> {
        info!("parsing outline {}", self.outline_path.display());
        let text = data::read_text(&self.outline_path)?;
        let outline = parse_outline(&text);
        info!(
            "found {} revenue and {} spending tier-1 categories",
            outline.revenue_tier1.len(),
            outline.spending_tier1.len()
        );

        info!("loading sheets from {}", self.sheets_dir.display());
        let workbook = load_workbook(&self.sheets_dir, &self.sheet_names, &self.amount_column)?;

        let revenue_data = build_revenue(&outline, &workbook.income);
        let spending_data = build_spending(&outline, &workbook.expense_tier2, &workbook.expense_tier3);

        let totals = outline_totals(&outline);
        info!("revenue ${:.3}B, spending ${:.3}B", totals.revenue, totals.spending);

        let summary = generate_summary(&totals, &spending_data, &revenue_data, &self.profile);

        let facts = MunicipalFacts {
            population: self.profile.population(),
            budget_balance: summary.budget_balance,
            per_capita_spending: summary.per_capita_spending,
            property_tax_per_capita: summary.property_tax_per_capita,
            property_tax_revenue: summary.property_tax_revenue,
        };
        let document = SankeyDocument {
            total: totals.total,
            spending: totals.spending,
            revenue: totals.revenue,
            spending_data,
            revenue_data,
            facts: Some(facts),
        };

        data::write_json(&self.tree_out, &document)?;
        data::write_json(&self.summary_out, &summary)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    const OUTLINE: &str = "\
Property taxes [6000] Revenue
User fees [500] Revenue
Spending [5000] Operating
Spending [1200] Capital

// Tier 2 - Operating
Operating [100] Unreported agencies

// Tier 3 - Staff
Staff [60] Salaries
Staff [30] Benefits
";

    fn write_sheets(dir: &Path) {
        fs::write(
            dir.join("Income Tier 2.csv"),
            "Name,2024 ($M),Category\nResidential,5163,Property taxes\nCommercial,900,Property taxes\n",
        )
        .unwrap();
        fs::write(
            dir.join("Expense Tier 2.csv"),
            "Name,2024 ($M),Category\nStaff,100,Operating\nRoads,1200,Capital\n",
        )
        .unwrap();
        fs::write(
            dir.join("Expense Tier 3.csv"),
            "Name,2024 ($M),SubCategory,Category\nSalaries,60,Staff,Operating\nBenefits,30,Staff,Operating\n",
        )
        .unwrap();
    }

    fn pipeline(dir: &Path) -> WorkbookPipeline {
        WorkbookPipeline {
            outline_path: dir.join("outline.txt"),
            sheets_dir: dir.to_path_buf(),
            sheet_names: SheetNames {
                income: "Income Tier 2".to_string(),
                expense_tier2: "Expense Tier 2".to_string(),
                expense_tier3: "Expense Tier 3".to_string(),
            },
            amount_column: "2024 ($M)".to_string(),
            profile: JurisdictionProfile::new(
                "Toronto",
                "2024",
                "https://example.org/afr",
                2_930_000,
                44_000,
                "Property taxes & taxation from other governments",
            ),
            tree_out: dir.join("sankey.json"),
            summary_out: dir.join("summary.json"),
        }
    }

    #[test]
    fn end_to_end_writes_tree_and_summary() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        fs::write(dir.path().join("outline.txt"), OUTLINE)?;
        write_sheets(dir.path());

        pipeline(dir.path()).run()?;

        let tree: Value = serde_json::from_str(&fs::read_to_string(dir.path().join("sankey.json"))?)?;
        assert_eq!(tree["total"], Value::from(6.5));
        assert_eq!(tree["revenue"], Value::from(6.5));
        assert_eq!(tree["spending"], Value::from(6.2));
        assert_eq!(tree["population"], Value::from(2_930_000));

        // Revenue: both tier-1 categories, one nested and one plain leaf.
        let revenue_children = tree["revenue_data"]["children"].as_array().unwrap();
        assert_eq!(revenue_children.len(), 2);
        assert_eq!(revenue_children[0]["children"][0]["name"], "Property taxes → Residential");
        assert_eq!(revenue_children[1]["amount"], Value::from(0.5));

        // Spending: tier-3 leaves plus the adjustment leaf, plus the
        // outline-only entry appended after the sheet rows.
        let operating = &tree["spending_data"]["children"][0];
        let staff = &operating["children"][0];
        let staff_leaves = staff["children"].as_array().unwrap();
        assert_eq!(staff_leaves.len(), 3);
        assert_eq!(staff_leaves[2]["name"], "Operating → Staff → Other (adjustment)");
        assert_eq!(staff_leaves[2]["amount"], Value::from(0.01));
        assert_eq!(
            operating["children"][1]["name"],
            "Operating → Unreported agencies"
        );

        let summary: Value =
            serde_json::from_str(&fs::read_to_string(dir.path().join("summary.json"))?)?;
        assert_eq!(summary["name"], "Toronto");
        assert_eq!(summary["totalProvincialSpending"], Value::from(6.2));
        assert_eq!(summary["totalProvincialSpendingFormatted"], "$6.2B");
        assert_eq!(summary["netDebt"], Value::Null);
        // Capital (1.2B) outweighs Operating (0.2B).
        assert_eq!(summary["ministries"][0]["name"], "Capital");
        assert_eq!(summary["ministries"][1]["name"], "Operating");

        Ok(())
    }

    #[test]
    fn missing_outline_aborts_the_run() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        write_sheets(dir.path());

        let err = pipeline(dir.path()).run().unwrap_err();
        assert!(matches!(
            err,
            PipelineError::Data(crate::data::DataError::MissingInput(_))
        ));

        Ok(())
    }
}
