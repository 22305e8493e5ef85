use std::path::PathBuf;

use log::{debug, info};
use rust_decimal::Decimal;
use serde::Deserialize;

use super::{PipelineError, RunPipeline};
use crate::data;
use crate::sankey::tree::{CategoryNode, SankeyDocument};
use crate::sankey::{BASE_UNITS_PER_BILLION, REVENUE_ROOT_NAME, SPENDING_ROOT_NAME};

const REVENUE_GROUP: &str = "Revenues";
const SPENDING_GROUP: &str = "Expenditures";

#[derive(Debug, Deserialize)]
struct StatementRecord {
    #[serde(rename = "REGRP_Summary")]
    summary: String,
    #[serde(rename = "REGRP_Name")]
    name: String,
    #[serde(rename = "Amount")]
    amount: Decimal,
}

/// Single delimited statement → flat two-level tree JSON.
pub struct StatementPipeline {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl RunPipeline for StatementPipeline {
    fn run(&self) -> Result<(), PipelineError> {
        info!("reading statement {}", self.input.display());
        let text = data::read_text(&self.input)?;
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(text.as_bytes());

        let mut revenues = Vec::new();
        let mut expenditures = Vec::new();
        for record in reader.deserialize::<StatementRecord>() {
            match record {
                Ok(row) => {
                    let leaf = CategoryNode::leaf(&row.name, row.amount / BASE_UNITS_PER_BILLION);
                    match row.summary.as_str() {
                        REVENUE_GROUP => revenues.push(leaf),
                        SPENDING_GROUP => expenditures.push(leaf),
                        other => debug!("ignoring row {:?} in group {other:?}", row.name),
                    }
                }
                Err(err) => debug!("failed to deserialize record, err={err}"),
            }
        }
        info!(
            "found {} revenue and {} expenditure categories",
            revenues.len(),
            expenditures.len()
        );

        let revenue: Decimal = revenues.iter().map(CategoryNode::sum).sum();
        let spending: Decimal = expenditures.iter().map(CategoryNode::sum).sum();

        let document = SankeyDocument {
            // The chart scales against the larger of the two flows.
            total: revenue.max(spending),
            spending,
            revenue,
            spending_data: CategoryNode::branch(SPENDING_ROOT_NAME, expenditures),
            revenue_data: CategoryNode::branch(REVENUE_ROOT_NAME, revenues),
            facts: None,
        };

        data::write_json(&self.output, &document)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use serde_json::Value;

    use super::*;

    const STATEMENT: &str = "\
REGRP_Summary,REGRP_Name,Amount
Revenues,Personal income tax,43000000000
Revenues,Consumption taxes,28500000000
Expenditures,Health and Social Services,61000000000
Expenditures,Education,22000000000
Investments,Capital works,5000000000
not,a,row,with,matching,columns
";

    #[test]
    fn builds_flat_tree_with_max_total() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("statement.csv");
        let output = dir.path().join("sankey.json");
        fs::write(&input, STATEMENT)?;

        StatementPipeline { input, output: output.clone() }.run()?;

        let doc: Value = serde_json::from_str(&fs::read_to_string(&output)?)?;
        assert_eq!(doc["revenue"], Value::from(71.5));
        assert_eq!(doc["spending"], Value::from(83.0));
        // Spending exceeds revenue, so it drives the chart total.
        assert_eq!(doc["total"], Value::from(83.0));

        let revenues = doc["revenue_data"]["children"].as_array().unwrap();
        assert_eq!(revenues.len(), 2);
        assert_eq!(revenues[0]["name"], "Personal income tax");
        assert_eq!(revenues[0]["amount"], Value::from(43.0));

        // "Investments" rows are neither revenue nor spending.
        let expenditures = doc["spending_data"]["children"].as_array().unwrap();
        assert_eq!(expenditures.len(), 2);

        // The statement document carries no municipal facts.
        assert_eq!(doc.get("population"), None);

        Ok(())
    }

    #[test]
    fn missing_input_is_fatal() {
        let err = StatementPipeline {
            input: PathBuf::from("missing.csv"),
            output: PathBuf::from("out.json"),
        }
        .run()
        .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::Data(crate::data::DataError::MissingInput(_))
        ));
    }
}
