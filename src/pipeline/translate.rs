use std::path::PathBuf;

use clap::ValueEnum;
use log::info;

use super::{PipelineError, RunPipeline};
use crate::data;
use crate::translate::{
    translate_any, translate_assistance_objective, translate_beneficiary, translate_distribution,
    translate_element, translate_header, translate_portfolio, translate_program,
    translate_supercategory,
};

/// Which export layout is being translated; decides the dictionary applied
/// to each column position.
#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
pub enum TableKind {
    /// General-fund expenditures and investments.
    Expenditures,
    /// Transfer expenditures by assistance objective.
    AssistanceObjectives,
    /// Transfer expenditures by beneficiary.
    Beneficiaries,
    /// Special-fund revenues and expenditures.
    SpecialFunds,
    /// Second pass: run the catch-all dictionary over every cell.
    Fixup,
}

fn identity(value: &str) -> &str {
    value
}

fn column_translator(kind: TableKind, index: usize) -> fn(&str) -> &str {
    use TableKind::*;

    match (kind, index) {
        (Fixup, _) => translate_any,
        (Expenditures | AssistanceObjectives | Beneficiaries, 0) => translate_portfolio,
        (Expenditures | AssistanceObjectives, 1 | 2) => translate_program,
        (Expenditures, 3 | 4) => translate_element,
        (Expenditures, 5) => translate_distribution,
        (Expenditures, 6) => translate_supercategory,
        (AssistanceObjectives, 3) => translate_assistance_objective,
        (Beneficiaries, 1) => translate_beneficiary,
        (SpecialFunds, 2) => translate_distribution,
        (SpecialFunds, 3) => translate_supercategory,
        _ => identity,
    }
}

/// Rewrites a CSV export, translating the header row and the configured
/// columns; everything else passes through unchanged.
pub struct TranslatePipeline {
    pub input: PathBuf,
    pub output: PathBuf,
    pub kind: TableKind,
}

impl RunPipeline for TranslatePipeline {
    fn run(&self) -> Result<(), PipelineError> {
        info!("translating {} ({:?})", self.input.display(), self.kind);
        let text = data::read_text(&self.input)?;

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let mut writer = csv::WriterBuilder::new()
            .flexible(true)
            .from_path(&self.output)?;

        let header: csv::StringRecord = reader.headers()?.iter().map(translate_header).collect();
        writer.write_record(&header)?;

        let mut row_count = 0usize;
        for record in reader.records() {
            let record = record?;
            if record.iter().all(str::is_empty) {
                continue;
            }

            let translated: csv::StringRecord = record
                .iter()
                .enumerate()
                .map(|(index, cell)| column_translator(self.kind, index)(cell))
                .collect();
            writer.write_record(&translated)?;
            row_count += 1;
        }
        writer.flush()?;

        info!("translated {} rows into {}", row_count, self.output.display());

        Ok(())
    }
}
