use enum_dispatch::enum_dispatch;
use thiserror::Error;

pub mod statement;
pub mod translate;
pub mod workbook;

use statement::StatementPipeline;
use translate::TranslatePipeline;
use workbook::WorkbookPipeline;

use crate::data::DataError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Data(#[from] DataError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// A fully-configured conversion run: read inputs, transform in memory,
/// write outputs.
#[enum_dispatch]
pub trait RunPipeline {
    fn run(&self) -> Result<(), PipelineError>;
}

#[enum_dispatch(RunPipeline)]
pub enum Pipeline {
    WorkbookPipeline,
    StatementPipeline,
    TranslatePipeline,
}
