pub mod data;
pub mod pipeline;
pub mod sankey;
pub mod translate;
