pub mod rollup_csv;

pub use rollup_csv::{write_rollups_csv, ExportError};
