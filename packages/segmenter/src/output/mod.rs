//! Output generation for segmented documents.
//!
//! Records are written as a CSV table with a fixed column order, or as
//! YAML. Files are written atomically.

mod csv;
mod writer;
mod yaml;

pub use csv::{escape_field, generate_combined_csv, generate_csv};
pub use writer::{default_output_path, save_combined, save_document, write_atomic, OutputFormat};
pub use yaml::generate_yaml;
