//! I/O utilities.
//!
//! Reading the text to translate and exporting the finished translation.

pub mod export;
pub mod reader;

pub use export::{export_file_name, export_translation};
pub use reader::{InputSource, read_file, read_stdin};
