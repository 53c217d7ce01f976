pub mod io;
pub mod models;
pub mod parsing;
pub mod render;

#[cfg(test)]
pub mod test_utils;

// Re-export key types for easier usage
pub use models::{file_tree::*, post::*};
pub use parsing::{ParsedDoc, parse, parse_document, parse_text, types::*};
