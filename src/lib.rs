use std::{fs::File, io::Read, path::Path};

pub mod ast;
pub mod frontend;
pub mod utils;

pub use frontend::{parse_source, parse_tokens, SyntaxTree};

pub const SOURCE_EXTENSION: &str = "tny";

/// Current line of a scanner, counted from one.
pub struct LineNumber {
    pub line: usize,
}

impl Default for LineNumber {
    fn default() -> Self {
        Self {
            line: utils::config::scanner::FIRST_LINE,
        }
    }
}

use crate::utils::errors::{TinyError, TinyResult};

/// Reads a TINY source file. Only `.tny` files are accepted.
pub fn read(path: &Path) -> TinyResult<String> {
    match path.extension() {
        Some(ext) if ext == SOURCE_EXTENSION => {}
        _ => {
            return Err(TinyError::FileReadError(format!(
                "File must have a .{} extension",
                SOURCE_EXTENSION
            )));
        }
    }
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(contents)
}
