//! parser for the FTL localization format

use std::io::Read;
use std::path::Path;
use tracing::debug;

use crate::language::{Body, Entry, LoadingError};

mod assembler;
mod context;
mod error;
pub mod parser;
pub mod stream;

pub use assembler::{Assembler, Scanned};
pub use context::{Context, Mode};
pub use error::{ParsingError, Position, Problem};
pub use parser::Parser;
pub use stream::CharStream;

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that the Body created by parse() below can be built from
/// a borrow of it. A filename of "-" reads standard input.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    if filename.as_os_str() == "-" {
        let mut content = String::new();
        return match std::io::stdin().read_to_string(&mut content) {
            Ok(_) => Ok(content),
            Err(error) => {
                debug!(?error);
                Err(LoadingError {
                    problem: "Failed reading standard input".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                })
            }
        };
    }

    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Body, or return the error that stopped the parse.
pub fn parse(filename: &Path, content: &str, context: Context) -> Result<Body, ParsingError> {
    debug!("Parsing {:?} in {:?} mode", filename, context.mode());

    match parse_str(content, context) {
        Ok(body) => {
            let messages = body
                .messages()
                .count();
            let sections = body
                .entries
                .iter()
                .filter(|entry| matches!(entry, Entry::Section(_)))
                .count();
            debug!(
                "Found {} message{} and {} section{}",
                messages,
                if messages == 1 { "" } else { "s" },
                sections,
                if sections == 1 { "" } else { "s" }
            );
            Ok(body)
        }
        Err(error) => {
            debug!("error: {}", error);
            Err(error)
        }
    }
}

/// Parse text held in memory.
pub fn parse_str(content: &str, context: Context) -> Result<Body, ParsingError> {
    Parser::new(content, context).read_body()
}
