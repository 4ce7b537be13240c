//! Serializing FTL documents, plain or highlighted.

mod formatter;
mod renderer;
mod syntax;
mod writer;

pub use formatter::format;
pub use renderer::{render, serialize, Terminal};
pub use syntax::{Identity, Render, Syntax};
pub use writer::{SerializeError, Writer};
