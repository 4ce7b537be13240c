//! Accumulates output as syntax-tagged fragments, tracking the current
//! indentation level.

use std::fmt;

use super::syntax::{Render, Syntax};

const INDENT: &str = "  ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SerializeError {
    NegativeIndentation,
}

impl fmt::Display for SerializeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializeError::NegativeIndentation => {
                write!(f, "indentation cannot be decreased below zero")
            }
        }
    }
}

impl std::error::Error for SerializeError {}

#[derive(Debug, Default)]
pub struct Writer {
    fragments: Vec<(Syntax, String)>,
    indentation: usize,
}

impl Writer {
    pub fn new() -> Writer {
        Writer::default()
    }

    pub fn indentation(&self) -> usize {
        self.indentation
    }

    pub fn write(&mut self, syntax: Syntax, text: &str) {
        if text.is_empty() {
            return;
        }
        self.fragments
            .push((syntax, text.to_string()));
    }

    pub fn write_char(&mut self, syntax: Syntax, c: char) {
        self.fragments
            .push((syntax, c.to_string()));
    }

    pub fn newline(&mut self) {
        self.write(Syntax::Newline, "\n");
    }

    /// Write the text followed by a line break.
    pub fn write_line(&mut self, syntax: Syntax, text: &str) {
        self.write(syntax, text);
        self.newline();
    }

    /// Emit the current indentation, if any.
    pub fn write_indent(&mut self) {
        if self.indentation > 0 {
            let spaces = INDENT.repeat(self.indentation);
            self.write(Syntax::Indent, &spaces);
        }
    }

    pub fn increase_indent(&mut self) {
        self.indentation += 1;
    }

    pub fn decrease_indent(&mut self) -> Result<(), SerializeError> {
        if self.indentation == 0 {
            return Err(SerializeError::NegativeIndentation);
        }
        self.indentation -= 1;
        Ok(())
    }

    pub fn fragments(&self) -> &[(Syntax, String)] {
        &self.fragments
    }

    pub fn into_string(self) -> String {
        self.fragments
            .into_iter()
            .map(|(_, content)| content)
            .collect()
    }

    /// Apply markup to each fragment via the given renderer and combine.
    pub fn render(&self, renderer: &(impl Render + ?Sized)) -> String {
        let mut output = String::new();

        for (syntax, content) in &self.fragments {
            let rendered = renderer.style(*syntax, content);
            output.push_str(&rendered);
        }

        output
    }
}

impl fmt::Display for Writer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (_, content) in &self.fragments {
            f.write_str(content)?;
        }
        Ok(())
    }
}
