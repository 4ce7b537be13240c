//! Renderers for colourizing FTL

use owo_colors::OwoColorize;

use crate::language::Body;

use super::formatter::format;
use super::syntax::{Identity, Render, Syntax};
use super::writer::SerializeError;

/// Embellish fragments with ANSI escapes to create syntax highlighting in
/// terminal output.
pub struct Terminal;

impl Render for Terminal {
    fn style(&self, syntax: Syntax, content: &str) -> String {
        match syntax {
            Syntax::Neutral => content.to_string(),
            Syntax::Indent => content.to_string(),
            Syntax::Newline => "\n".to_string(),
            Syntax::Comment => content // comment.line - #999999 (grey)
                .color(owo_colors::Rgb(153, 153, 153))
                .to_string(),
            Syntax::Section => content // markup.heading
                .bright_white()
                .bold()
                .to_string(),
            Syntax::Identifier => content // entity.name.function - #3465a4 (blue) bold
                .color(owo_colors::Rgb(0x34, 0x65, 0xa4))
                .bold()
                .to_string(),
            Syntax::Keyword => content // keyword.control
                .color(owo_colors::Rgb(0x75, 0x50, 0x7b))
                .bold()
                .to_string(),
            Syntax::Builtin => content // support.function - #8f5902 (brown) bold
                .color(owo_colors::Rgb(0x8f, 0x59, 0x02))
                .bold()
                .to_string(),
            Syntax::Variable => content // variable.parameter - #729fcf (light blue) bold
                .color(owo_colors::Rgb(0x72, 0x9f, 0xcf))
                .bold()
                .to_string(),
            Syntax::Numeric => content // constant.numeric - #ad7fa8 (purple) bold
                .color(owo_colors::Rgb(0xad, 0x7f, 0xa8))
                .bold()
                .to_string(),
            Syntax::Text => content.to_string(),
            Syntax::Quote => content // string - #4e9a06 (green) bold
                .color(owo_colors::Rgb(0x4e, 0x9a, 0x06))
                .bold()
                .to_string(),
            Syntax::Operator => content // keyword.operator - #cc0000 (red) bold
                .color(owo_colors::Rgb(204, 0, 0))
                .bold()
                .to_string(),
            Syntax::Structure => content // punctuation.section.braces - #999999 bold
                .color(owo_colors::Rgb(153, 153, 153))
                .bold()
                .to_string(),
        }
    }
}

/// We write documents out in two passes. First we convert from the syntax
/// tree into a Vec of "fragments" (Syntax tag, String pairs). Then we apply
/// the specified renderer to each pair to result in an embellished String.
pub fn render(renderer: &(impl Render + ?Sized), body: &Body) -> Result<String, SerializeError> {
    let fragments = format(body)?;

    Ok(fragments.render(renderer))
}

/// Plain canonical text, the inverse of parsing.
pub fn serialize(body: &Body) -> Result<String, SerializeError> {
    render(&Identity, body)
}
