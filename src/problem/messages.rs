use ftl::{
    formatting::{Render, Syntax},
    parsing::{Context, ParsingError, Problem},
};

use crate::problem::Present;

/// Show a fragment of valid FTL, highlighted if the renderer does that. The
/// text is shown as given if it can't be parsed and written back out.
fn example(text: &str, renderer: &dyn Render) -> String {
    let presented = match ftl::parsing::parse_str(text, Context::full()) {
        Ok(body) => body.present(renderer),
        Err(_) => return text.to_string(),
    };

    match presented {
        Ok(result) => result
            .trim_end()
            .to_string(),
        Err(_) => text.to_string(),
    }
}

/// Generate problem and detail messages for parsing errors
pub fn generate_error_message(error: &ParsingError, renderer: &dyn Render) -> (String, String) {
    match &error.problem {
        Problem::UnexpectedEndOfInput => (
            "Unexpected end of input".to_string(),
            "The file ended in the middle of an entry.".to_string(),
        ),
        Problem::UnexpectedCharacter(found, expected) => (
            format!("Expected '{}'", expected),
            format!(
                "The parser was looking for '{}' but found '{}' instead.",
                expected,
                found.escape_debug()
            ),
        ),
        Problem::Expected(value) => (
            format!("Expected {}", value),
            format!(
                "The parser was looking for {} but found something else.",
                value
            ),
        ),
        Problem::InvalidNumber => (
            "Invalid number".to_string(),
            format!(
                r#"
Numbers are digits optionally followed by a decimal point and at least one
more digit, for example {} or {}. There is no sign and no exponent.
                "#,
                renderer.style(Syntax::Numeric, "42"),
                renderer.style(Syntax::Numeric, "3.14")
            )
            .trim_ascii()
            .to_string(),
        ),
        Problem::InvalidBuiltin(name) => (
            format!("Invalid builtin '{}'", name),
            format!(
                r#"
Only builtin functions can be called, and their names are written in
uppercase letters (along with '.', '?', '_' and '-'), for example:

    {}
                "#,
                example("price = { NUMBER($amount, style = \"currency\") }", renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        Problem::InvalidSelectSpacing(count) => (
            "Incorrect spacing before '->'".to_string(),
            format!(
                r#"
A select expression needs exactly one space between the selector and the
arrow, but {} found. For example:

{}
                "#,
                match count {
                    0 => "none was".to_string(),
                    1 => "one was".to_string(),
                    n => format!("{} were", n),
                },
                example(
                    "emails = { $count ->\n  [one] One new email\n  *[other] { $count } new emails\n}",
                    renderer
                )
            )
            .trim_ascii()
            .to_string(),
        ),
        Problem::MissingValue => (
            "Message has no value".to_string(),
            format!(
                r#"
A message needs a pattern, a list of members, or both, after the '='.
For example:

{}
                "#,
                example("hello = Hello, { $name }!", renderer)
            )
            .trim_ascii()
            .to_string(),
        ),
        Problem::IllegalParserState => (
            "Illegal parser state".to_string(),
            "Internal parser error. This should not have happened! Sorry.".to_string(),
        ),
    }
}
