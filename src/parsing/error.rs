use std::fmt;

/// A location in the input. All three fields are zero-origin; add 1 before
/// showing line or column to humans.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Problem {
    UnexpectedEndOfInput,
    UnexpectedCharacter(char, char),
    Expected(&'static str),
    InvalidNumber,
    InvalidBuiltin(String),
    InvalidSelectSpacing(usize),
    MissingValue,
    IllegalParserState,
}

impl Problem {
    pub fn message(&self) -> String {
        match self {
            Problem::UnexpectedEndOfInput => "unexpected end of input".to_string(),
            Problem::UnexpectedCharacter(found, expected) => {
                format!("found {:?} where {:?} was expected", found, expected)
            }
            Problem::Expected(value) => format!("expected {}", value),
            Problem::InvalidNumber => "expected a digit after the decimal point".to_string(),
            Problem::InvalidBuiltin(name) => format!("'{}' is not a valid builtin name", name),
            Problem::InvalidSelectSpacing(count) => format!(
                "exactly one space is required before '->', found {}",
                count
            ),
            Problem::MissingValue => "message has neither a pattern nor a member list".to_string(),
            Problem::IllegalParserState => "illegal parser state".to_string(),
        }
    }
}

/// A grammar violation. Carries where it happened and the text immediately
/// following that point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsingError {
    pub problem: Problem,
    pub position: Position,
    pub context: String,
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        self.position
            .offset
    }

    pub fn message(&self) -> String {
        self.problem
            .message()
    }
}

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} (at {:?})",
            self.position
                .line
                + 1,
            self.position
                .column
                + 1,
            self.problem
                .message(),
            self.context
        )
    }
}

impl std::error::Error for ParsingError {}
