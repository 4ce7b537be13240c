use std::str::FromStr;

use crate::language::InputError;

/// Which tree to build. Tooling wants everything needed to write the
/// document back out; applications only want the messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Full,
    Partial,
}

impl FromStr for Mode {
    type Err = InputError;

    fn from_str(value: &str) -> Result<Mode, InputError> {
        match value
            .trim()
            .to_ascii_lowercase()
            .as_str()
        {
            "full" => Ok(Mode::Full),
            "partial" => Ok(Mode::Partial),
            _ => Err(InputError {
                value: value.to_string(),
                expected: "one of 'full' or 'partial'",
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Context {
    mode: Mode,
}

impl Context {
    pub fn new(mode: Mode) -> Context {
        Context { mode }
    }

    pub fn full() -> Context {
        Context::new(Mode::Full)
    }

    pub fn partial() -> Context {
        Context::new(Mode::Partial)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether comments and sections become nodes or are skipped over.
    pub fn retains_trivia(&self) -> bool {
        self.mode == Mode::Full
    }
}
