//! A rewindable character stream.
//!
//! Every character pulled from the underlying source is kept in a buffer
//! until it is explicitly released, so the grammar can mark a point, look
//! arbitrarily far ahead, and rewind without touching the source again.

use std::str::Chars;

use super::error::{ParsingError, Position, Problem};

/// The buffer is shrunk back to this capacity on release, so that one long
/// lookahead doesn't pin memory for the rest of the parse.
const DEFAULT_CAPACITY: usize = 512;

/// How many characters of upcoming input to quote in an error.
const CONTEXT_WIDTH: usize = 20;

pub fn is_newline(c: char) -> bool {
    c == '\n' || c == '\r'
}

pub fn is_whitespace(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Opaque token returned by [`CharStream::mark`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    index: usize,
    position: Position,
}

#[derive(Debug)]
pub struct CharStream<I> {
    source: I,
    buffer: Vec<char>,
    // absolute index of buffer[0]
    base: usize,
    cursor: usize,
    position: Position,
}

impl<'i> CharStream<Chars<'i>> {
    pub fn from_text(text: &'i str) -> CharStream<Chars<'i>> {
        CharStream::new(text.chars())
    }
}

impl<I> CharStream<I>
where
    I: Iterator<Item = char>,
{
    pub fn new(source: I) -> CharStream<I> {
        CharStream {
            source,
            buffer: Vec::with_capacity(DEFAULT_CAPACITY),
            base: 0,
            cursor: 0,
            position: Position::default(),
        }
    }

    /// Make sure the character `ahead` places past the cursor is buffered.
    /// Returns false if the source runs out first.
    fn fill(&mut self, ahead: usize) -> bool {
        while self
            .buffer
            .len()
            <= self.cursor + ahead
        {
            match self
                .source
                .next()
            {
                Some(c) => self
                    .buffer
                    .push(c),
                None => return false,
            }
        }
        true
    }

    /// The next character, or None at the end of input.
    pub fn peek(&mut self) -> Option<char> {
        self.peek_nth(0)
    }

    pub fn peek_nth(&mut self, n: usize) -> Option<char> {
        if self.fill(n) {
            Some(self.buffer[self.cursor + n])
        } else {
            None
        }
    }

    pub fn at_end(&mut self) -> bool {
        self.peek()
            .is_none()
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn read(&mut self) -> Result<char, ParsingError> {
        match self.peek() {
            Some(c) => {
                self.advance(c);
                Ok(c)
            }
            None => Err(self.error(Problem::UnexpectedEndOfInput)),
        }
    }

    fn advance(&mut self, c: char) {
        self.cursor += 1;
        self.position
            .offset += 1;

        // "\r\n" is one line break; the '\n' accounts for it.
        let newline = match c {
            '\n' => true,
            '\r' => self.peek() != Some('\n'),
            _ => false,
        };

        if newline {
            self.position
                .line += 1;
            self.position
                .column = 0;
        } else if c != '\r' {
            self.position
                .column += 1;
        }
    }

    pub fn read_while<P>(&mut self, predicate: P) -> String
    where
        P: Fn(char) -> bool,
    {
        let mut result = String::new();
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance(c);
            result.push(c);
        }
        result
    }

    pub fn read_until<P>(&mut self, predicate: P) -> String
    where
        P: Fn(char) -> bool,
    {
        self.read_while(|c| !predicate(c))
    }

    /// Returns the number of characters skipped.
    pub fn skip_while<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(char) -> bool,
    {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !predicate(c) {
                break;
            }
            self.advance(c);
            count += 1;
        }
        count
    }

    pub fn skip_until<P>(&mut self, predicate: P) -> usize
    where
        P: Fn(char) -> bool,
    {
        self.skip_while(|c| !predicate(c))
    }

    pub fn skip_expected(&mut self, expected: char) -> Result<(), ParsingError> {
        match self.peek() {
            Some(c) if c == expected => {
                self.advance(c);
                Ok(())
            }
            Some(c) => Err(self.error(Problem::UnexpectedCharacter(c, expected))),
            None => Err(self.error(Problem::UnexpectedEndOfInput)),
        }
    }

    pub fn skip_expected_str(&mut self, expected: &str) -> Result<(), ParsingError> {
        for c in expected.chars() {
            self.skip_expected(c)?;
        }
        Ok(())
    }

    pub fn mark(&self) -> Mark {
        Mark {
            index: self.base + self.cursor,
            position: self.position,
        }
    }

    /// Return to a previously marked point. Everything read since is served
    /// again from the buffer.
    pub fn rewind(&mut self, mark: Mark) -> Result<(), ParsingError> {
        if mark.index < self.base
            || mark.index
                > self.base
                    + self
                        .buffer
                        .len()
        {
            return Err(self.error(Problem::IllegalParserState));
        }
        self.cursor = mark.index - self.base;
        self.position = mark.position;
        Ok(())
    }

    /// Declare that the stream will never be rewound to before `mark`,
    /// allowing everything buffered ahead of it to be dropped.
    pub fn release(&mut self, mark: Mark) -> Result<(), ParsingError> {
        if mark.index < self.base || mark.index > self.base + self.cursor {
            return Err(self.error(Problem::IllegalParserState));
        }

        let count = mark.index - self.base;
        self.buffer
            .drain(..count);
        self.cursor -= count;
        self.base = mark.index;

        if self
            .buffer
            .capacity()
            > DEFAULT_CAPACITY
        {
            self.buffer
                .shrink_to(DEFAULT_CAPACITY);
        }
        Ok(())
    }

    /// Build an error at the current position, quoting the upcoming input.
    /// Nothing is consumed.
    pub fn error(&mut self, problem: Problem) -> ParsingError {
        self.fill(CONTEXT_WIDTH - 1);
        let end = self
            .buffer
            .len()
            .min(self.cursor + CONTEXT_WIDTH);
        let context = self.buffer[self.cursor..end]
            .iter()
            .collect();

        ParsingError {
            problem,
            position: self.position,
            context,
        }
    }

    /// Consume and return everything that remains.
    pub fn read_to_end(&mut self) -> String {
        self.read_while(|_| true)
    }

    #[cfg(test)]
    fn buffered(&self) -> usize {
        self.buffer
            .len()
    }
}
