//! Grammar rules for FTL.
//!
//! Each rule comes as a `read_*()` method, which assumes the rule applies
//! and either builds the node or fails, and (where the grammar needs to ask)
//! a `peek_*()` method which checks a cheap predictor first and returns
//! `Ok(None)` without consuming anything if the rule doesn't apply.

use std::str::Chars;

use crate::language::*;

use super::assembler::{Assembler, Scanned};
use super::context::Context;
use super::error::{ParsingError, Problem};
use super::stream::{is_newline, is_whitespace, CharStream};

const SELECT_ARROW: &str = "->";

fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, '_' | '.' | '?' | '-')
}

fn is_identifier_char(c: char) -> bool {
    is_identifier_start(c) || c.is_ascii_digit()
}

fn is_keyword_char(c: char) -> bool {
    is_identifier_char(c) || c == ' '
}

fn is_builtin_char(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, '.' | '?' | '_' | '-')
}

pub fn is_builtin(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(is_builtin_char)
}

#[derive(Debug)]
pub struct Parser<I> {
    stream: CharStream<I>,
    context: Context,
}

impl<'i> Parser<Chars<'i>> {
    pub fn new(content: &'i str, context: Context) -> Parser<Chars<'i>> {
        Parser::from_stream(CharStream::from_text(content), context)
    }
}

impl<I> Parser<I>
where
    I: Iterator<Item = char>,
{
    pub fn from_stream(stream: CharStream<I>, context: Context) -> Parser<I> {
        Parser { stream, context }
    }

    /// Consume whatever input has not been parsed yet.
    pub fn remaining(&mut self) -> String {
        self.stream
            .read_to_end()
    }

    fn peek_is(&mut self, expected: char) -> bool {
        self.stream
            .peek()
            == Some(expected)
    }

    fn peek_is_newline(&mut self) -> bool {
        matches!(self.stream.peek(), Some(c) if is_newline(c))
    }

    fn skip_whitespace(&mut self) -> usize {
        self.stream
            .skip_while(is_whitespace)
    }

    /// Exactly one line break; "\r\n" counts as one.
    fn read_newline(&mut self) -> Result<(), ParsingError> {
        match self
            .stream
            .peek()
        {
            Some('\n') => {
                self.stream
                    .read()?;
                Ok(())
            }
            Some('\r') => {
                self.stream
                    .read()?;
                if self.peek_is('\n') {
                    self.stream
                        .read()?;
                }
                Ok(())
            }
            Some(_) => Err(self
                .stream
                .error(Problem::Expected("a newline"))),
            None => Err(self
                .stream
                .error(Problem::UnexpectedEndOfInput)),
        }
    }

    /// Whitespace, optionally followed by one line break and the
    /// indentation of the next line.
    fn skip_continuation(&mut self) -> Result<(), ParsingError> {
        self.skip_whitespace();
        if self.peek_is_newline() {
            self.read_newline()?;
            self.skip_whitespace();
        }
        Ok(())
    }

    // tokens

    fn check_start(
        &mut self,
        predicate: fn(char) -> bool,
        expected: &'static str,
    ) -> Result<(), ParsingError> {
        match self
            .stream
            .peek()
        {
            Some(c) if predicate(c) => Ok(()),
            Some(_) => Err(self
                .stream
                .error(Problem::Expected(expected))),
            None => Err(self
                .stream
                .error(Problem::UnexpectedEndOfInput)),
        }
    }

    pub fn read_identifier(&mut self) -> Result<Identifier, ParsingError> {
        self.check_start(is_identifier_start, "an identifier")?;
        let text = self
            .stream
            .read_while(is_identifier_char);
        Ok(Identifier(text))
    }

    pub fn peek_identifier(&mut self) -> Result<Option<Identifier>, ParsingError> {
        match self
            .stream
            .peek()
        {
            Some(c) if is_identifier_start(c) => Ok(Some(self.read_identifier()?)),
            _ => Ok(None),
        }
    }

    /// Like an identifier, but interior spaces are allowed. Trailing spaces
    /// are consumed and dropped.
    pub fn read_keyword(&mut self) -> Result<Identifier, ParsingError> {
        self.check_start(is_identifier_start, "a keyword")?;
        let text = self
            .stream
            .read_while(is_keyword_char);
        Ok(Identifier(
            text.trim_end_matches(' ')
                .to_string(),
        ))
    }

    pub fn read_builtin(&mut self) -> Result<Identifier, ParsingError> {
        self.check_start(is_builtin_char, "a builtin name")?;
        let text = self
            .stream
            .read_while(is_builtin_char);
        Ok(Identifier(text))
    }

    /// Digits, optionally followed by a decimal point and more digits. No
    /// sign, no exponent.
    pub fn read_number(&mut self) -> Result<Number, ParsingError> {
        self.check_start(|c| c.is_ascii_digit(), "a number")?;
        let mut text = self
            .stream
            .read_while(|c| c.is_ascii_digit());

        if self.peek_is('.') {
            text.push(
                self.stream
                    .read()?,
            );
            let fraction = self
                .stream
                .read_while(|c| c.is_ascii_digit());
            if fraction.is_empty() {
                return Err(self
                    .stream
                    .error(Problem::InvalidNumber));
            }
            text.push_str(&fraction);
        }

        match text.parse::<f64>() {
            Ok(value) => Ok(Number(value)),
            Err(_) => Err(self
                .stream
                .error(Problem::InvalidNumber)),
        }
    }

    pub fn read_variable(&mut self) -> Result<Identifier, ParsingError> {
        self.stream
            .skip_expected('$')?;
        self.read_identifier()
    }

    // text

    /// Text up to the end of the line or an unescaped '{'.
    fn read_unquoted_text(&mut self) -> Result<String, ParsingError> {
        let mut text = String::new();
        let mut escaped = false;

        while let Some(c) = self
            .stream
            .peek()
        {
            if is_newline(c) || (c == '{' && !escaped) {
                break;
            }
            self.stream
                .read()?;
            text.push(c);
            escaped = !escaped && c == '\\';
        }

        if text.is_empty() {
            return Err(self
                .stream
                .error(Problem::Expected("some text")));
        }
        Ok(text)
    }

    /// Text up to the end of the line, an unescaped '{' or an unescaped '"'.
    fn read_quoted_text(&mut self) -> Result<String, ParsingError> {
        let mut text = String::new();
        let mut escaped = false;

        while let Some(c) = self
            .stream
            .peek()
        {
            if is_newline(c) || (!escaped && (c == '{' || c == '"')) {
                break;
            }
            self.stream
                .read()?;
            text.push(c);
            escaped = !escaped && c == '\\';
        }

        if text.is_empty() {
            return Err(self
                .stream
                .error(Problem::Expected("a closing '\"'")));
        }
        Ok(text)
    }

    /// Is the next line a `|` continuation? Returns the indentation width if
    /// so. Never consumes anything.
    fn peek_block_line(&mut self) -> Result<Option<usize>, ParsingError> {
        if !self.peek_is_newline() {
            return Ok(None);
        }

        let start = self
            .stream
            .mark();
        self.read_newline()?;
        let indent = self.skip_whitespace();
        let found = self.peek_is('|');
        self.stream
            .rewind(start)?;

        Ok(if found { Some(indent) } else { None })
    }

    /// One or more `| ...` lines at the same indentation. A '|' inside a
    /// line is ordinary text.
    pub fn peek_block_text(&mut self) -> Result<Option<BlockText>, ParsingError> {
        let indent = match self.peek_block_line()? {
            Some(indent) => indent,
            None => return Ok(None),
        };

        let mut lines = Vec::new();
        loop {
            self.read_newline()?;
            self.skip_whitespace();
            self.stream
                .skip_expected('|')?;
            if self.peek_is(' ') {
                self.stream
                    .read()?;
            }
            lines.push(self.read_block_line()?);

            match self.peek_block_line()? {
                Some(next) if next == indent => continue,
                _ => break,
            }
        }

        Ok(Some(BlockText { lines }))
    }

    fn read_block_line(&mut self) -> Result<Vec<Element>, ParsingError> {
        let mut elements = Vec::new();
        loop {
            if let Some(placeable) = self.peek_placeable()? {
                elements.push(Element::Placeable(placeable));
                continue;
            }
            match self
                .stream
                .peek()
            {
                Some(c) if !is_newline(c) => {
                    elements.push(Element::Text(self.read_unquoted_text()?));
                }
                _ => break,
            }
        }
        Ok(elements)
    }

    // patterns

    pub fn read_pattern(&mut self) -> Result<Pattern, ParsingError> {
        if self.peek_is('"') {
            self.read_quoted_pattern()
        } else {
            self.read_unquoted_pattern()
        }
    }

    pub fn peek_pattern(&mut self) -> Result<Option<Pattern>, ParsingError> {
        let applies = match self
            .stream
            .peek()
        {
            None => false,
            Some(c) if is_newline(c) => self
                .peek_block_line()?
                .is_some(),
            Some(_) => true,
        };

        if applies {
            Ok(Some(self.read_pattern()?))
        } else {
            Ok(None)
        }
    }

    /// '"' (placeable | quoted-text)* '"'
    pub fn read_quoted_pattern(&mut self) -> Result<Pattern, ParsingError> {
        self.stream
            .skip_expected('"')?;

        let mut elements = Vec::new();
        while !self.peek_is('"') {
            match self.peek_placeable()? {
                Some(placeable) => elements.push(Element::Placeable(placeable)),
                None => elements.push(Element::QuotedText(self.read_quoted_text()?)),
            }
        }

        self.stream
            .skip_expected('"')?;

        Ok(Pattern {
            quoted: true,
            elements,
        })
    }

    /// (unquoted-text | placeable | block-text)+, as many as can be had.
    pub fn read_unquoted_pattern(&mut self) -> Result<Pattern, ParsingError> {
        let mut elements = Vec::new();
        while let Some(element) = self.peek_unquoted_element()? {
            elements.push(element);
        }

        if elements.is_empty() {
            return Err(self
                .stream
                .error(Problem::Expected("a pattern")));
        }

        Ok(Pattern {
            quoted: false,
            elements,
        })
    }

    fn peek_unquoted_element(&mut self) -> Result<Option<Element>, ParsingError> {
        if let Some(placeable) = self.peek_placeable()? {
            return Ok(Some(Element::Placeable(placeable)));
        }
        if let Some(block) = self.peek_block_text()? {
            return Ok(Some(Element::Block(block)));
        }
        match self
            .stream
            .peek()
        {
            Some(c) if !is_newline(c) => Ok(Some(Element::Text(self.read_unquoted_text()?))),
            _ => Ok(None),
        }
    }

    // placeables and expressions

    pub fn peek_placeable(&mut self) -> Result<Option<Placeable>, ParsingError> {
        if !self.peek_is('{') {
            return Ok(None);
        }

        self.stream
            .skip_expected('{')?;

        let mut expressions = Vec::new();
        loop {
            self.skip_continuation()?;
            expressions.push(self.read_placeable_expression()?);
            self.skip_continuation()?;

            if self.peek_is(',') {
                self.stream
                    .read()?;
            } else {
                break;
            }
        }

        self.stream
            .skip_expected('}')?;

        Ok(Some(Placeable { expressions }))
    }

    /// An expression, which becomes the selector of a select expression if
    /// followed by exactly one space and "->".
    pub fn read_placeable_expression(&mut self) -> Result<Expression, ParsingError> {
        let expression = self.read_expression()?;

        let start = self
            .stream
            .mark();
        let spaces = self.skip_whitespace();

        let arrow = self.peek_is('-')
            && self
                .stream
                .peek_nth(1)
                == Some('>');

        if !arrow {
            self.stream
                .rewind(start)?;
            return Ok(expression);
        }

        if spaces != 1 {
            return Err(self
                .stream
                .error(Problem::InvalidSelectSpacing(spaces)));
        }

        self.stream
            .skip_expected_str(SELECT_ARROW)?;
        self.skip_whitespace();

        let members = self.read_member_list()?;

        Ok(Expression::Select(SelectExpression {
            selector: Box::new(expression),
            members,
        }))
    }

    pub fn read_expression(&mut self) -> Result<Expression, ParsingError> {
        if let Some(identifier) = self.peek_identifier()? {
            return self.read_expression_with_identifier(identifier);
        }

        match self
            .stream
            .peek()
        {
            Some('$') => Ok(Expression::Variable(self.read_variable()?)),
            Some('"') => Ok(Expression::Pattern(self.read_quoted_pattern()?)),
            Some(c) if c.is_ascii_digit() => Ok(Expression::Number(self.read_number()?)),
            Some(_) => Err(self
                .stream
                .error(Problem::Expected("an expression"))),
            None => Err(self
                .stream
                .error(Problem::UnexpectedEndOfInput)),
        }
    }

    fn read_expression_with_identifier(
        &mut self,
        identifier: Identifier,
    ) -> Result<Expression, ParsingError> {
        match self
            .stream
            .peek()
        {
            Some('[') => Ok(Expression::Member(
                self.read_member_expression(identifier)?,
            )),
            Some('(') => Ok(Expression::Call(self.read_call_expression(identifier)?)),
            _ => Ok(Expression::Reference(identifier)),
        }
    }

    fn read_member_expression(
        &mut self,
        identifier: Identifier,
    ) -> Result<MemberExpression, ParsingError> {
        self.stream
            .skip_expected('[')?;
        let keyword = self.read_keyword()?;
        self.stream
            .skip_expected(']')?;

        Ok(MemberExpression {
            identifier,
            keyword,
        })
    }

    fn read_call_expression(&mut self, builtin: Identifier) -> Result<CallExpression, ParsingError> {
        if !is_builtin(&builtin.0) {
            return Err(self
                .stream
                .error(Problem::InvalidBuiltin(builtin.0)));
        }

        self.stream
            .skip_expected('(')?;
        self.skip_whitespace();

        let mut arguments = Vec::new();
        if !self.peek_is(')') {
            loop {
                arguments.push(self.read_argument()?);
                self.skip_whitespace();

                if !self.peek_is(',') {
                    break;
                }
                self.stream
                    .read()?;
                self.skip_whitespace();
            }
        }

        self.stream
            .skip_expected(')')?;

        Ok(CallExpression { builtin, arguments })
    }

    /// An expression, or `identifier = "quoted pattern"`.
    pub fn read_argument(&mut self) -> Result<Argument, ParsingError> {
        let identifier = match self.peek_identifier()? {
            Some(identifier) => identifier,
            None => return Ok(Argument::Expression(self.read_expression()?)),
        };

        let start = self
            .stream
            .mark();
        self.skip_whitespace();

        if !self.peek_is('=') {
            self.stream
                .rewind(start)?;
            return Ok(Argument::Expression(
                self.read_expression_with_identifier(identifier)?,
            ));
        }

        self.stream
            .skip_expected('=')?;
        self.skip_whitespace();
        let value = self.read_quoted_pattern()?;

        Ok(Argument::Keyword(KeywordArgument { identifier, value }))
    }

    // members

    pub fn read_member_key(&mut self) -> Result<MemberKey, ParsingError> {
        let identifier = match self.peek_identifier()? {
            Some(identifier) => identifier,
            None => return Ok(MemberKey::Number(self.read_number()?)),
        };

        if self.peek_is('/') {
            self.stream
                .read()?;
            let keyword = self.read_keyword()?;
            return Ok(MemberKey::Attribute(Attribute {
                identifier,
                keyword,
            }));
        }

        Ok(MemberKey::Identifier(identifier))
    }

    /// '*'? '[' memberkey ']' pattern
    pub fn read_member(&mut self) -> Result<Member, ParsingError> {
        self.skip_whitespace();

        let is_default = self.peek_is('*');
        if is_default {
            self.stream
                .read()?;
        }

        self.stream
            .skip_expected('[')?;
        let key = self.read_member_key()?;
        self.stream
            .skip_expected(']')?;

        self.skip_whitespace();
        let pattern = self.read_pattern()?;

        Ok(Member {
            key,
            pattern,
            is_default,
        })
    }

    /// A member starts with '*' or a single '['; "[[" opens a section.
    fn peek_member(&mut self) -> bool {
        match self
            .stream
            .peek()
        {
            Some('*') => true,
            Some('[') => {
                self.stream
                    .peek_nth(1)
                    != Some('[')
            }
            _ => false,
        }
    }

    /// Starting at the line break before the first member.
    pub fn read_member_list(&mut self) -> Result<MemberList, ParsingError> {
        self.read_newline()?;
        self.skip_whitespace();

        let mut list = MemberList::new(self.read_member()?);

        while self.peek_is_newline() {
            let start = self
                .stream
                .mark();
            self.read_newline()?;
            self.skip_whitespace();

            if !self.peek_member() {
                self.stream
                    .rewind(start)?;
                break;
            }
            list.push(self.read_member()?);
        }

        Ok(list)
    }

    pub fn peek_member_list(&mut self) -> Result<Option<MemberList>, ParsingError> {
        if !self.peek_is_newline() {
            return Ok(None);
        }

        let start = self
            .stream
            .mark();
        self.read_newline()?;
        self.skip_whitespace();
        let found = self.peek_member();
        self.stream
            .rewind(start)?;

        if found {
            Ok(Some(self.read_member_list()?))
        } else {
            Ok(None)
        }
    }

    // entries

    /// identifier '=' (pattern | pattern member-list | member-list)
    pub fn peek_message(&mut self) -> Result<Option<Message>, ParsingError> {
        let identifier = match self.peek_identifier()? {
            Some(identifier) => identifier,
            None => return Ok(None),
        };

        self.skip_whitespace();
        self.stream
            .skip_expected('=')?;
        self.skip_whitespace();

        let pattern = self.peek_pattern()?;
        let members = self.peek_member_list()?;

        let value = match Value::from_parts(pattern, members) {
            Some(value) => value,
            None => {
                return Err(self
                    .stream
                    .error(Problem::MissingValue))
            }
        };

        Ok(Some(Message {
            identifier,
            value,
            comment: None,
        }))
    }

    /// '[[' keyword ']]'. When not retaining sections the rest of the line
    /// after the opening '[[' is skipped unexamined.
    pub fn peek_section(&mut self) -> Result<Option<Scanned>, ParsingError> {
        if !self.peek_is('[') {
            return Ok(None);
        }

        self.stream
            .skip_expected_str("[[")?;

        if !self
            .context
            .retains_trivia()
        {
            self.stream
                .skip_until(is_newline);
            return Ok(Some(Scanned::Discarded));
        }

        self.skip_whitespace();
        let keyword = self.read_keyword()?;
        self.skip_whitespace();
        self.stream
            .skip_expected_str("]]")?;
        self.skip_whitespace();

        Ok(Some(Scanned::Entry(Entry::Section(Section {
            keyword,
            comment: None,
        }))))
    }

    /// '#' followed by everything up to the end of the line.
    pub fn peek_comment(&mut self) -> Result<Option<Scanned>, ParsingError> {
        if !self.peek_is('#') {
            return Ok(None);
        }

        self.stream
            .skip_expected('#')?;

        if !self
            .context
            .retains_trivia()
        {
            self.stream
                .skip_until(is_newline);
            return Ok(Some(Scanned::Discarded));
        }

        let line = self
            .stream
            .read_until(is_newline);

        Ok(Some(Scanned::Entry(Entry::Comment(Comment::new(line)))))
    }

    pub fn peek_entry(&mut self) -> Result<Option<Scanned>, ParsingError> {
        if let Some(message) = self.peek_message()? {
            return Ok(Some(Scanned::Entry(Entry::Message(message))));
        }
        if let Some(section) = self.peek_section()? {
            return Ok(Some(section));
        }
        self.peek_comment()
    }

    /// Entries separated by single line breaks, up to the end of input.
    pub fn read_body(&mut self) -> Result<Body, ParsingError> {
        let mut assembler = Assembler::new();

        while !self
            .stream
            .at_end()
        {
            let scanned = match self.peek_entry()? {
                Some(scanned) => scanned,
                None => {
                    return Err(self
                        .stream
                        .error(Problem::Expected("a message, section or comment")))
                }
            };
            assembler.push(scanned);

            // nothing before this point will be looked at again
            let here = self
                .stream
                .mark();
            self.stream
                .release(here)?;

            if self
                .stream
                .at_end()
            {
                break;
            }
            self.read_newline()?;
        }

        Ok(assembler.finish())
    }
}
