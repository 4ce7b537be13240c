//! Writes a syntax tree back out as FTL text.
//!
//! Output is canonical: a document that is already in canonical form comes
//! back byte for byte, and anything else is normalized such that a second
//! pass changes nothing.

use crate::language::*;

use super::syntax::Syntax;
use super::writer::{SerializeError, Writer};

/// Convert the syntax tree into tagged fragments, ready to be rendered.
pub fn format(body: &Body) -> Result<Writer, SerializeError> {
    let mut output = Formatter::new();

    output.append_body(body)?;

    Ok(output.writer)
}

struct Formatter {
    writer: Writer,
}

impl Formatter {
    fn new() -> Formatter {
        Formatter {
            writer: Writer::new(),
        }
    }

    fn append(&mut self, syntax: Syntax, content: &str) {
        self.writer
            .write(syntax, content);
    }

    fn append_body(&mut self, body: &Body) -> Result<(), SerializeError> {
        for entry in &body.entries {
            self.append_entry(entry)?;
        }
        Ok(())
    }

    fn append_entry(&mut self, entry: &Entry) -> Result<(), SerializeError> {
        match entry {
            Entry::Message(message) => self.append_message(message),
            Entry::Section(section) => {
                self.append_section(section);
                Ok(())
            }
            Entry::Comment(comment) => {
                self.append_comment(comment);
                Ok(())
            }
        }
    }

    fn append_comment(&mut self, comment: &Comment) {
        for line in comment.lines() {
            self.append(Syntax::Comment, "#");
            self.writer
                .write_line(Syntax::Comment, line);
        }
    }

    fn append_section(&mut self, section: &Section) {
        if let Some(comment) = &section.comment {
            self.append_comment(comment);
        }
        self.append(Syntax::Structure, "[[ ");
        self.append(Syntax::Section, &section.keyword.0);
        self.writer
            .write_line(Syntax::Structure, " ]]");
    }

    fn append_message(&mut self, message: &Message) -> Result<(), SerializeError> {
        if let Some(comment) = &message.comment {
            self.append_comment(comment);
        }

        self.append(Syntax::Identifier, &message.identifier.0);
        self.append(Syntax::Operator, " =");

        if let Some(pattern) = message
            .value
            .pattern()
        {
            self.append_leading_pattern(pattern)?;
        }
        if let Some(members) = message
            .value
            .members()
        {
            self.append_member_list(members)?;
        }

        self.writer
            .newline();
        Ok(())
    }

    /// A pattern following "=" or a member key. Block text starts on a line
    /// of its own, so gets no separating space.
    fn append_leading_pattern(&mut self, pattern: &Pattern) -> Result<(), SerializeError> {
        let block = matches!(
            pattern
                .elements
                .first(),
            Some(Element::Block(_))
        );
        if !block {
            self.append(Syntax::Neutral, " ");
        }
        self.append_pattern(pattern)
    }

    fn append_pattern(&mut self, pattern: &Pattern) -> Result<(), SerializeError> {
        if pattern.quoted {
            self.append(Syntax::Quote, "\"");
        }
        for element in &pattern.elements {
            self.append_element(element)?;
        }
        if pattern.quoted {
            self.append(Syntax::Quote, "\"");
        }
        Ok(())
    }

    fn append_element(&mut self, element: &Element) -> Result<(), SerializeError> {
        match element {
            Element::Text(text) => self.append(Syntax::Text, text),
            Element::QuotedText(text) => self.append(Syntax::Quote, text),
            Element::Placeable(placeable) => self.append_placeable(placeable)?,
            Element::Block(block) => self.append_block(block)?,
        }
        Ok(())
    }

    fn append_block(&mut self, block: &BlockText) -> Result<(), SerializeError> {
        self.writer
            .increase_indent();
        for line in &block.lines {
            self.writer
                .newline();
            self.writer
                .write_indent();
            self.writer
                .write_char(Syntax::Structure, '|');
            if !line.is_empty() {
                self.writer
                    .write_char(Syntax::Neutral, ' ');
            }
            for element in line {
                self.append_element(element)?;
            }
        }
        self.writer
            .decrease_indent()
    }

    fn append_placeable(&mut self, placeable: &Placeable) -> Result<(), SerializeError> {
        self.append(Syntax::Structure, "{ ");

        // a select expression ends with its member list, so whatever
        // follows it goes on a new line
        let mut after_select = false;
        for (i, expression) in placeable
            .expressions
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Structure, ", ");
            }
            self.append_expression(expression)?;

            after_select = matches!(expression, Expression::Select(_));
            if after_select {
                self.writer
                    .newline();
                self.writer
                    .write_indent();
            }
        }

        if after_select {
            self.append(Syntax::Structure, "}");
        } else {
            self.append(Syntax::Structure, " }");
        }
        Ok(())
    }

    fn append_expression(&mut self, expression: &Expression) -> Result<(), SerializeError> {
        match expression {
            Expression::Reference(identifier) => {
                self.append(Syntax::Identifier, &identifier.0);
            }
            Expression::Variable(identifier) => {
                self.append(Syntax::Variable, "$");
                self.append(Syntax::Variable, &identifier.0);
            }
            Expression::Member(member) => {
                self.append(Syntax::Identifier, &member.identifier.0);
                self.append(Syntax::Structure, "[");
                self.append(Syntax::Keyword, &member.keyword.0);
                self.append(Syntax::Structure, "]");
            }
            Expression::Call(call) => self.append_call(call)?,
            Expression::Number(number) => self.append_number(number),
            Expression::Pattern(pattern) => self.append_pattern(pattern)?,
            Expression::Select(select) => {
                self.append_expression(&select.selector)?;
                self.append(Syntax::Operator, " ->");
                self.append_member_list(&select.members)?;
            }
        }
        Ok(())
    }

    fn append_number(&mut self, number: &Number) {
        self.append(Syntax::Numeric, &number.0.to_string());
    }

    fn append_call(&mut self, call: &CallExpression) -> Result<(), SerializeError> {
        self.append(Syntax::Builtin, &call.builtin.0);
        self.append(Syntax::Structure, "(");
        for (i, argument) in call
            .arguments
            .iter()
            .enumerate()
        {
            if i > 0 {
                self.append(Syntax::Structure, ", ");
            }
            match argument {
                Argument::Expression(expression) => self.append_expression(expression)?,
                Argument::Keyword(keyword) => {
                    self.append(Syntax::Identifier, &keyword.identifier.0);
                    self.append(Syntax::Operator, " = ");
                    self.append_pattern(&keyword.value)?;
                }
            }
        }
        self.append(Syntax::Structure, ")");
        Ok(())
    }

    fn append_member_list(&mut self, list: &MemberList) -> Result<(), SerializeError> {
        self.writer
            .increase_indent();
        for member in list.members() {
            self.writer
                .newline();
            self.writer
                .write_indent();
            self.append_member(member)?;
        }
        self.writer
            .decrease_indent()
    }

    fn append_member(&mut self, member: &Member) -> Result<(), SerializeError> {
        if member.is_default {
            self.append(Syntax::Operator, "*");
        }
        self.append(Syntax::Structure, "[");
        match &member.key {
            MemberKey::Identifier(identifier) => self.append(Syntax::Keyword, &identifier.0),
            MemberKey::Attribute(attribute) => {
                self.append(Syntax::Identifier, &attribute.identifier.0);
                self.append(Syntax::Structure, "/");
                self.append(Syntax::Keyword, &attribute.keyword.0);
            }
            MemberKey::Number(number) => self.append_number(number),
        }
        self.append(Syntax::Structure, "]");
        self.append_leading_pattern(&member.pattern)
    }
}
