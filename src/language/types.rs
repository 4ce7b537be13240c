//! Types representing an Abstract Syntax Tree for FTL documents

use serde::Serialize;

/// The root of a parsed document: the top-level entries in source order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Body {
    pub entries: Vec<Entry>,
}

impl Body {
    /// Iterate over the messages only, skipping sections and comments. This
    /// is what runtime lookup wants regardless of the mode used to parse.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Message(message) => Some(message),
                _ => None,
            })
    }

    pub fn message(&self, identifier: &str) -> Option<&Message> {
        self.messages()
            .find(|message| {
                message
                    .identifier
                    .0
                    == identifier
            })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Entry {
    Message(Message),
    Section(Section),
    Comment(Comment),
}

/// Raw identifier, keyword or builtin text.
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct Identifier(pub String);

impl Identifier {
    pub fn new(text: impl Into<String>) -> Identifier {
        Identifier(text.into())
    }
}

/// A numeric literal. Only the parsed value is kept; it is written back in
/// its shortest decimal form.
#[derive(Debug, PartialEq, Clone, Copy, Serialize)]
pub struct Number(pub f64);

// message values

/// The content of a message. A message always has a pattern, a member list,
/// or both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Value {
    Pattern(Pattern),
    Members(MemberList),
    Both(Pattern, MemberList),
}

impl Value {
    pub fn from_parts(pattern: Option<Pattern>, members: Option<MemberList>) -> Option<Value> {
        match (pattern, members) {
            (Some(pattern), Some(members)) => Some(Value::Both(pattern, members)),
            (Some(pattern), None) => Some(Value::Pattern(pattern)),
            (None, Some(members)) => Some(Value::Members(members)),
            (None, None) => None,
        }
    }

    pub fn pattern(&self) -> Option<&Pattern> {
        match self {
            Value::Pattern(pattern) | Value::Both(pattern, _) => Some(pattern),
            Value::Members(_) => None,
        }
    }

    pub fn members(&self) -> Option<&MemberList> {
        match self {
            Value::Members(members) | Value::Both(_, members) => Some(members),
            Value::Pattern(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub identifier: Identifier,
    pub value: Value,
    pub comment: Option<Comment>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub keyword: Identifier,
    pub comment: Option<Comment>,
}

/// One or more consecutive comment lines. Each line is the text following
/// the `#`, verbatim.
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct Comment {
    lines: Vec<String>,
}

impl Comment {
    pub fn new(line: impl Into<String>) -> Comment {
        Comment {
            lines: vec![line.into()],
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Append the lines of a comment immediately following this one.
    pub fn merge(mut self, other: Comment) -> Comment {
        self.lines
            .extend(other.lines);
        self
    }
}

// patterns

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pattern {
    pub quoted: bool,
    pub elements: Vec<Element>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Element {
    /// Unquoted text, escapes kept as written.
    Text(String),
    /// Text inside a quoted pattern, escapes kept as written.
    QuotedText(String),
    Placeable(Placeable),
    Block(BlockText),
}

/// Consecutive `| ...` continuation lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockText {
    pub lines: Vec<Vec<Element>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Placeable {
    pub expressions: Vec<Expression>,
}

// expressions

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expression {
    /// A bare identifier referring to another message.
    Reference(Identifier),
    Variable(Identifier),
    Member(MemberExpression),
    Call(CallExpression),
    Number(Number),
    Pattern(Pattern),
    Select(SelectExpression),
}

/// `identifier[keyword]`
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct MemberExpression {
    pub identifier: Identifier,
    pub keyword: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallExpression {
    pub builtin: Identifier,
    pub arguments: Vec<Argument>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Argument {
    Expression(Expression),
    Keyword(KeywordArgument),
}

/// `identifier = "quoted pattern"` inside a call's argument list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KeywordArgument {
    pub identifier: Identifier,
    pub value: Pattern,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SelectExpression {
    pub selector: Box<Expression>,
    pub members: MemberList,
}

// members

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum MemberKey {
    Identifier(Identifier),
    Attribute(Attribute),
    Number(Number),
}

/// Composite `identifier/keyword` member key.
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct Attribute {
    pub identifier: Identifier,
    pub keyword: Identifier,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Member {
    pub key: MemberKey,
    pub pattern: Pattern,
    pub is_default: bool,
}

/// A non-empty list of members.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberList {
    members: Vec<Member>,
}

impl MemberList {
    pub fn new(first: Member) -> MemberList {
        MemberList {
            members: vec![first],
        }
    }

    pub fn push(&mut self, member: Member) {
        self.members
            .push(member);
    }

    pub fn members(&self) -> &[Member] {
        &self.members
    }

    pub fn default_member(&self) -> Option<&Member> {
        self.members
            .iter()
            .find(|member| member.is_default)
    }
}
