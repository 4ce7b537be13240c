//! Folding parsed entries into a Body.
//!
//! A comment is held back until we know what follows it. Consecutive
//! comments merge into one; a comment directly above a message or section
//! is attached to that entry. A comment left over at the end of input
//! becomes an entry of its own.

use crate::language::*;

/// What the entry rule produced. In Partial mode comments and sections are
/// consumed without building anything.
#[derive(Debug, PartialEq)]
pub enum Scanned {
    Entry(Entry),
    Discarded,
}

#[derive(Debug, Default)]
pub struct Assembler {
    entries: Vec<Entry>,
    pending: Option<Comment>,
}

impl Assembler {
    pub fn new() -> Assembler {
        Assembler::default()
    }

    pub fn push(&mut self, scanned: Scanned) {
        let entry = match scanned {
            Scanned::Entry(entry) => entry,
            Scanned::Discarded => return,
        };

        match entry {
            Entry::Comment(comment) => {
                let merged = match self
                    .pending
                    .take()
                {
                    Some(previous) => previous.merge(comment),
                    None => comment,
                };
                self.pending = Some(merged);
            }
            Entry::Message(mut message) => {
                message.comment = self
                    .pending
                    .take();
                self.entries
                    .push(Entry::Message(message));
            }
            Entry::Section(mut section) => {
                section.comment = self
                    .pending
                    .take();
                self.entries
                    .push(Entry::Section(section));
            }
        }
    }

    pub fn finish(mut self) -> Body {
        if let Some(comment) = self
            .pending
            .take()
        {
            self.entries
                .push(Entry::Comment(comment));
        }

        Body {
            entries: self.entries,
        }
    }
}
