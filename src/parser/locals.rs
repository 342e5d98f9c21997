//! The per-function local-variable symbol table.
//!
//! Reset to empty on function entry. Conceptually a singly linked list with
//! the most recently declared variable at the head and linear, first-match
//! lookup; a `Vec` searched from the back gives the same observable
//! behavior without the indirection.

use crate::ast::Local;

pub(super) struct Locals {
    vars: Vec<Local>,
}

impl Locals {
    pub(super) fn new() -> Self {
        Locals { vars: Vec::new() }
    }

    pub(super) fn find(&self, name: &str) -> Option<i64> {
        self.vars.iter().rev().find(|l| l.name == name).map(|l| l.offset)
    }

    /// Unconditionally creates a new slot, 8 bytes past the previous head
    /// offset (or 8 if this is the first local). Used for parameters, which
    /// are always fresh.
    pub(super) fn declare_new(&mut self, name: String) -> i64 {
        let offset = self.vars.last().map(|l| l.offset + 8).unwrap_or(8);
        self.vars.push(Local { name, offset });
        offset
    }

    /// Returns the existing slot for `name`, or declares a new one — this is
    /// the implicit-first-use declaration policy.
    pub(super) fn find_or_declare(&mut self, name: String) -> i64 {
        match self.find(&name) {
            Some(offset) => offset,
            None => self.declare_new(name),
        }
    }

    pub(super) fn stack_size(&self) -> i64 {
        self.vars.iter().map(|l| l.offset).max().unwrap_or(0)
    }
}
