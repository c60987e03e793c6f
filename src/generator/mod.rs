//! Step generators — one per data-structure family
//!
//! A generator replays a parsed operation list against a private working
//! structure and emits one immutable [`Step`](crate::step::Step) per
//! semantically meaningful sub-event. Generation is deterministic and pure:
//! the same operation list always yields the same step sequence.
//!
//! Several families deliberately share the array generator — a stack, a
//! queue, a sorting demo, and a searching demo are all rendered as an
//! index-addressed sequence, so they share representation and replay logic.

pub mod array;
pub mod list;

use crate::parser::ast::Operation;
use crate::step::Step;

/// Signature shared by every family generator.
pub type GenerateFn = fn(&[Operation]) -> Vec<Step>;

/// Data-structure family selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    Array,
    Stack,
    Queue,
    Sorting,
    Searching,
    LinkedList,
}

impl Family {
    /// Parse a family name as given on the command line or by a selector.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "array" => Some(Family::Array),
            "stack" => Some(Family::Stack),
            "queue" => Some(Family::Queue),
            "sorting" => Some(Family::Sorting),
            "searching" => Some(Family::Searching),
            "linked-list" | "linkedlist" | "list" => Some(Family::LinkedList),
            _ => None,
        }
    }

    /// Human-readable label for titles and status lines.
    pub fn label(&self) -> &'static str {
        match self {
            Family::Array => "Array",
            Family::Stack => "Stack",
            Family::Queue => "Queue",
            Family::Sorting => "Sorting",
            Family::Searching => "Searching",
            Family::LinkedList => "Linked List",
        }
    }

    /// The capability table: each family tag maps to a generate function.
    /// The families share no state, only this signature.
    pub fn generator(&self) -> GenerateFn {
        match self {
            Family::LinkedList => list::generate,
            // Shared array representation
            Family::Array | Family::Stack | Family::Queue | Family::Sorting
            | Family::Searching => array::generate,
        }
    }
}

/// Replay `operations` with the generator selected by `family`.
pub fn generate_steps(family: Family, operations: &[Operation]) -> Vec<Step> {
    (family.generator())(operations)
}

/// Format a value sequence for step descriptions: `[5, 2, 8]`
pub(crate) fn fmt_values(values: &[i64]) -> String {
    let inner: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", inner.join(", "))
}
