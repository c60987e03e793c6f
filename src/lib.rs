//! # Introduction
//!
//! dsviz parses a tiny pseudo-code mini-language describing operations on a
//! data structure (array, stack, queue, linked list, ...) and replays those
//! operations to produce an immutable step history, navigated forward and
//! backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Parser → Operation[] → Step Generator → Step[] → TUI
//! ```
//!
//! 1. [`parser`] — tokenises the source and extracts the flat operation list.
//! 2. [`generator`] — replays the operations against a family-specific
//!    working structure, emitting one [`step::Step`] per sub-event
//!    (comparison, swap, probe, insertion, ...).
//! 3. [`step`] — immutable step snapshots plus the [`step::Playback`] cursor
//!    the UI navigates.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported mini-language
//!
//! Literal-list declarations (`let arr = [5, 2, 8];`) and a closed call
//! vocabulary: `insertAt`, `deleteAt`, `updateAt`, `swap`, `bubbleSort`,
//! `linearSearch`, `binarySearch`, `createLinkedList`, `insertNode`,
//! `deleteNode`, `reverse`. No expressions, no control flow.

pub mod generator;
pub mod parser;
pub mod step;
pub mod ui;

use generator::Family;
use parser::parser::{ParseError, Parser};
use step::Step;

/// Run the full pipeline for one `(source, family)` pair.
///
/// One batch pass: parse, then generate. On a syntax error no steps are
/// produced; empty or comment-only source yields the lone `initial` step.
pub fn build_steps(source: &str, family: Family) -> Result<Vec<Step>, ParseError> {
    let mut parser = Parser::new(source)?;
    let operations = parser.parse_operations()?;
    Ok(generator::generate_steps(family, &operations))
}
