//! Mini-language source parser
//!
//! This module transforms pseudo-code source text into a flat operation list:
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parser`]: Parsing (tokens → operations)
//! - [`ast`]: Operation and argument definitions
//!
//! # The mini-language
//!
//! The grammar is deliberately tiny — a script is a flat statement sequence:
//! - `let name = [1, 2, 3];` — literal-list variable declarations (the
//!   single "create" shape; `const`/`var` work too)
//! - `insertAt(1, 99);` — calls to the fixed operation vocabulary
//!   (`insertAt`, `deleteAt`, `updateAt`, `swap`, `bubbleSort`,
//!   `linearSearch`, `binarySearch`, `createLinkedList`, `insertNode`,
//!   `deleteNode`, `reverse`)
//! - No expressions, no control flow, no user-defined functions. Only
//!   literal arguments carry values; calls to unrecognized names are
//!   silently dropped.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, no external parser generator
//! dependencies. Syntax errors carry a 1-based line and column.

pub mod ast;
pub mod lexer;
pub mod parser;
