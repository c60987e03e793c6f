// Operation definitions for the mini-language

use std::fmt;

/// Source location information for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    pub line: usize,
    pub column: usize,
}

impl SourceLocation {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// The closed operation vocabulary.
///
/// Every recognized statement in a script maps to exactly one of these kinds;
/// the generators match on them exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Create,
    Insert,
    Delete,
    Update,
    Swap,
    BubbleSort,
    LinearSearch,
    BinarySearch,
    Reverse,
}

impl fmt::Display for OpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OpKind::Create => "create",
            OpKind::Insert => "insert",
            OpKind::Delete => "delete",
            OpKind::Update => "update",
            OpKind::Swap => "swap",
            OpKind::BubbleSort => "bubbleSort",
            OpKind::LinearSearch => "linearSearch",
            OpKind::BinarySearch => "binarySearch",
            OpKind::Reverse => "reverse",
        };
        write!(f, "{}", name)
    }
}

/// Map a call name to its operation kind.
///
/// This table is the full callable surface of the mini-language. Unknown
/// names are not an error — the parser drops those calls so that unrelated
/// helper calls in pasted code do not break visualization.
pub fn call_kind(name: &str) -> Option<OpKind> {
    match name {
        "insertAt" => Some(OpKind::Insert),
        "deleteAt" => Some(OpKind::Delete),
        "updateAt" => Some(OpKind::Update),
        "swap" => Some(OpKind::Swap),
        "bubbleSort" => Some(OpKind::BubbleSort),
        "linearSearch" => Some(OpKind::LinearSearch),
        "binarySearch" => Some(OpKind::BinarySearch),
        "createLinkedList" => Some(OpKind::Create),
        "insertNode" => Some(OpKind::Insert),
        "deleteNode" => Some(OpKind::Delete),
        "reverse" => Some(OpKind::Reverse),
        _ => None,
    }
}

/// One literal argument as written in the source.
///
/// No expression evaluation happens anywhere: a number literal stays a
/// number, a list literal stays a list, and anything else (an identifier,
/// say) is captured as [`Arg::Missing`] so the generators treat it as
/// "argument not supplied" rather than inventing a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Arg {
    Num(i64),
    List(Vec<i64>),
    Missing,
}

/// One parsed instruction: an operation kind plus its literal arguments in
/// source order. Produced once per parse pass and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Operation {
    pub kind: OpKind,
    pub args: Vec<Arg>,
}

impl Operation {
    pub fn new(kind: OpKind, args: Vec<Arg>) -> Self {
        Self { kind, args }
    }

    /// Numeric argument at position `i`, if one was supplied.
    pub fn num(&self, i: usize) -> Option<i64> {
        match self.args.get(i) {
            Some(Arg::Num(n)) => Some(*n),
            _ => None,
        }
    }

    /// Numeric argument at position `i` as a non-negative index.
    ///
    /// Negative numbers yield `None`; the array generator treats that the
    /// same as out-of-range (no-op).
    pub fn index(&self, i: usize) -> Option<usize> {
        match self.num(i) {
            Some(n) if n >= 0 => Some(n as usize),
            _ => None,
        }
    }

    /// All numeric values across the arguments, flattening list literals.
    ///
    /// `create` accepts both shapes: a single list literal
    /// (`createLinkedList([1, 2, 3])`) or bare values
    /// (`createLinkedList(1, 2, 3)`).
    pub fn values(&self) -> Vec<i64> {
        let mut values = Vec::new();
        for arg in &self.args {
            match arg {
                Arg::Num(n) => values.push(*n),
                Arg::List(list) => values.extend_from_slice(list),
                Arg::Missing => {}
            }
        }
        values
    }
}
