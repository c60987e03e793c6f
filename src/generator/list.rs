//! Linked-list-family step generator
//!
//! The list is modeled as an ordered node sequence; the pointer relation
//! between consecutive nodes is derived per step (see
//! [`Step::list`](crate::step::Step::list)), so the renderer can draw link
//! arrows without recomputing structure.
//!
//! Unlike the array family, insert clamps out-of-range positions instead of
//! rejecting them: negative or zero means the front, anything past the end
//! appends. The asymmetry matches the observed behavior of existing scripts
//! and is pinned by tests.

use crate::parser::ast::{OpKind, Operation};
use crate::step::{Highlight, HighlightKind, Step, StepTag};

/// Generate the step sequence for an operation list.
pub fn generate(operations: &[Operation]) -> Vec<Step> {
    let mut nodes: Vec<i64> = Vec::new();
    let mut steps = Vec::new();

    steps.push(Step::list(
        StepTag::Initial,
        &nodes,
        Vec::new(),
        "Initial state: empty list".to_string(),
    ));

    for op in operations {
        match op.kind {
            OpKind::Create => create(&mut nodes, op, &mut steps),
            OpKind::Insert => insert(&mut nodes, op, &mut steps),
            OpKind::Delete => delete(&mut nodes, op, &mut steps),
            OpKind::Reverse => reverse(&mut nodes, &mut steps),
            // Array-only operations, skipped by this family
            OpKind::Update
            | OpKind::Swap
            | OpKind::BubbleSort
            | OpKind::LinearSearch
            | OpKind::BinarySearch => {}
        }
    }

    steps
}

fn create(nodes: &mut Vec<i64>, op: &Operation, steps: &mut Vec<Step>) {
    *nodes = op.values();

    let highlights = (0..nodes.len())
        .map(|i| Highlight::new(i, HighlightKind::Created))
        .collect();

    steps.push(Step::list(
        StepTag::Create,
        nodes,
        highlights,
        format!("Created linked list with {} nodes", nodes.len()),
    ));
}

fn insert(nodes: &mut Vec<i64>, op: &Operation, steps: &mut Vec<Step>) {
    let (Some(index), Some(value)) = (op.num(0), op.num(1)) else {
        return;
    };

    // Clamp, never reject: front at <= 0, append past the end
    let position = (index.max(0) as usize).min(nodes.len());

    nodes.insert(position, value);

    let place = if position == 0 {
        "at the head".to_string()
    } else if position == nodes.len() - 1 {
        "at the tail".to_string()
    } else {
        format!("at position {}", position)
    };

    steps.push(Step::list(
        StepTag::Insert,
        nodes,
        vec![Highlight::new(position, HighlightKind::Inserted)],
        format!("Inserted node {} {}", value, place),
    ));
}

fn delete(nodes: &mut Vec<i64>, op: &Operation, steps: &mut Vec<Step>) {
    let Some(index) = op.index(0) else {
        return;
    };

    if index >= nodes.len() {
        return;
    }

    let value = nodes[index];

    steps.push(Step::list(
        StepTag::PreDelete,
        nodes,
        vec![Highlight::new(index, HighlightKind::Removed)],
        format!("Deleting node {} at position {}", value, index),
    ));

    nodes.remove(index);

    steps.push(Step::list(
        StepTag::Delete,
        nodes,
        Vec::new(),
        format!("Deleted node at position {}", index),
    ));
}

fn reverse(nodes: &mut [i64], steps: &mut Vec<Step>) {
    steps.push(Step::list(
        StepTag::ReverseStart,
        nodes,
        Vec::new(),
        "Reversing the list".to_string(),
    ));

    nodes.reverse();

    let highlights = (0..nodes.len())
        .map(|i| Highlight::new(i, HighlightKind::Reversed))
        .collect();

    steps.push(Step::list(
        StepTag::ReverseComplete,
        nodes,
        highlights,
        "List reversed".to_string(),
    ));
}
