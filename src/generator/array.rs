//! Array-family step generator
//!
//! Replays operations against a private working array, starting empty. Every
//! emitted step carries a full copy of the array at that instant. Operations
//! with missing or out-of-range arguments are skipped without error: a
//! malformed single operation never aborts an otherwise-valid sequence.

use crate::generator::fmt_values;
use crate::parser::ast::{OpKind, Operation};
use crate::step::{Highlight, HighlightKind, Step, StepTag};

/// Generate the step sequence for an operation list.
pub fn generate(operations: &[Operation]) -> Vec<Step> {
    let mut arr: Vec<i64> = Vec::new();
    let mut steps = Vec::new();

    steps.push(Step::array(
        StepTag::Initial,
        &arr,
        Vec::new(),
        "Initial state: empty array".to_string(),
    ));

    for op in operations {
        match op.kind {
            OpKind::Create => create(&mut arr, op, &mut steps),
            OpKind::Insert => insert(&mut arr, op, &mut steps),
            OpKind::Delete => delete(&mut arr, op, &mut steps),
            OpKind::Update => update(&mut arr, op, &mut steps),
            OpKind::Swap => swap(&mut arr, op, &mut steps),
            OpKind::BubbleSort => bubble_sort(&mut arr, &mut steps),
            OpKind::LinearSearch => linear_search(&arr, op, &mut steps),
            OpKind::BinarySearch => binary_search(&arr, op, &mut steps),
            // List-only operation, skipped by this family
            OpKind::Reverse => {}
        }
    }

    steps
}

fn create(arr: &mut Vec<i64>, op: &Operation, steps: &mut Vec<Step>) {
    *arr = op.values();

    let highlights = (0..arr.len())
        .map(|i| Highlight::new(i, HighlightKind::Created))
        .collect();

    steps.push(Step::array(
        StepTag::Create,
        arr,
        highlights,
        format!("Created array {}", fmt_values(arr)),
    ));
}

fn insert(arr: &mut Vec<i64>, op: &Operation, steps: &mut Vec<Step>) {
    let (Some(index), Some(value)) = (op.index(0), op.num(1)) else {
        return;
    };

    // Inserting at index == len appends
    if index > arr.len() {
        return;
    }

    arr.insert(index, value);

    steps.push(Step::array(
        StepTag::Insert,
        arr,
        vec![Highlight::new(index, HighlightKind::Inserted)],
        format!("Inserted {} at index {}", value, index),
    ));
}

fn delete(arr: &mut Vec<i64>, op: &Operation, steps: &mut Vec<Step>) {
    let Some(index) = op.index(0) else {
        return;
    };

    if index >= arr.len() {
        return;
    }

    let value = arr[index];

    steps.push(Step::array(
        StepTag::PreDelete,
        arr,
        vec![Highlight::new(index, HighlightKind::Removed)],
        format!("Deleting {} at index {}", value, index),
    ));

    arr.remove(index);

    steps.push(Step::array(
        StepTag::Delete,
        arr,
        Vec::new(),
        format!("Deleted element at index {}", index),
    ));
}

fn update(arr: &mut [i64], op: &Operation, steps: &mut Vec<Step>) {
    let (Some(index), Some(value)) = (op.index(0), op.num(1)) else {
        return;
    };

    if index >= arr.len() {
        return;
    }

    steps.push(Step::array(
        StepTag::PreUpdate,
        arr,
        vec![Highlight::new(index, HighlightKind::Updated)],
        format!("Updating index {} from {} to {}", index, arr[index], value),
    ));

    arr[index] = value;

    steps.push(Step::array(
        StepTag::Update,
        arr,
        vec![Highlight::new(index, HighlightKind::Updated)],
        format!("Updated index {} to {}", index, value),
    ));
}

fn swap(arr: &mut [i64], op: &Operation, steps: &mut Vec<Step>) {
    let (Some(i), Some(j)) = (op.index(0), op.index(1)) else {
        return;
    };

    if i >= arr.len() || j >= arr.len() {
        return;
    }

    let highlights = vec![
        Highlight::new(i, HighlightKind::Swapped),
        Highlight::new(j, HighlightKind::Swapped),
    ];

    steps.push(Step::array(
        StepTag::PreSwap,
        arr,
        highlights.clone(),
        format!("Swapping index {} and index {}", i, j),
    ));

    arr.swap(i, j);

    steps.push(Step::array(
        StepTag::Swap,
        arr,
        highlights,
        format!("Swapped index {} and index {}", i, j),
    ));
}

/// Classic adjacent-comparison bubble sort, ascending, no early exit.
///
/// One `compare` step per adjacent pair visited; when the left element is
/// strictly greater the swap happens immediately and a `swap` step shows the
/// post-swap values.
fn bubble_sort(arr: &mut [i64], steps: &mut Vec<Step>) {
    let n = arr.len();

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - i - 1 {
            let highlights = vec![
                Highlight::new(j, HighlightKind::Compared),
                Highlight::new(j + 1, HighlightKind::Compared),
            ];

            steps.push(Step::array(
                StepTag::Compare,
                arr,
                highlights,
                format!(
                    "Comparing {} at index {} with {} at index {}",
                    arr[j],
                    j,
                    arr[j + 1],
                    j + 1
                ),
            ));

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);

                steps.push(Step::array(
                    StepTag::Swap,
                    arr,
                    vec![
                        Highlight::new(j, HighlightKind::Swapped),
                        Highlight::new(j + 1, HighlightKind::Swapped),
                    ],
                    format!("Swapped index {} and index {}", j, j + 1),
                ));
            }
        }
    }
}

/// Left-to-right scan. The probe step is skipped at the match index — a
/// single `found` step stands in for it and ends the scan.
fn linear_search(arr: &[i64], op: &Operation, steps: &mut Vec<Step>) {
    let Some(target) = op.num(0) else {
        return;
    };

    steps.push(Step::array(
        StepTag::SearchStart,
        arr,
        Vec::new(),
        format!("Searching for {}", target),
    ));

    for (i, &value) in arr.iter().enumerate() {
        if value == target {
            steps.push(Step::array(
                StepTag::Found,
                arr,
                vec![Highlight::new(i, HighlightKind::Found)],
                format!("Found {} at index {}", target, i),
            ));
            return;
        }

        steps.push(Step::array(
            StepTag::SearchCheck,
            arr,
            vec![Highlight::new(i, HighlightKind::Probed)],
            format!("Checking index {} (value {})", i, value),
        ));
    }

    steps.push(Step::array(
        StepTag::NotFound,
        arr,
        Vec::new(),
        format!("{} is not in the array", target),
    ));
}

/// Binary search over a sorted copy of the working array.
///
/// The working array itself is never mutated; every step of this operation
/// shows the sorted copy. Each iteration highlights the active `[low, high]`
/// range with the midpoint colored distinctly.
fn binary_search(arr: &[i64], op: &Operation, steps: &mut Vec<Step>) {
    let Some(target) = op.num(0) else {
        return;
    };

    let mut sorted = arr.to_vec();
    sorted.sort_unstable();

    steps.push(Step::array(
        StepTag::BinarySearchStart,
        &sorted,
        Vec::new(),
        format!("Binary search for {} (array sorted first)", target),
    ));

    let mut low: isize = 0;
    let mut high: isize = sorted.len() as isize - 1;

    while low <= high {
        let mid = (low + high) / 2;

        let highlights = (low..=high)
            .map(|k| {
                let kind = if k == mid {
                    HighlightKind::Midpoint
                } else {
                    HighlightKind::Range
                };
                Highlight::new(k as usize, kind)
            })
            .collect();

        steps.push(Step::array(
            StepTag::BinarySearchCheck,
            &sorted,
            highlights,
            format!(
                "Checking range [{}, {}], middle index {} (value {})",
                low, high, mid, sorted[mid as usize]
            ),
        ));

        if sorted[mid as usize] == target {
            steps.push(Step::array(
                StepTag::Found,
                &sorted,
                vec![Highlight::new(mid as usize, HighlightKind::Found)],
                format!("Found {} at index {}", target, mid),
            ));
            return;
        } else if sorted[mid as usize] < target {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    steps.push(Step::array(
        StepTag::NotFound,
        &sorted,
        Vec::new(),
        format!("{} is not in the array", target),
    ));
}
