// Integration tests for the parse → generate pipeline

use dsviz::build_steps;
use dsviz::generator::Family;
use dsviz::parser::parser::Parser;
use dsviz::step::{HighlightKind, Step, StepTag};

fn steps_for(source: &str, family: Family) -> Vec<Step> {
    build_steps(source, family).expect("Pipeline failed")
}

fn count_tag(steps: &[Step], tag: StepTag) -> usize {
    steps.iter().filter(|s| s.tag == tag).count()
}

#[test]
fn test_initial_step_invariant() {
    for family in [Family::Array, Family::LinkedList] {
        let steps = steps_for("", family);

        assert_eq!(steps.len(), 1);
        assert_eq!(steps[0].tag, StepTag::Initial);
        assert!(steps[0].values.is_empty());
        assert!(steps[0].highlights.is_empty());
    }
}

#[test]
fn test_comment_only_source_is_not_an_error() {
    let steps = steps_for("// write your pseudo-code here\n", Family::Array);

    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].tag, StepTag::Initial);
}

#[test]
fn test_create_highlights_every_index() {
    let steps = steps_for("let arr = [4, 7, 1];", Family::Array);

    assert_eq!(steps.len(), 2);
    assert_eq!(steps[1].tag, StepTag::Create);
    assert_eq!(steps[1].values, vec![4, 7, 1]);
    assert_eq!(steps[1].highlights.len(), 3);
}

#[test]
fn test_bubble_sort_final_array() {
    let steps = steps_for("let arr = [5, 2, 8, 1, 9];\nbubbleSort();", Family::Sorting);

    let last = steps.last().unwrap();
    assert_eq!(last.values, vec![1, 2, 5, 8, 9]);
}

#[test]
fn test_bubble_sort_sorts_snapshot_before_first_compare() {
    let steps = steps_for("let arr = [3, 1, 2];\nbubbleSort();", Family::Sorting);

    let first_compare = steps.iter().position(|s| s.tag == StepTag::Compare).unwrap();
    let before: Vec<i64> = steps[first_compare - 1].values.clone();

    let mut expected = before;
    expected.sort_unstable();
    assert_eq!(steps.last().unwrap().values, expected);
}

#[test]
fn test_bubble_sort_comparison_count() {
    // Classic n-1 / n-i-1 bounds, no early exit: always n*(n-1)/2 comparisons
    let steps = steps_for("let arr = [1, 2, 3, 4];\nbubbleSort();", Family::Sorting);

    assert_eq!(count_tag(&steps, StepTag::Compare), 6);
    assert_eq!(count_tag(&steps, StepTag::Swap), 0);
}

#[test]
fn test_linear_search_found() {
    let steps = steps_for(
        "let arr = [1, 3, 5, 7, 9];\nlinearSearch(7);",
        Family::Searching,
    );

    assert_eq!(count_tag(&steps, StepTag::Found), 1);
    assert_eq!(count_tag(&steps, StepTag::NotFound), 0);
    // One probe per index before the match, none at the match itself
    assert_eq!(count_tag(&steps, StepTag::SearchCheck), 3);

    let found = steps.iter().find(|s| s.tag == StepTag::Found).unwrap();
    assert_eq!(found.highlights.len(), 1);
    assert_eq!(found.highlights[0].index, 3);
    assert_eq!(found.highlights[0].kind, HighlightKind::Found);
}

#[test]
fn test_linear_search_not_found() {
    let steps = steps_for(
        "let arr = [1, 3, 5];\nlinearSearch(4);",
        Family::Searching,
    );

    assert_eq!(count_tag(&steps, StepTag::SearchCheck), 3);
    assert_eq!(count_tag(&steps, StepTag::Found), 0);
    assert_eq!(count_tag(&steps, StepTag::NotFound), 1);

    let not_found = steps.iter().find(|s| s.tag == StepTag::NotFound).unwrap();
    assert!(not_found.highlights.is_empty());
}

#[test]
fn test_binary_search_found_within_log_steps() {
    let steps = steps_for(
        "let arr = [1, 3, 5, 7, 9];\nbinarySearch(9);",
        Family::Searching,
    );

    // ceil(log2(5)) = 3 checks at most
    assert!(count_tag(&steps, StepTag::BinarySearchCheck) <= 3);
    assert_eq!(count_tag(&steps, StepTag::Found), 1);

    let found = steps.iter().find(|s| s.tag == StepTag::Found).unwrap();
    assert_eq!(found.highlights[0].index, 4);
}

#[test]
fn test_binary_search_shows_sorted_copy() {
    let steps = steps_for(
        "let arr = [9, 1, 5, 3, 7];\nbinarySearch(3);",
        Family::Searching,
    );

    for step in steps.iter().filter(|s| {
        matches!(
            s.tag,
            StepTag::BinarySearchStart | StepTag::BinarySearchCheck | StepTag::Found
        )
    }) {
        let mut sorted = step.values.clone();
        sorted.sort_unstable();
        assert_eq!(step.values, sorted, "binary search step must show a sorted array");
    }
}

#[test]
fn test_binary_search_does_not_mutate_working_array() {
    let steps = steps_for(
        "let arr = [9, 1, 5];\nbinarySearch(5);\ninsertAt(0, 4);",
        Family::Array,
    );

    // The insert after the search still sees the original, unsorted order
    let insert = steps.iter().find(|s| s.tag == StepTag::Insert).unwrap();
    assert_eq!(insert.values, vec![4, 9, 1, 5]);
}

#[test]
fn test_binary_search_check_highlights_range_and_midpoint() {
    let steps = steps_for(
        "let arr = [1, 3, 5, 7, 9];\nbinarySearch(9);",
        Family::Searching,
    );

    let first_check = steps
        .iter()
        .find(|s| s.tag == StepTag::BinarySearchCheck)
        .unwrap();

    // First iteration covers the full range with one distinct midpoint
    assert_eq!(first_check.highlights.len(), 5);
    let mids: Vec<_> = first_check
        .highlights
        .iter()
        .filter(|h| h.kind == HighlightKind::Midpoint)
        .collect();
    assert_eq!(mids.len(), 1);
    assert_eq!(mids[0].index, 2);
}

#[test]
fn test_binary_search_not_found_on_empty_array() {
    let steps = steps_for("binarySearch(5);", Family::Searching);

    assert_eq!(count_tag(&steps, StepTag::BinarySearchCheck), 0);
    assert_eq!(count_tag(&steps, StepTag::NotFound), 1);
}

#[test]
fn test_search_found_not_found_exclusivity() {
    for target in 0..12 {
        let source = format!("let arr = [2, 4, 6, 8, 10];\nlinearSearch({});", target);
        let steps = steps_for(&source, Family::Searching);

        let total = count_tag(&steps, StepTag::Found) + count_tag(&steps, StepTag::NotFound);
        assert_eq!(total, 1, "exactly one terminal step for target {}", target);
    }
}

#[test]
fn test_insert_out_of_range_is_a_no_op() {
    let steps = steps_for(
        "let arr = [1, 2, 3, 4, 5];\ninsertAt(10, 99);\nswap(0, 1);",
        Family::Array,
    );

    // create + pre-swap + swap after the initial step; nothing for the insert
    assert_eq!(count_tag(&steps, StepTag::Insert), 0);
    assert_eq!(count_tag(&steps, StepTag::Swap), 1);
    assert_eq!(steps.last().unwrap().values, vec![2, 1, 3, 4, 5]);
}

#[test]
fn test_insert_at_length_appends() {
    let steps = steps_for("let arr = [1, 2];\ninsertAt(2, 3);", Family::Array);

    assert_eq!(steps.last().unwrap().values, vec![1, 2, 3]);
}

#[test]
fn test_delete_emits_pre_and_post_steps() {
    let steps = steps_for("let arr = [7, 8, 9];\ndeleteAt(1);", Family::Array);

    let pre = steps.iter().find(|s| s.tag == StepTag::PreDelete).unwrap();
    assert_eq!(pre.values, vec![7, 8, 9]);
    assert_eq!(pre.highlights[0].index, 1);

    let post = steps.iter().find(|s| s.tag == StepTag::Delete).unwrap();
    assert_eq!(post.values, vec![7, 9]);
    assert!(post.highlights.is_empty());
}

#[test]
fn test_update_length_conservation() {
    let steps = steps_for("let arr = [7, 8, 9];\nupdateAt(2, 42);", Family::Array);

    let pre = steps.iter().find(|s| s.tag == StepTag::PreUpdate).unwrap();
    let post = steps.iter().find(|s| s.tag == StepTag::Update).unwrap();

    assert_eq!(pre.values.len(), post.values.len());
    assert_eq!(pre.values, vec![7, 8, 9]);
    assert_eq!(post.values, vec![7, 8, 42]);
}

#[test]
fn test_swap_length_conservation() {
    let steps = steps_for("let arr = [1, 2, 3];\nswap(0, 2);", Family::Array);

    let pre = steps.iter().find(|s| s.tag == StepTag::PreSwap).unwrap();
    let post = steps.iter().find(|s| s.tag == StepTag::Swap).unwrap();

    assert_eq!(pre.values, vec![1, 2, 3]);
    assert_eq!(post.values, vec![3, 2, 1]);
    assert_eq!(pre.highlights.len(), 2);
    assert_eq!(post.highlights.len(), 2);
}

#[test]
fn test_missing_argument_skips_operation() {
    let steps = steps_for(
        "let arr = [1, 2, 3];\ninsertAt(idx, 99);\ndeleteAt(0);",
        Family::Array,
    );

    assert_eq!(count_tag(&steps, StepTag::Insert), 0);
    // The malformed operation never aborts the sequence
    assert_eq!(count_tag(&steps, StepTag::Delete), 1);
}

#[test]
fn test_unknown_call_contributes_nothing() {
    let steps = steps_for(
        "let arr = [1, 2];\nconsoleLog(arr);\nswap(0, 1);",
        Family::Array,
    );

    assert_eq!(steps.last().unwrap().values, vec![2, 1]);
}

#[test]
fn test_steps_are_independent_snapshots() {
    let steps = steps_for(
        "let arr = [1, 2, 3];\nupdateAt(0, 99);\ndeleteAt(2);",
        Family::Array,
    );

    // Earlier steps must not reflect later mutation
    let create = steps.iter().find(|s| s.tag == StepTag::Create).unwrap();
    assert_eq!(create.values, vec![1, 2, 3]);

    let update = steps.iter().find(|s| s.tag == StepTag::Update).unwrap();
    assert_eq!(update.values, vec![99, 2, 3]);

    assert_eq!(steps.last().unwrap().values, vec![99, 2]);
}

#[test]
fn test_determinism() {
    let source = "let arr = [5, 2, 8];\nbubbleSort();\nlinearSearch(8);";

    let first = steps_for(source, Family::Array);
    let second = steps_for(source, Family::Array);
    assert_eq!(first, second);

    let ops_a = Parser::new(source).unwrap().parse_operations().unwrap();
    let ops_b = Parser::new(source).unwrap().parse_operations().unwrap();
    assert_eq!(ops_a, ops_b);
}

#[test]
fn test_parse_failure_produces_no_steps() {
    let result = build_steps("let arr = [1, 2;\nswap(0, 1);", Family::Array);

    let err = result.unwrap_err();
    assert_eq!(err.location.line, 1);
    assert!(!err.message.is_empty());
}

// === LINKED LIST TESTS ===

#[test]
fn test_list_create_carries_links() {
    let steps = steps_for("createLinkedList([1, 2, 3]);", Family::LinkedList);

    let create = steps.iter().find(|s| s.tag == StepTag::Create).unwrap();
    assert_eq!(create.values, vec![1, 2, 3]);
    assert_eq!(create.links.len(), 2);
    assert_eq!((create.links[0].from, create.links[0].to), (0, 1));
    assert_eq!((create.links[1].from, create.links[1].to), (1, 2));
}

#[test]
fn test_list_reverse() {
    let steps = steps_for("createLinkedList([1, 2, 3]);\nreverse();", Family::LinkedList);

    let start = steps.iter().find(|s| s.tag == StepTag::ReverseStart).unwrap();
    assert_eq!(start.values, vec![1, 2, 3]);

    let last = steps.last().unwrap();
    assert_eq!(last.tag, StepTag::ReverseComplete);
    assert_eq!(last.values, vec![3, 2, 1]);
    assert_eq!(last.links.len(), 2);
    assert_eq!((last.links[0].from, last.links[0].to), (0, 1));
    assert_eq!((last.links[1].from, last.links[1].to), (1, 2));
    assert_eq!(last.highlights.len(), 3);
}

#[test]
fn test_list_insert_clamps_past_end() {
    // Unlike the array family, a too-large index appends instead of no-oping
    let steps = steps_for(
        "createLinkedList([1, 2, 3]);\ninsertNode(99, 7);",
        Family::LinkedList,
    );

    let insert = steps.iter().find(|s| s.tag == StepTag::Insert).unwrap();
    assert_eq!(insert.values, vec![1, 2, 3, 7]);
    assert_eq!(insert.highlights[0].index, 3);
}

#[test]
fn test_list_insert_clamps_negative_to_head() {
    let steps = steps_for(
        "createLinkedList([1, 2]);\ninsertNode(-4, 7);",
        Family::LinkedList,
    );

    let insert = steps.iter().find(|s| s.tag == StepTag::Insert).unwrap();
    assert_eq!(insert.values, vec![7, 1, 2]);
    assert_eq!(insert.highlights[0].index, 0);
}

#[test]
fn test_list_insert_in_middle() {
    let steps = steps_for(
        "createLinkedList([1, 3]);\ninsertNode(1, 2);",
        Family::LinkedList,
    );

    let insert = steps.iter().find(|s| s.tag == StepTag::Insert).unwrap();
    assert_eq!(insert.values, vec![1, 2, 3]);
    assert_eq!(insert.highlights[0].index, 1);
    assert_eq!(insert.links.len(), 2);
}

#[test]
fn test_list_delete() {
    let steps = steps_for(
        "createLinkedList([5, 6, 7]);\ndeleteNode(1);",
        Family::LinkedList,
    );

    let pre = steps.iter().find(|s| s.tag == StepTag::PreDelete).unwrap();
    assert_eq!(pre.values, vec![5, 6, 7]);
    assert!(pre.description.contains('6'));

    let post = steps.iter().find(|s| s.tag == StepTag::Delete).unwrap();
    assert_eq!(post.values, vec![5, 7]);
    assert_eq!(post.links.len(), 1);
}

#[test]
fn test_list_delete_out_of_range_is_a_no_op() {
    let steps = steps_for(
        "createLinkedList([5, 6]);\ndeleteNode(9);\nreverse();",
        Family::LinkedList,
    );

    assert_eq!(count_tag(&steps, StepTag::PreDelete), 0);
    assert_eq!(steps.last().unwrap().values, vec![6, 5]);
}

#[test]
fn test_list_skips_array_only_operations() {
    let steps = steps_for(
        "createLinkedList([2, 1]);\nbubbleSort();\nswap(0, 1);",
        Family::LinkedList,
    );

    assert_eq!(count_tag(&steps, StepTag::Compare), 0);
    assert_eq!(count_tag(&steps, StepTag::Swap), 0);
    assert_eq!(steps.last().unwrap().values, vec![2, 1]);
}

#[test]
fn test_array_skips_reverse() {
    let steps = steps_for("let arr = [1, 2, 3];\nreverse();", Family::Array);

    assert_eq!(count_tag(&steps, StepTag::ReverseStart), 0);
    assert_eq!(steps.last().unwrap().values, vec![1, 2, 3]);
}

#[test]
fn test_family_aliases_share_array_generator() {
    let source = "let arr = [3, 1];\nbubbleSort();";

    let reference = steps_for(source, Family::Array);
    for family in [Family::Stack, Family::Queue, Family::Sorting, Family::Searching] {
        assert_eq!(steps_for(source, family), reference);
    }
}
