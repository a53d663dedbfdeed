//! Integration tests for Container.
//!
//! Covers mutation, snapshot isolation and the named begin/end cursor pairs
//! for all six traversal orders.

use multiorder::container::Container;
use multiorder::error::{ContainerError, EmptyInputError, NotFoundError};
use multiorder::traversal::{Cursor, Order};
use rstest::rstest;

fn sample() -> Container {
    let mut container = Container::new();
    container.add(7);
    container.add(15);
    container.add(6);
    container.add(1);
    container.add(2);
    container
}

fn drain<T: Clone + PartialEq>(mut cursor: Cursor<T>, end: &Cursor<T>) -> Vec<T> {
    let mut seen = Vec::new();
    while &cursor != end {
        seen.push(cursor.get().unwrap().clone());
        cursor.advance().unwrap();
    }
    seen
}

// =============================================================================
// Mutation
// =============================================================================

#[rstest]
fn test_new_container_is_empty() {
    let container: Container = Container::new();
    assert!(container.is_empty());
    assert_eq!(container.size(), 0);
    assert_eq!(container.len(), 0);
}

#[rstest]
fn test_add_keeps_duplicates() {
    let mut container: Container = Container::new();
    container.add(3);
    container.add(3);
    assert_eq!(container.size(), 2);
    assert_eq!(container.as_slice(), &[3, 3]);
}

#[rstest]
fn test_remove_present_value_removes_all_occurrences() {
    let mut container: Container = [5, 1, 5, 2, 5].into_iter().collect();
    assert_eq!(container.remove(&5), Ok(3));
    assert_eq!(container.as_slice(), &[1, 2]);
    assert!(!container.contains(&5));
}

#[rstest]
fn test_remove_absent_value_fails_and_changes_nothing() {
    let mut container = sample();
    let before_ascending = container.traverse(Order::Ascending).unwrap();

    assert_eq!(container.remove(&42), Err(NotFoundError));

    assert_eq!(container.size(), 5);
    assert_eq!(container.as_slice(), &[7, 15, 6, 1, 2]);
    assert_eq!(container.traverse(Order::Ascending).unwrap(), before_ascending);
}

#[rstest]
fn test_remove_then_missing_remove_scenario() {
    let mut container = sample();
    container.remove(&6).unwrap();
    assert_eq!(container.traverse(Order::Insertion).unwrap(), vec![7, 15, 1, 2]);

    let error = container.remove(&42).unwrap_err();
    assert_eq!(error.to_string(), "Element not found in container.");
    assert_eq!(container.traverse(Order::Insertion).unwrap(), vec![7, 15, 1, 2]);
    assert_eq!(container.to_string(), "[7, 15, 1, 2]");
}

#[rstest]
fn test_remove_last_element_then_reverse_fails() {
    let mut container: Container = [9].into_iter().collect();
    container.remove(&9).unwrap();
    assert_eq!(
        container.begin_reverse_order(),
        Err(ContainerError::EmptyInput(EmptyInputError))
    );
}

#[rstest]
fn test_extend_appends_after_existing() {
    let mut container = sample();
    container.extend([100, 0]);
    assert_eq!(container.as_slice(), &[7, 15, 6, 1, 2, 100, 0]);
}

#[rstest]
fn test_clone_is_independent() {
    let original = sample();
    let mut copy = original.clone();
    copy.remove(&7).unwrap();
    assert_eq!(original.size(), 5);
    assert_eq!(copy.size(), 4);
    assert_ne!(original, copy);
}

// =============================================================================
// Traversal
// =============================================================================

#[rstest]
fn test_insertion_order_pair() {
    let container = sample();
    let values = drain(container.begin_order().unwrap(), &container.end_order().unwrap());
    assert_eq!(values, vec![7, 15, 6, 1, 2]);
}

#[rstest]
fn test_ascending_order_pair() {
    let container = sample();
    let values = drain(
        container.begin_ascending_order().unwrap(),
        &container.end_ascending_order().unwrap(),
    );
    assert_eq!(values, vec![1, 2, 6, 7, 15]);
}

#[rstest]
fn test_descending_order_pair() {
    let container = sample();
    let values = drain(
        container.begin_descending_order().unwrap(),
        &container.end_descending_order().unwrap(),
    );
    assert_eq!(values, vec![15, 7, 6, 2, 1]);
}

#[rstest]
fn test_reverse_order_pair() {
    let container = sample();
    let values = drain(
        container.begin_reverse_order().unwrap(),
        &container.end_reverse_order().unwrap(),
    );
    assert_eq!(values, vec![2, 1, 6, 15, 7]);
}

#[rstest]
fn test_side_cross_order_pair() {
    let container = sample();
    let values = drain(
        container.begin_side_cross_order().unwrap(),
        &container.end_side_cross_order().unwrap(),
    );
    assert_eq!(values, vec![1, 15, 2, 7, 6]);
}

#[rstest]
fn test_middle_out_order_pair() {
    let container = sample();
    let values = drain(
        container.begin_middle_out_order().unwrap(),
        &container.end_middle_out_order().unwrap(),
    );
    assert_eq!(values, vec![6, 15, 1, 7, 2]);
}

#[rstest]
fn test_orders_after_removal() {
    let mut container = sample();
    container.remove(&6).unwrap();
    assert_eq!(container.traverse(Order::Ascending).unwrap(), vec![1, 2, 7, 15]);
    assert_eq!(container.traverse(Order::Descending).unwrap(), vec![15, 7, 2, 1]);
    assert_eq!(container.traverse(Order::SideCross).unwrap(), vec![1, 15, 2, 7]);
    assert_eq!(container.traverse(Order::Reverse).unwrap(), vec![2, 1, 15, 7]);
    assert_eq!(container.traverse(Order::MiddleOut).unwrap(), vec![1, 15, 2, 7]);
}

#[rstest]
fn test_string_container_ascending() {
    let words: Container<String> = ["banana", "apple", "cherry"]
        .into_iter()
        .map(String::from)
        .collect();
    let values = drain(
        words.begin_ascending_order().unwrap(),
        &words.end_ascending_order().unwrap(),
    );
    assert_eq!(values, vec!["apple", "banana", "cherry"]);
}

#[rstest]
fn test_double_container_with_comparator() {
    let doubles: Container<f64> = [8.8, 1.1, 4.4, 9.9, 6.6].into_iter().collect();
    let ascending: Vec<f64> = doubles
        .begin_by(Order::Ascending, f64::total_cmp)
        .unwrap()
        .collect();
    let descending: Vec<f64> = doubles
        .begin_by(Order::Descending, f64::total_cmp)
        .unwrap()
        .collect();
    let reverse: Vec<f64> = doubles.begin_reverse_order().unwrap().collect();
    assert_eq!(ascending, vec![1.1, 4.4, 6.6, 8.8, 9.9]);
    assert_eq!(descending, vec![9.9, 8.8, 6.6, 4.4, 1.1]);
    assert_eq!(reverse, vec![6.6, 9.9, 4.4, 1.1, 8.8]);
}

#[rstest]
fn test_end_by_matches_exhausted_begin_by() {
    let doubles: Container<f64> = [2.5, 0.5].into_iter().collect();
    let mut cursor = doubles.begin_by(Order::SideCross, f64::total_cmp).unwrap();
    cursor.advance().unwrap().advance().unwrap();
    assert_eq!(cursor, doubles.end_by(Order::SideCross, f64::total_cmp).unwrap());
}

#[rstest]
fn test_existing_cursor_survives_mutation() {
    let mut container = sample();
    let mut cursor = container.begin_descending_order().unwrap();
    container.remove(&15).unwrap();
    container.add(100);
    assert_eq!(cursor.get(), Ok(&15));
    cursor.advance().unwrap();
    assert_eq!(cursor.get(), Ok(&7));
}

#[rstest]
fn test_mutation_between_begin_and_end_desynchronizes_views() {
    let mut container = sample();
    let mut cursor = container.begin_order().unwrap();
    container.add(3);
    let end = container.end_order().unwrap();
    while !cursor.is_end() {
        assert_ne!(cursor, end);
        cursor.advance().unwrap();
    }
    assert_ne!(cursor, end);
}

#[rstest]
#[case(Order::Insertion)]
#[case(Order::Ascending)]
#[case(Order::Descending)]
#[case(Order::SideCross)]
#[case(Order::MiddleOut)]
fn test_empty_container_begin_equals_end(#[case] order: Order) {
    let container: Container = Container::new();
    assert_eq!(container.begin(order).unwrap(), container.end(order).unwrap());
    assert_eq!(container.traverse(order).unwrap(), Vec::<i32>::new());
}

#[rstest]
fn test_borrowing_iteration_is_insertion_order() {
    let container = sample();
    let borrowed: Vec<&i32> = (&container).into_iter().collect();
    assert_eq!(borrowed, vec![&7, &15, &6, &1, &2]);
    let owned: Vec<i32> = container.into_iter().collect();
    assert_eq!(owned, vec![7, 15, 6, 1, 2]);
}
