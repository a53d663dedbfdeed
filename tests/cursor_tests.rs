//! Integration tests for Cursor.
//!
//! These tests pin down the shared cursor contract: bounds checking,
//! pre/post advance, and content-based equality across construction calls.

use multiorder::container::Container;
use multiorder::error::{ContainerError, CursorOperation, OutOfBoundsError};
use multiorder::traversal::{Cursor, Order, View};
use rstest::rstest;

fn sample() -> Container {
    [7, 15, 6, 1, 2].into_iter().collect()
}

#[rstest]
#[case(Order::Insertion)]
#[case(Order::Ascending)]
#[case(Order::Descending)]
#[case(Order::Reverse)]
#[case(Order::SideCross)]
#[case(Order::MiddleOut)]
fn test_advancing_length_times_reaches_end(#[case] order: Order) {
    let container = sample();
    let mut cursor = container.begin(order).unwrap();
    for _ in 0..container.size() {
        cursor.advance().unwrap();
    }
    assert_eq!(cursor, container.end(order).unwrap());

    let dereference = cursor.get().unwrap_err();
    assert_eq!(dereference.operation, CursorOperation::Dereference);
    let advance = cursor.advance().unwrap_err();
    assert_eq!(advance.operation, CursorOperation::Advance);
}

#[rstest]
fn test_out_of_bounds_error_reports_position_and_length() {
    let container = sample();
    let end = container.end_ascending_order().unwrap();
    assert_eq!(
        end.get(),
        Err(OutOfBoundsError {
            operation: CursorOperation::Dereference,
            position: 5,
            length: 5,
        })
    );
}

#[rstest]
fn test_out_of_bounds_converts_into_container_error() {
    fn first_two(container: &Container) -> Result<(i32, i32), ContainerError> {
        let mut cursor = container.begin_order()?;
        let first = *cursor.get()?;
        let second = *cursor.advance()?.get()?;
        Ok((first, second))
    }

    assert_eq!(first_two(&sample()), Ok((7, 15)));

    let single: Container = [1].into_iter().collect();
    assert!(matches!(
        first_two(&single),
        Err(ContainerError::OutOfBounds(OutOfBoundsError {
            operation: CursorOperation::Dereference,
            position: 1,
            length: 1,
        }))
    ));
}

#[rstest]
fn test_post_advance_yields_old_state_in_loop() {
    let container = sample();
    let mut cursor = container.begin_side_cross_order().unwrap();
    let end = container.end_side_cross_order().unwrap();
    let mut seen = Vec::new();
    while cursor != end {
        let previous = cursor.post_advance().unwrap();
        seen.push(*previous.get().unwrap());
    }
    assert_eq!(seen, vec![1, 15, 2, 7, 6]);
}

#[rstest]
fn test_cursors_from_separate_calls_compare_equal() {
    let container = sample();
    let first = container.begin_middle_out_order().unwrap();
    let second = container.begin_middle_out_order().unwrap();
    assert_eq!(first, second);
}

#[rstest]
fn test_cursors_over_equal_contents_from_different_containers_compare_equal() {
    let left = sample();
    let right = sample();
    assert_eq!(
        left.begin_descending_order().unwrap(),
        right.begin_descending_order().unwrap()
    );
}

#[rstest]
fn test_cursors_of_different_orders_differ_when_views_differ() {
    let container = sample();
    assert_ne!(
        container.begin_ascending_order().unwrap(),
        container.begin_descending_order().unwrap()
    );
}

#[rstest]
fn test_cursors_of_different_orders_match_when_views_match() {
    // an already-sorted container has identical insertion and ascending views
    let container: Container = [1, 2, 3].into_iter().collect();
    assert_eq!(
        container.begin_order().unwrap(),
        container.begin_ascending_order().unwrap()
    );
}

#[rstest]
fn test_remaining_shrinks_as_cursor_advances() {
    let container = sample();
    let mut cursor = container.begin_reverse_order().unwrap();
    assert_eq!(cursor.remaining(), &[2, 1, 6, 15, 7]);
    cursor.advance().unwrap();
    assert_eq!(cursor.remaining(), &[1, 6, 15, 7]);
    assert_eq!(cursor.view_len(), 5);
    assert_eq!(cursor.view().as_slice(), &[2, 1, 6, 15, 7]);
}

#[rstest]
fn test_iterator_adapter_composes() {
    let container = sample();
    let doubled: Vec<i32> = container
        .begin_ascending_order()
        .unwrap()
        .map(|value| value * 2)
        .collect();
    assert_eq!(doubled, vec![2, 4, 12, 14, 30]);
}

#[rstest]
fn test_iterator_reports_exact_size() {
    let mut cursor = Cursor::begin(View::from_vec(vec!['x', 'y', 'z']));
    assert_eq!(cursor.size_hint(), (3, Some(3)));
    cursor.next();
    assert_eq!(cursor.len(), 2);
}
