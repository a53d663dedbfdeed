//! Text rendering of container traversals.

use std::cmp::Ordering;
use std::fmt::Display;

use multiorder::prelude::*;

/// Renders one line per traversal order, `"<order>: v1 v2 ..."`.
///
/// An order whose view cannot be built renders its error message instead.
pub fn render_orders<T>(container: &Container<T>) -> Vec<String>
where
    T: Clone + Ord + Display,
{
    render_orders_by(container, Ord::cmp)
}

/// Like [`render_orders`], sorting with `compare`.
pub fn render_orders_by<T, F>(container: &Container<T>, compare: F) -> Vec<String>
where
    T: Clone + Display,
    F: Fn(&T, &T) -> Ordering,
{
    Order::ALL
        .into_iter()
        .map(|order| {
            let body = match container.begin_by(order, &compare) {
                Ok(cursor) => join(cursor),
                Err(error) => format!("<{error}>"),
            };
            format!("{order}: {body}")
        })
        .collect()
}

/// Walks `cursor` to its end, joining the elements with single spaces.
fn join<T: Display>(mut cursor: Cursor<T>) -> String {
    let mut parts = Vec::with_capacity(cursor.view_len());
    while let Ok(element) = cursor.get() {
        parts.push(element.to_string());
        if cursor.advance().is_err() {
            break;
        }
    }
    parts.join(" ")
}
