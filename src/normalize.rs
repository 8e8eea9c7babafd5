//! Rewrites a raw edit script into its canonical form.
//!
//! The passes run once each, in order: merge runs, detect updates, merge runs
//! again. Each pass builds a new list and only ever looks at the last
//! operation it emitted.

use crate::myers::{Diff, EditOperation, OperationKind};
use tracing::debug;

/// Normalizes a position-sorted list of operations.
///
/// The result has no two adjacent operations of the same kind whose ranges
/// touch, and no Delete/Insert pair that should have become an Update.
pub fn normalize<T>(ops: Diff<T>) -> Diff<T> {
    let raw = ops.len();
    let result = merge_runs(detect_updates(merge_runs(ops)));
    debug!(raw, normalized = result.len(), "normalized edit script");
    result
}

/// Joins each operation onto the previous one when both have the same kind
/// and the previous run ends where the next one starts.
pub fn merge_runs<T>(ops: Diff<T>) -> Diff<T> {
    let mut result: Diff<T> = Vec::with_capacity(ops.len());
    for op in ops {
        match result.last_mut() {
            Some(last) if last.kind() == op.kind() && last.end() == op.position() => {
                last.text_mut().extend(op.into_text());
            }
            _ => result.push(op),
        }
    }
    result
}

// Which side of a collapsed pair supplies the Update's text.
enum Payload {
    Previous,
    Next,
}

fn update_payload<T>(prev: &EditOperation<T>, next: &EditOperation<T>) -> Option<Payload> {
    match (prev.kind(), next.kind()) {
        (OperationKind::Delete, OperationKind::Insert)
            if next.position() == prev.end() || next.position() == prev.position() =>
        {
            Some(Payload::Next)
        }
        (OperationKind::Insert, OperationKind::Delete) if next.position() == prev.end() => {
            Some(Payload::Previous)
        }
        _ => None,
    }
}

/// Collapses adjacent Delete/Insert pairs into a single Update positioned at
/// the first operation.
///
/// A Delete followed by an Insert yields the inserted text. An Insert followed
/// by a Delete yields the text of the Insert.
pub fn detect_updates<T>(ops: Diff<T>) -> Diff<T> {
    let mut result: Diff<T> = Vec::with_capacity(ops.len());
    for op in ops {
        let payload = result.last().and_then(|prev| update_payload(prev, &op));
        let prev = match payload {
            Some(_) => result.pop(),
            None => None,
        };
        match (payload, prev) {
            (Some(Payload::Next), Some(prev)) => {
                result.push(EditOperation::update(prev.position(), op.into_text()));
            }
            (Some(Payload::Previous), Some(prev)) => {
                result.push(EditOperation::update(prev.position(), prev.into_text()));
            }
            _ => result.push(op),
        }
    }
    result
}
