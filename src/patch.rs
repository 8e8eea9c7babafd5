use crate::error::ApplyError;
use crate::myers::EditOperation;

/// Replays a raw or run-merged edit script against `original`.
///
/// Deletions are checked against `original` and removed first. Insertions are
/// then placed at their positions in the modified sequence, lowest first.
/// Updates are rejected because they do not record how many symbols they
/// replace.
pub fn apply<T: Eq + Clone>(original: &[T], ops: &[EditOperation<T>]) -> Result<Vec<T>, ApplyError> {
    let mut removed = vec![false; original.len()];
    let mut inserts = vec![];

    for op in ops {
        match op {
            EditOperation::Delete { position, text } => {
                let position = *position;
                let end = op.end();
                let Some(run) = original.get(position..end) else {
                    return Err(ApplyError::OutOfBounds {
                        position,
                        len: text.len(),
                    });
                };
                if run != text.as_slice() {
                    return Err(ApplyError::Mismatch { position });
                }
                if let Some(offset) = removed[position..end].iter().position(|r| *r) {
                    return Err(ApplyError::Overlap {
                        position: position + offset,
                    });
                }
                removed[position..end].fill(true);
            }
            EditOperation::Insert { .. } => inserts.push(op),
            EditOperation::Update { position, .. } => {
                return Err(ApplyError::Unsupported {
                    position: *position,
                });
            }
        }
    }

    let mut result: Vec<T> = original
        .iter()
        .zip(&removed)
        .filter(|(_, gone)| !**gone)
        .map(|(e, _)| e.clone())
        .collect();

    inserts.sort_by_key(|op| op.position());
    for op in inserts {
        let position = op.position();
        if position > result.len() {
            return Err(ApplyError::OutOfBounds {
                position,
                len: op.text().len(),
            });
        }
        result.splice(position..position, op.text().iter().cloned());
    }

    Ok(result)
}
