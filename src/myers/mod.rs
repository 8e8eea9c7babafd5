pub mod types;
pub use types::*;

use tracing::{debug, trace};

/// Furthest-reaching x per diagonal for a single edit distance `d`.
///
/// Diagonals `-d..=d` live in `2d + 1` slots offset by `d`. Slots that were
/// never reached read as `None`, and since `None < Some(_)` an absent diagonal
/// always loses the down/right comparison.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frontier {
    data: Vec<Option<usize>>,
    offset: isize,
}

impl Frontier {
    fn new(d: usize) -> Self {
        Frontier {
            data: vec![None; 2 * d + 1],
            offset: d as isize,
        }
    }

    /// The edit distance this frontier was built for.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.offset as usize
    }

    /// Furthest x reached on diagonal `k`, if any.
    #[must_use]
    pub fn get(&self, k: isize) -> Option<usize> {
        let idx = k + self.offset;
        if idx < 0 {
            return None;
        }
        self.data.get(idx as usize).copied().flatten()
    }

    fn set(&mut self, k: isize, x: usize) {
        self.data[(k + self.offset) as usize] = Some(x);
    }
}

/// Every frontier from distance 0 up to the minimal edit distance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    frontiers: Vec<Frontier>,
}

impl Trace {
    /// The minimal edit distance D.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.frontiers.len() - 1
    }

    #[must_use]
    pub fn frontier(&self, d: usize) -> Option<&Frontier> {
        self.frontiers.get(d)
    }

    pub fn frontiers(&self) -> impl Iterator<Item = &Frontier> {
        self.frontiers.iter()
    }
}

// Down means the step onto `k` came from `k + 1` (an insertion),
// right means it came from `k - 1` (a deletion).
fn goes_down(prev: Option<&Frontier>, k: isize, d: isize) -> bool {
    if k == -d {
        return true;
    }
    if k == d {
        return false;
    }
    let from_left = prev.and_then(|v| v.get(k - 1));
    let from_above = prev.and_then(|v| v.get(k + 1));
    from_left < from_above
}

/// Runs the forward Myers search and returns the full trace.
///
/// The search deepens `d` from zero and stops at the first distance whose
/// frontier reaches `(n, m)`. It always stops by `d = n + m`.
pub fn search<T: Eq>(original: &[T], modified: &[T]) -> Trace {
    let n = original.len();
    let m = modified.len();
    let maxi = n + m;
    let mut frontiers: Vec<Frontier> = Vec::new();

    'edits: for d in 0..=maxi {
        let mut v = Frontier::new(d);
        let prev = frontiers.last();
        let d = d as isize;
        for k in (-d..=d).step_by(2) {
            let mut x = if goes_down(prev, k, d) {
                prev.and_then(|p| p.get(k + 1)).unwrap_or(0)
            } else {
                prev.and_then(|p| p.get(k - 1)).map_or(1, |x| x + 1)
            };
            let mut y = (x as isize - k) as usize;
            while x < n && y < m && original[x] == modified[y] {
                x += 1;
                y += 1;
            }
            v.set(k, x);
            if x >= n && y >= m {
                frontiers.push(v);
                break 'edits;
            }
        }
        frontiers.push(v);
    }

    debug!(
        n,
        m,
        distance = frontiers.len() - 1,
        "shortest edit path found"
    );
    Trace { frontiers }
}

/// Walks the trace back from `(n, m)` and emits one single-symbol operation
/// per edit step, in left-to-right order.
///
/// Deletions are positioned in `original`, insertions in `modified`.
pub fn traceback<T: Clone>(original: &[T], modified: &[T], trace: &Trace) -> Diff<T> {
    let mut x = original.len();
    let mut y = modified.len();
    let mut changes: Diff<T> = Vec::with_capacity(trace.distance());

    for d in (1..=trace.distance()).rev() {
        let prev = &trace.frontiers[d - 1];
        let d = d as isize;
        let k = x as isize - y as isize;
        let prev_k = if goes_down(Some(prev), k, d) {
            k + 1
        } else {
            k - 1
        };
        let prev_x = prev.get(prev_k).unwrap_or(0);
        let prev_y = prev_x as isize - prev_k;

        while x > prev_x && y as isize > prev_y {
            x -= 1;
            y -= 1;
        }
        if x == prev_x {
            y -= 1;
            changes.push(EditOperation::insert(y, vec![modified[y].clone()]));
        } else {
            x -= 1;
            changes.push(EditOperation::delete(x, vec![original[x].clone()]));
        }
    }

    changes.reverse();
    trace!(operations = changes.len(), "edit path reconstructed");
    changes
}

/// Computes the raw shortest edit script between two sequences: one
/// single-symbol Insert or Delete per edit, sorted by position.
///
/// # Examples
///
/// ```
/// use shortedit::myers::{edit_script, EditOperation};
///
/// let old: Vec<char> = "abc".chars().collect();
/// let new: Vec<char> = "axc".chars().collect();
/// assert_eq!(edit_script(&old, &new), vec![
///     EditOperation::delete(1, vec!['b']),
///     EditOperation::insert(1, vec!['x']),
/// ]);
/// ```
pub fn edit_script<T: Eq + Clone>(original: &[T], modified: &[T]) -> Diff<T> {
    let trace = search(original, modified);
    let mut changes = traceback(original, modified, &trace);
    // stable, so a Delete and Insert sharing a position keep their order
    changes.sort_by_key(EditOperation::position);
    changes
}

/// Minimum number of single-symbol insertions and deletions turning
/// `original` into `modified`.
pub fn edit_distance<T: Eq>(original: &[T], modified: &[T]) -> usize {
    search(original, modified).distance()
}
