// model = "claude-opus-4-5"
// created = "2026-02-06"
// modified = "2026-02-06"
// driver = "Isaac Clayton"

//! AFL fuzz harness for the adaptive list.
//!
//! Decodes the input bytes into a stream of list operations, applies
//! each to an adaptive list and to a plain `Vec` model, and checks that
//! the two never disagree. View operations run against both at
//! translated indices, so window bookkeeping is fuzzed too.

use afl::fuzz;

use pliant::list::AdaptiveList;

/// Operation types the fuzzer can generate.
#[derive(Debug, Clone, Copy)]
enum FuzzOp {
    /// Append a value at the end.
    Push { value: u8 },
    /// Insert a value at a position fraction.
    Insert { pos_frac: u8, value: u8 },
    /// Replace the value at a position fraction.
    Set { pos_frac: u8, value: u8 },
    /// Remove the value at a position fraction.
    RemoveAt { pos_frac: u8 },
    /// Remove the first match of a value.
    RemoveValue { value: u8 },
    /// Open a view and append through it.
    ViewPush { from_frac: u8, to_frac: u8, value: u8 },
    /// Open a view and clear it.
    ViewClear { from_frac: u8, to_frac: u8 },
}

impl FuzzOp {
    fn from_bytes(bytes: &[u8]) -> Option<(FuzzOp, &[u8])> {
        if bytes.is_empty() {
            return None;
        }

        let op_type = bytes[0] % 7;
        let rest = &bytes[1..];

        match op_type {
            0 if rest.len() >= 1 => {
                return Some((FuzzOp::Push { value: rest[0] }, &rest[1..]));
            }
            1 if rest.len() >= 2 => {
                let op = FuzzOp::Insert {
                    pos_frac: rest[0],
                    value: rest[1],
                };
                return Some((op, &rest[2..]));
            }
            2 if rest.len() >= 2 => {
                let op = FuzzOp::Set {
                    pos_frac: rest[0],
                    value: rest[1],
                };
                return Some((op, &rest[2..]));
            }
            3 if rest.len() >= 1 => {
                return Some((FuzzOp::RemoveAt { pos_frac: rest[0] }, &rest[1..]));
            }
            4 if rest.len() >= 1 => {
                return Some((FuzzOp::RemoveValue { value: rest[0] }, &rest[1..]));
            }
            5 if rest.len() >= 3 => {
                let op = FuzzOp::ViewPush {
                    from_frac: rest[0],
                    to_frac: rest[1],
                    value: rest[2],
                };
                return Some((op, &rest[3..]));
            }
            6 if rest.len() >= 2 => {
                let op = FuzzOp::ViewClear {
                    from_frac: rest[0],
                    to_frac: rest[1],
                };
                return Some((op, &rest[2..]));
            }
            _ => return None,
        }
    }
}

/// Scale a byte fraction to a position in `0..=len`.
fn scale(frac: u8, len: usize) -> usize {
    return (frac as usize * len / 256).min(len);
}

/// Scale a byte fraction to a window `[from, to]` within `0..=len`.
fn window(from_frac: u8, to_frac: u8, len: usize) -> (usize, usize) {
    let from = scale(from_frac, len);
    let to = from + scale(to_frac, len - from);
    return (from, to);
}

fn apply(list: &mut AdaptiveList<Vec<u8>>, model: &mut Vec<u8>, op: FuzzOp) {
    let len = model.len();
    match op {
        FuzzOp::Push { value } => {
            list.push(value);
            model.push(value);
        }
        FuzzOp::Insert { pos_frac, value } => {
            let pos = scale(pos_frac, len);
            list.insert(pos, value).unwrap();
            model.insert(pos, value);
        }
        FuzzOp::Set { pos_frac, value } => {
            if len == 0 {
                return;
            }
            let pos = scale(pos_frac, len - 1);
            let old = list.set(pos, value).unwrap();
            assert_eq!(old, model[pos]);
            model[pos] = value;
        }
        FuzzOp::RemoveAt { pos_frac } => {
            if len == 0 {
                return;
            }
            let pos = scale(pos_frac, len - 1);
            let removed = list.remove_at(pos).unwrap();
            assert_eq!(removed, model.remove(pos));
        }
        FuzzOp::RemoveValue { value } => {
            let found = list.remove_value(&value);
            match model.iter().position(|&v| v == value) {
                Some(pos) => {
                    assert!(found);
                    model.remove(pos);
                }
                None => assert!(!found),
            }
        }
        FuzzOp::ViewPush {
            from_frac,
            to_frac,
            value,
        } => {
            let (from, to) = window(from_frac, to_frac, len);
            let mut view = list.subrange(from, to).unwrap();
            view.push(value).unwrap();
            assert_eq!(view.len(), to - from + 1);
            model.insert(to, value);
        }
        FuzzOp::ViewClear { from_frac, to_frac } => {
            let (from, to) = window(from_frac, to_frac, len);
            let mut view = list.subrange(from, to).unwrap();
            view.clear().unwrap();
            assert!(view.is_empty());
            model.drain(from..to);
        }
    }
}

fn run(data: &[u8]) {
    let mut list: AdaptiveList<Vec<u8>> = AdaptiveList::new();
    let mut model: Vec<u8> = Vec::new();

    let mut rest = data;
    while let Some((op, remaining)) = FuzzOp::from_bytes(rest) {
        rest = remaining;
        apply(&mut list, &mut model, op);
        assert_eq!(list.len(), model.len());
    }

    // Final agreement: content, order, and both traversal directions.
    assert_eq!(list.to_vec(), model);
    let reversed: Vec<u8> = list.reversed().copied().collect();
    let mut expected = model.clone();
    expected.reverse();
    assert_eq!(reversed, expected);
}

fn main() {
    fuzz!(|data: &[u8]| {
        run(data);
    });
}
