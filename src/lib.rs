// model = "claude-opus-4-5"
// created = "2026-02-03"
// modified = "2026-02-05"
// driver = "Isaac Clayton"

//! Pliant - adaptive list containers over pluggable backing storage.
//!
//! An [`AdaptiveList`](list::AdaptiveList) wraps any
//! [`BackingSequence`](backing::BackingSequence) - a plain `Vec`, a
//! `VecDeque`, or anything else that is resizable and index-addressable -
//! and layers the full mutable-list contract on top: bounds-checked
//! mutation, live sublist views that share the parent's storage, bounded
//! traversal with a size-triggered batched path, and structural equality
//! that holds across backing kinds.
//!
//! # Quick Start
//!
//! ```
//! use pliant::list::AdaptiveList;
//!
//! let mut list: AdaptiveList<Vec<&str>> = AdaptiveList::new();
//! list.push("A");
//! list.push("B");
//! list.push("C");
//! list.push("D");
//!
//! // A view is a live window: writes land in the parent's storage.
//! let mut view = list.subrange(1, 3).unwrap();
//! view.set(1, "R").unwrap();
//! assert_eq!(view, ["B", "R"]);
//! assert_eq!(list, ["A", "B", "R", "D"]);
//! ```

pub mod backing;
pub mod decorate;
pub mod error;
pub mod list;
pub mod profile;
pub mod reverse;
pub mod traverse;
pub mod view;

mod serial;
