#![cfg_attr(not(feature = "std"), no_std)]

//! pullseq - lazy, pull-based sequences
//!
//! # Overview
//!
//! A sequence hands out its elements one at a time. Views wrap a sequence
//! and filter, transform or repeat it without doing any work until a
//! terminal operation pulls the elements through.
//!
//! # Quick Start
//!
//! ```
//! use pullseq::{Cursor, Sequence, fold};
//!
//! let total = fold(
//!     Cursor::new(vec![1, 2, 3, 4]).filter(|v| v % 2 == 0),
//!     |acc, v| acc + v,
//!     0,
//! );
//! assert_eq!(total, 6);
//! ```
//!
//! # Cycling
//!
//! A cycle never runs out on its own, so it has to be bounded:
//!
//! ```
//! use pullseq::{Cursor, Sequence};
//!
//! let mut lights = Cursor::new(vec!["red", "green", "amber"]).cycle();
//! assert_eq!(lights.next_n(4), vec!["red", "green", "amber", "red"]);
//! ```
//!
//! # Grouping
//!
//! ```
//! use pullseq::{Cursor, group_by};
//!
//! let groups = group_by(Cursor::new(vec![1, 2, 3]), |v| v % 2 == 0);
//! assert_eq!(groups[&false], vec![1, 3]);
//! assert_eq!(groups[&true], vec![2]);
//! ```
//!
//! # Ordered elements
//!
//! ```
//! use pullseq::{OrdSequence, of, ord};
//!
//! assert_eq!(of([3, 1, 2]).min_value(), Some(1));
//! assert_eq!(ord::max_by_key(of(["bb", "a", "ccc"]), |s| s.len()), Some("ccc"));
//! ```

// Re-export the sequence API from pullseq_core
pub use pullseq_core::sequence::{self, Cursor, Cycle, Filter, IntoIter, Map, Sequence, Take, of};

// Re-export combinators and helpers
pub use pullseq_core::combinators::{self, fold, group_by, map, reduce, zip};
pub use pullseq_core::ord::{self, OrdSequence};
pub use pullseq_core::option::{self, OptionExt};

// Re-export errors and configuration
pub use pullseq_core::{Error, MaterializeOptions, MaterializeOptionsOverride, Result};
