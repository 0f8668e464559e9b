#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Pull-based lazy sequences.
//!
//! A [`Sequence`] is a cursor that hands out one element at a time through
//! [`Sequence::has_next`] and [`Sequence::next`]. Views such as
//! [`Filter`], [`Map`] and [`Cycle`] wrap an upstream sequence and do no work
//! until a terminal operation (`to_vec`, `fold`, `reduce`, `for_each`, ...)
//! pulls elements through the chain.
//!
//! ```
//! use pullseq_core::{Cursor, Sequence};
//!
//! let evens = Cursor::new(vec![4, 3, 2, 1])
//!     .filter(|v| v % 2 == 0)
//!     .map(|v| v * 10)
//!     .to_vec();
//! assert_eq!(evens, vec![40, 20]);
//! ```
//!
//! Operations that cannot be expressed as a forward pull (`sort`, `cycle`)
//! buffer the remaining upstream elements first. Use
//! [`Sequence::cycle_with`] and [`Sequence::to_vec_with`] with
//! [`MaterializeOptions`] to put a ceiling on that buffer.
//!
//! Sequences are single-consumer and carry no synchronization; a chain must
//! be driven from one place at a time.

// This works on std and no_std and is harmless.
extern crate alloc;

pub mod combinators;
pub mod error;
pub mod option;
pub mod options;
pub mod ord;
pub mod sequence;

pub use combinators::{fold, group_by, map, reduce, zip};
pub use error::{Error, Result};
pub use option::OptionExt;
pub use options::{MaterializeOptions, MaterializeOptionsOverride};
pub use ord::OrdSequence;
pub use sequence::{Cursor, Cycle, Filter, IntoIter, Map, Sequence, Take, of};
