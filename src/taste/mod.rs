//! Detection heuristics.
//!
//! Internal building blocks for [`crate::detect`]: signature matching,
//! the UTF-8 structural scan, UTF-16 zero-byte statistics, and the
//! embedded charset-marker scan.

pub(crate) mod bom;
pub(crate) mod marker;
pub(crate) mod utf16;
pub(crate) mod utf8;
