//! String helpers.
//!
//! - [`trim_prefix`] / [`trim_suffix`] / [`trim_ends`] - affix trimming
//! - [`chunk`] - re-joins fixed-size pieces with a separator
//! - [`constant_time_eq`] / [`contains_ignore_ascii_case`] - comparisons
//! - [`is_base64`] / [`is_ascii_digits`] - classification
//! - [`stable_uuid`] - hash-derived identifiers (feature `stable-id`)

mod affix;
mod chunk;
mod classify;
mod compare;
#[cfg(feature = "stable-id")]
mod stable_id;

pub use affix::{
    trim_ends, trim_ends_ignore_ascii_case, trim_prefix, trim_prefix_ignore_ascii_case,
    trim_suffix, trim_suffix_ignore_ascii_case,
};
pub use chunk::chunk;
pub use classify::{is_ascii_digits, is_base64};
pub use compare::{constant_time_eq, contains_ignore_ascii_case};
#[cfg(feature = "stable-id")]
pub use stable_id::stable_uuid;
