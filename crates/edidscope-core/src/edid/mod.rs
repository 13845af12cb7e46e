//! EDID base block decoding.
//!
//! The decoder slices the 128-byte block into the fixed ranges declared in
//! `layout`, reads them through `reader`, and hands each range to a field
//! interpreter or the descriptor resolver. Only a wrong block length is an
//! error; a bad header is reported on the decoded value.
//!
//! - `layout`: byte offsets and ranges (source of truth)
//! - `reader`: bounds-checked byte access
//! - `parser`: the `Edid` model and `decode`
//! - `error`: structural decode errors

pub mod error;
pub mod layout;
pub mod parser;
pub mod reader;

pub use error::EdidError;
pub use parser::{Edid, EdidVersion, Header, decode};
