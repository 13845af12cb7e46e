//! Descriptor resolver for the four 18-byte slots at bytes 54-125.
//!
//! A slot whose pixel clock (bytes 0-1) is non-zero is a detailed timing;
//! anything else is a display descriptor keyed by the tag at byte 3. Range
//! limits descriptors carry a further timing-formula discriminant at byte 10.
//!
//! Same layering as the base block: `layout` holds offsets and the split-field
//! packing table, `reader` performs the bit extraction, `parser` and the
//! per-variant modules build domain values. Decoding never fails.

pub mod detailed;
pub mod layout;
pub mod parser;
pub mod range_limits;
pub mod reader;

pub use detailed::{DetailedTiming, DtdFeatures, StereoMode, SyncType};
pub use parser::{Descriptor, DisplayDescriptor, resolve_descriptor};
pub use range_limits::{
    CvtAspectRatio, CvtSupport, RangeLimits, RangeTiming, ScalingSupport, SecondaryGtf,
};
