//! Field interpreters for the fixed part of the base block.
//!
//! Every interpreter takes a fixed-size array, so a wrong input length is a
//! type error rather than a runtime one. Encoded values that fall outside the
//! known tables resolve to explicit variants; nothing here returns an error.

pub mod chromaticity;
pub mod features;
pub mod input;
pub mod manufacturer;
pub mod timings;

pub use chromaticity::{Chromaticity, CiePoint, decode_chromaticity};
pub use features::{ColorEncoding, Features, decode_features, decode_gamma};
pub use input::{
    AnalogInput, DigitalInput, DigitalInterface, SignalLevel, VideoInput, decode_video_input,
};
pub use manufacturer::{decode_manufacturer_id, encode_manufacturer_id};
pub use timings::{
    AspectRatio, EstablishedTiming, StandardTiming, decode_established_timings,
    decode_standard_timing, decode_standard_timings, manufacturer_timings,
};
