//! Utilities shared by the converters and the OOXML layer.

pub mod xml;
