//! Windows installer formats.

pub mod wix;
