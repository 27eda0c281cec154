//! Scene module - triangle lists with render settings
//!
//! Scenes are stored as RON documents so they can be written by hand.

mod file;

pub use file::*;
