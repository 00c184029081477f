// junit4-convert/src/lib.rs
//! # junit4-convert CLI Application
//!
//! Command-line front end for `junit4-convert-core`. It reads one Java source
//! file, runs it through the conversion pipeline, and emits the result on
//! stdout or back into the file.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
pub mod utils;
