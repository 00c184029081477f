// junit4-convert/src/ui/mod.rs
//! Terminal output: colored messages, diffs and the conversion summary.

pub mod conversion_summary;
pub mod diff_viewer;
pub mod output_format;
