// junit4-convert/src/utils/mod.rs
pub mod file_io;
