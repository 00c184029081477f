// junit4-convert/src/commands/mod.rs
pub mod convert;
pub mod list_rules;
