pub mod directive;
pub mod op;
pub mod word;
