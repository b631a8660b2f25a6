//! Core conversion modules

pub mod align;
pub mod escape;
pub mod reader;
pub mod table;
pub mod templates;
