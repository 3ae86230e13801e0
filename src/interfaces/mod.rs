//! Script input and table output for the command-line front end.

pub mod csv;
pub mod json;
