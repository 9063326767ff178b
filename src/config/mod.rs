//! Configuration files read by the command-line tools.
pub mod edge;
