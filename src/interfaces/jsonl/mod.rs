//! JSON Lines input and output for the command line.

pub mod record_reader;
pub mod record_writer;
