//! Building blocks of the `ddbackup` binary, exposed for integration tests

pub mod cli;
pub mod commands;
pub mod logging;
pub mod settings;
