//! Interactive console front end for the fianchetto engine.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, parse_command};
pub use error::CliError;
pub use session::{Session, run};
