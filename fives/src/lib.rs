pub use board::*;
pub use config::*;
pub use enumeration::*;
pub use errors::*;
pub use evaluation::*;
pub use ledger::*;
pub use protocol::*;
pub use session::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod board;
mod config;
mod enumeration;
mod errors;
mod evaluation;
mod ledger;
mod protocol;
mod session;
mod visualization;
