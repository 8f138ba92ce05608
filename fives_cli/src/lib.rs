mod config;
mod high_score;
mod host;
pub use config::*;
pub use high_score::*;
pub use host::*;
