//! One handler module per subcommand.

pub mod create;
pub mod delete;
pub mod get;
pub mod hint;
pub mod list;
pub mod misc;
pub mod update;
