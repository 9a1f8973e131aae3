//! Application wiring: global flags, config resolution, store opening.

mod context;
mod resolver;
mod store;

pub use context::AppContext;
pub use resolver::{exit_not_found_with_hint, missing_db_message, resolve_config_path};
