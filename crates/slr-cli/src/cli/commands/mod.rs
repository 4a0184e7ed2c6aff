//! CLI command handlers. Each command is in its own file; handlers write to
//! the given output so they can be exercised without a terminal.

mod check;
mod completions;
mod pause;
mod resume;
mod set;
mod status;
mod translate;
mod watch;

pub use check::run_check;
pub use completions::{run_completions, run_man};
pub use pause::run_pause;
pub use resume::{run_disable, run_resume};
pub use set::run_set;
pub use status::run_status;
pub use translate::run_translate;
pub use watch::run_watch;
