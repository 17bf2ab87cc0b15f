pub mod logger;
pub mod progress;
pub mod templates;
pub mod uri;

pub use progress::ProgressReporter;
pub use templates::{get_env_file_with_defaults, get_script};
pub use uri::redact_uri;
