pub mod log;
pub mod mongo;
pub mod settings;

pub use log::LogConfig;
pub use mongo::{DEFAULT_COLLECTION, MongoConfig};
pub use settings::Settings;
