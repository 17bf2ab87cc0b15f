pub mod memory;

pub use live::{live_config, live_uri};
pub use memory::MemoryTarget;

use mongoseed::{config::MongoConfig, provision::ProvisionPlan, utils::ProgressReporter};

pub fn default_plan() -> ProvisionPlan {
    ProvisionPlan::from_config(&MongoConfig::default())
}

pub fn silent() -> ProgressReporter {
    ProgressReporter::new(None)
}
