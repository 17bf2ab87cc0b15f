mod bootstrap;
mod plan;
mod target;
mod verify;

pub mod script;

pub use bootstrap::{ProvisionReport, provision};
pub use plan::ProvisionPlan;
pub use target::ProvisionTarget;
pub use verify::{Check, VerificationReport, verify};
