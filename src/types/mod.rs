mod role_grant;
mod seed_document;
mod step;
mod user_spec;

pub use role_grant::{READ_WRITE_ROLE, RoleGrant};
pub use seed_document::{AccessMetadata, GUEST_PASSWORD_HASH, GUEST_USER, SeedDocument};
pub use step::Step;
pub use user_spec::UserSpec;
