use anyhow::Result;

use crate::types::{RoleGrant, SeedDocument, UserSpec};

/// An open handle to the database being provisioned.
///
/// The handle is scoped to a single database and owned by the caller, who
/// opens it before provisioning and closes it afterwards.
#[allow(async_fn_in_trait)]
pub trait ProvisionTarget {
    async fn ping(&self) -> Result<()>;

    /// Fails if the user already exists or the server rejects the values.
    async fn create_user(&self, user: &UserSpec) -> Result<()>;

    /// Fails if the collection already exists.
    async fn create_collection(&self, name: &str) -> Result<()>;

    /// Inserts unconditionally and returns the id the server assigned.
    async fn insert_seed(&self, collection: &str, seed: &SeedDocument) -> Result<String>;

    /// Roles held by `username`, or `None` when there is no such user.
    async fn user_roles(&self, username: &str) -> Result<Option<Vec<RoleGrant>>>;

    async fn collection_exists(&self, name: &str) -> Result<bool>;

    /// Number of documents in `collection` equal to `seed`.
    async fn count_seed(&self, collection: &str, seed: &SeedDocument) -> Result<u64>;
}
