use thiserror::Error;

use crate::types::Step;

type Cause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// A provisioning step failed. Steps that already ran are not undone.
#[derive(Error, Debug)]
pub enum ProvisionError {
    #[error("Failed to create user '{user}' on database '{db}'")]
    CreateUser {
        user: String,
        db: String,
        #[source]
        source: Cause,
    },

    #[error("Failed to create collection '{collection}'")]
    CreateCollection {
        collection: String,
        #[source]
        source: Cause,
    },

    #[error("Failed to insert seed document into '{collection}'")]
    InsertSeed {
        collection: String,
        #[source]
        source: Cause,
    },
}

impl ProvisionError {
    pub fn step(&self) -> Step {
        match self {
            ProvisionError::CreateUser { .. } => Step::CreateUser,
            ProvisionError::CreateCollection { .. } => Step::CreateCollection,
            ProvisionError::InsertSeed { .. } => Step::InsertSeed,
        }
    }
}

#[derive(Error, Debug)]
pub enum VerificationError {
    #[error("{failed} of {total} checks failed: {names}")]
    ChecksFailed {
        failed: usize,
        total: usize,
        names: String,
    },
}
