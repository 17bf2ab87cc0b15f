use crate::config::MongoConfig;
use crate::types::{SeedDocument, UserSpec};

/// Everything a provisioning run writes, resolved from configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProvisionPlan {
    pub user: UserSpec,
    pub collection: String,
    pub seed: SeedDocument,
}

impl ProvisionPlan {
    pub fn from_config(config: &MongoConfig) -> Self {
        Self {
            user: UserSpec::read_write(&config.user, &config.password, &config.db)
                .with_mechanism(config.user_mechanism.as_deref()),
            collection: config.collection.clone(),
            seed: SeedDocument::guest(),
        }
    }

    pub fn with_collection(mut self, collection: Option<&str>) -> Self {
        if let Some(name) = collection {
            self.collection = name.to_string();
        }
        self
    }

    pub fn database(&self) -> &str {
        &self.user.db
    }
}
