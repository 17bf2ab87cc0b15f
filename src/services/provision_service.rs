use anyhow::{Context, Result};
use tracing::info;

use crate::config::Settings;
use crate::mongo::MongoClient;
use crate::provision::{
    self, ProvisionPlan, ProvisionReport, ProvisionTarget, VerificationReport,
    script::render_init_script,
};
use crate::utils::{ProgressReporter, redact_uri};

pub struct ProvisionService {
    settings: Settings,
}

impl ProvisionService {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    pub fn plan(&self, collection: Option<&str>) -> ProvisionPlan {
        ProvisionPlan::from_config(&self.settings.mongo).with_collection(collection)
    }

    async fn connect(&self, database: &str) -> Result<MongoClient> {
        info!(
            uri = %redact_uri(&self.settings.mongo.uri),
            database,
            "Connecting to MongoDB"
        );
        let mongo = &self.settings.mongo;
        MongoClient::connect(&mongo.uri, &mongo.auth_mechanism, database).await
    }

    pub async fn provision(
        &self,
        plan: &ProvisionPlan,
        progress: &ProgressReporter,
    ) -> Result<ProvisionReport> {
        progress.report("Connecting to MongoDB...");
        let client = self.connect(plan.database()).await?;

        let res = provision::provision(&client, plan, progress).await;
        client.close().await;

        Ok(res?)
    }

    pub async fn verify(&self, plan: &ProvisionPlan) -> Result<VerificationReport> {
        let client = self.connect(plan.database()).await?;

        let res = provision::verify(&client, plan).await;
        client.close().await;

        res.context("Failed to verify provisioned database")
    }

    pub async fn ping(&self) -> Result<()> {
        let client = self.connect(&self.settings.mongo.db).await?;

        let res = client.ping().await;
        client.close().await;

        res
    }

    pub fn render_script(&self, plan: &ProvisionPlan) -> Result<String> {
        render_init_script(plan)
    }
}
