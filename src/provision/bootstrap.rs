use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::{info, instrument};

use crate::errors::ProvisionError;
use crate::provision::{ProvisionPlan, ProvisionTarget};
use crate::types::Step;
use crate::utils::ProgressReporter;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionReport {
    pub user: String,
    pub database: String,
    pub collection: String,
    pub seed_id: String,
}

fn announce(step: Step, progress: &ProgressReporter) {
    let total = Step::iter().count();
    progress.report(format!(
        "[{}/{}] {}",
        step.position(),
        total,
        match step {
            Step::CreateUser => "Creating user",
            Step::CreateCollection => "Creating collection",
            Step::InsertSeed => "Inserting seed document",
        }
    ));
}

/// Creates the user, the collection and the seed document, in that order.
///
/// The first failing step aborts the run. Nothing is checked beforehand and
/// nothing is undone afterwards, so running twice against the same database
/// fails at the first step that already happened, or duplicates the seed.
#[instrument(skip_all, fields(user = %plan.user.name, db = %plan.user.db, collection = %plan.collection))]
pub async fn provision<T: ProvisionTarget>(
    target: &T,
    plan: &ProvisionPlan,
    progress: &ProgressReporter,
) -> Result<ProvisionReport, ProvisionError> {
    announce(Step::CreateUser, progress);
    target
        .create_user(&plan.user)
        .await
        .map_err(|e| ProvisionError::CreateUser {
            user: plan.user.name.clone(),
            db: plan.user.db.clone(),
            source: e.into(),
        })?;
    info!("Created user");

    announce(Step::CreateCollection, progress);
    target
        .create_collection(&plan.collection)
        .await
        .map_err(|e| ProvisionError::CreateCollection {
            collection: plan.collection.clone(),
            source: e.into(),
        })?;
    info!("Created collection");

    announce(Step::InsertSeed, progress);
    let seed_id = target
        .insert_seed(&plan.collection, &plan.seed)
        .await
        .map_err(|e| ProvisionError::InsertSeed {
            collection: plan.collection.clone(),
            source: e.into(),
        })?;
    info!(seed_id = %seed_id, "Inserted seed document");

    Ok(ProvisionReport {
        user: plan.user.name.clone(),
        database: plan.user.db.clone(),
        collection: plan.collection.clone(),
        seed_id,
    })
}
