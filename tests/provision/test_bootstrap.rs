use anyhow::Result;
use mongoseed::{
    config::MongoConfig,
    errors::ProvisionError,
    provision::{ProvisionPlan, ProvisionTarget, provision, verify},
    types::{RoleGrant, SeedDocument, Step},
    utils::ProgressReporter,
};
use tokio::sync::mpsc;

use crate::common::{MemoryTarget, default_plan, silent};

#[tokio::test]
async fn test_provision_creates_user_collection_and_seed() -> Result<()> {
    let target = MemoryTarget::new();
    let plan = default_plan();

    let report = provision(&target, &plan, &silent()).await?;

    assert_eq!(report.user, "user");
    assert_eq!(report.database, "db");
    assert_eq!(report.collection, "auth");
    assert!(!report.seed_id.is_empty());

    assert_eq!(
        target.user_roles("user").await?,
        Some(vec![RoleGrant::read_write("db")])
    );
    assert_eq!(target.collection_names(), vec!["auth".to_string()]);
    assert_eq!(target.count_seed("auth", &SeedDocument::guest()).await?, 1);

    assert!(verify(&target, &plan).await?.is_ok());
    Ok(())
}

#[tokio::test]
async fn test_configured_collection_replaces_default() -> Result<()> {
    let target = MemoryTarget::new();
    let config = MongoConfig {
        collection: "accounts".to_string(),
        ..Default::default()
    };
    let plan = ProvisionPlan::from_config(&config);

    provision(&target, &plan, &silent()).await?;

    assert_eq!(target.collection_names(), vec!["accounts".to_string()]);
    assert!(!target.collection_exists("auth").await?);
    Ok(())
}

#[tokio::test]
async fn test_second_run_fails_at_create_user() -> Result<()> {
    let target = MemoryTarget::new();
    let plan = default_plan();
    provision(&target, &plan, &silent()).await?;

    let err = provision(&target, &plan, &silent()).await.unwrap_err();

    assert_eq!(err.step(), Step::CreateUser);
    assert!(matches!(err, ProvisionError::CreateUser { .. }));
    let cause = std::error::Error::source(&err).unwrap().to_string();
    assert!(cause.contains("already exists"), "{}", cause);
    // nothing after the failing step ran
    assert_eq!(target.document_count("auth"), 1);
    Ok(())
}

#[tokio::test]
async fn test_rerun_without_user_fails_at_create_collection() -> Result<()> {
    let target = MemoryTarget::new();
    let plan = default_plan();
    provision(&target, &plan, &silent()).await?;

    target.drop_user("user");
    let err = provision(&target, &plan, &silent()).await.unwrap_err();

    assert_eq!(err.step(), Step::CreateCollection);
    // the user created by the failed run is not rolled back
    assert_eq!(target.user_count(), 1);
    assert_eq!(target.document_count("auth"), 1);
    Ok(())
}

#[tokio::test]
async fn test_repeated_insert_duplicates_seed() -> Result<()> {
    let target = MemoryTarget::new();
    let plan = default_plan();
    provision(&target, &plan, &silent()).await?;

    let second_id = target.insert_seed(&plan.collection, &plan.seed).await?;

    assert!(!second_id.is_empty());
    assert_eq!(target.count_seed("auth", &plan.seed).await?, 2);

    let report = verify(&target, &plan).await?;
    assert!(report.is_ok());
    assert_eq!(report.checks[2].detail, "2 matching document(s)");
    Ok(())
}

#[tokio::test]
async fn test_empty_values_are_rejected_by_the_server() -> Result<()> {
    let cases = [
        MongoConfig {
            user: String::new(),
            ..Default::default()
        },
        MongoConfig {
            password: String::new(),
            ..Default::default()
        },
        MongoConfig {
            db: String::new(),
            ..Default::default()
        },
    ];

    for config in cases {
        let target = MemoryTarget::new();
        let plan = ProvisionPlan::from_config(&config);

        let err = provision(&target, &plan, &silent()).await.unwrap_err();

        assert_eq!(err.step(), Step::CreateUser);
        assert_eq!(target.user_count(), 0);
        assert!(target.collection_names().is_empty());
    }
    Ok(())
}

#[tokio::test]
async fn test_progress_is_reported_per_step() -> Result<()> {
    let target = MemoryTarget::new();
    let (tx, mut rx) = mpsc::unbounded_channel();

    provision(&target, &default_plan(), &ProgressReporter::new(Some(tx))).await?;

    let mut messages = vec![];
    while let Ok(msg) = rx.try_recv() {
        messages.push(msg);
    }
    assert_eq!(
        messages,
        vec![
            "[1/3] Creating user".to_string(),
            "[2/3] Creating collection".to_string(),
            "[3/3] Inserting seed document".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_progress_stops_at_failing_step() -> Result<()> {
    let target = MemoryTarget::new();
    target.create_collection("auth").await?;
    let (tx, mut rx) = mpsc::unbounded_channel();

    let err = provision(&target, &default_plan(), &ProgressReporter::new(Some(tx)))
        .await
        .unwrap_err();

    assert_eq!(err.step(), Step::CreateCollection);
    let mut messages = vec![];
    while let Ok(msg) = rx.try_recv() {
        messages.push(msg);
    }
    assert_eq!(messages.len(), 2);
    assert_eq!(target.document_count("auth"), 0);
    Ok(())
}
