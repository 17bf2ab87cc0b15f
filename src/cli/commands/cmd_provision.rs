use anyhow::{Result, anyhow};
use clap::Args;
use colored::Colorize;
use inquire::{Confirm, InquireError};

use crate::{
    cli::{
        Context,
        commands::{ExitOnErr, new_spinner},
    },
    utils::{ProgressReporter, redact_uri},
};

#[derive(Args, Debug, Clone)]
pub struct ProvisionArgs {
    /// Collection to create, overrides the configured one
    #[arg(long)]
    pub collection: Option<String>,

    /// Do not ask for confirmation
    #[arg(short, long, default_value_t = false)]
    pub yes: bool,
}

pub async fn execute(args: &ProvisionArgs, ctx: &Context<'_>) {
    let service = &ctx.services.provision_service;
    let plan = service.plan(args.collection.as_deref());

    println!("{}", "=== Provisioning ===".blue());
    println!("  Server:     {}", redact_uri(&ctx.settings.mongo.uri).bright_cyan());
    println!("  Database:   {}", plan.database().green());
    println!("  User:       {}", plan.user.name.green());
    println!("  Collection: {}", plan.collection.green());
    println!("  Seed:       {}", plan.seed.user.green());

    if !args.yes {
        let answer = Confirm::new("Provisioning is not idempotent and cannot be undone. Continue?")
            .with_default(false)
            .prompt();
        confirmed(answer).exit_on_err("Provisioning not started");
    }

    let (spinner, tx) = new_spinner();
    let res = service
        .provision(&plan, &ProgressReporter::new(Some(tx)))
        .await;
    spinner.finish_and_clear();

    let report = res.exit_on_err("Provisioning failed");

    println!(
        "✅ Created user '{}' on '{}', collection '{}' and seed document {}",
        report.user, report.database, report.collection, report.seed_id
    );
}

/// Only an explicit yes proceeds. A declined or failed prompt is an error so
/// unattended runs without `--yes` exit non-zero.
fn confirmed(answer: Result<bool, InquireError>) -> Result<()> {
    match answer {
        Ok(true) => Ok(()),
        Ok(false)
        | Err(InquireError::OperationCanceled)
        | Err(InquireError::OperationInterrupted) => Err(anyhow!("aborted")),
        Err(InquireError::NotTTY) => Err(anyhow!(
            "no terminal to confirm on, use --yes for non-interactive runs"
        )),
        Err(e) => Err(anyhow!(
            "confirmation failed ({}), use --yes for non-interactive runs",
            e
        )),
    }
}
