use clap::Args;
use colored::*;
use tabled::{
    Table, Tabled,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::cli::{Context, commands::ExitOnErr};

#[derive(Args, Debug, Clone)]
pub struct VerifyArgs {
    /// Collection to check, overrides the configured one
    #[arg(long)]
    pub collection: Option<String>,
}

#[derive(Tabled)]
struct CheckRow {
    #[tabled(rename = "Check")]
    name: String,

    #[tabled(rename = "Status")]
    status: String,

    #[tabled(rename = "Detail")]
    detail: String,
}

pub async fn execute(args: &VerifyArgs, ctx: &Context<'_>) {
    let service = &ctx.services.provision_service;
    let plan = service.plan(args.collection.as_deref());

    let report = service
        .verify(&plan)
        .await
        .exit_on_err("Verification could not run");

    println!(
        "{}",
        format!("=== Verification of '{}' ===", plan.database()).blue()
    );

    let rows: Vec<CheckRow> = report
        .checks
        .iter()
        .map(|c| CheckRow {
            name: c.name.bright_white().to_string(),
            status: if c.passed {
                "PASS".green().to_string()
            } else {
                "FAIL".red().to_string()
            },
            detail: c.detail.bright_black().to_string(),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::rounded())
        .with(Modify::new(Rows::new(1..)).with(Alignment::left()))
        .to_string();
    println!("{}", table);

    report.into_result().exit_on_err("Verification failed");
    println!("✅ Database '{}' is provisioned", plan.database());
}
