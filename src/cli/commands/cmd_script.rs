use std::path::PathBuf;

use clap::Args;

use crate::cli::{Context, commands::ExitOnErr};

#[derive(Args, Debug, Clone)]
pub struct ScriptArgs {
    /// Collection to create, overrides the configured one
    #[arg(long)]
    pub collection: Option<String>,

    /// Write the script to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub async fn execute(args: &ScriptArgs, ctx: &Context<'_>) {
    let service = &ctx.services.provision_service;
    let plan = service.plan(args.collection.as_deref());

    let script = service
        .render_script(&plan)
        .exit_on_err("Failed to render script");

    let Some(path) = &args.output else {
        println!("{}", script);
        return;
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).exit_on_err(&format!(
            "Failed to create directory '{}'",
            parent.display()
        ));
    }
    std::fs::write(path, script)
        .exit_on_err(&format!("Failed to write '{}'", path.display()));

    println!("✅ Generated init script in '{}'", path.display());
}
