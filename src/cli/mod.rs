mod commands;

use clap::Parser;
use colored::Colorize;

pub use crate::cli::commands::ExitOnErr;
use crate::cli::commands::{
    Commands, cmd_config, cmd_init, cmd_ping, cmd_provision, cmd_script, cmd_verify, cmd_version,
};
use crate::config::Settings;
use crate::services::AppServices;

pub struct Context<'a> {
    pub settings: &'a Settings,
    pub services: &'a AppServices,
}

#[derive(Parser, Debug)]
#[command(
    name = "mongoseed",
    about = "Provision a MongoDB database with a user, a collection and a seed account",
    long_about = format!(
r#"{} - {}"#,
"MONGOSEED".green().bold(),
"One-shot MongoDB provisioning: readWrite user, collection and guest account."
))]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub async fn execute(&self, ctx: &Context<'_>) {
        match &self.command {
            Commands::Provision(args) => cmd_provision::execute(args, ctx).await,
            Commands::Verify(args) => cmd_verify::execute(args, ctx).await,
            Commands::Ping => cmd_ping::execute(ctx).await,
            Commands::Script(args) => cmd_script::execute(args, ctx).await,
            Commands::Init { action } => cmd_init::execute(action).await,
            Commands::Config => cmd_config::execute(ctx.settings).await,
            Commands::Version(action) => cmd_version::execute(action).await,
        }
    }
}
