use std::path::Path;

use clap::Subcommand;
use inquire::Confirm;

use crate::{cli::commands::ExitOnErr, utils::get_env_file_with_defaults};

#[derive(Subcommand, Debug)]
pub enum InitCommands {
    /// initialize .env file
    Env {
        /// Overwrite existing .env file
        #[arg(short, long, default_value_t = false)]
        overwrite: bool,
    },
}

pub async fn execute(action: &InitCommands) {
    match action {
        InitCommands::Env { overwrite } => init_env_file(*overwrite).await,
    }
}

async fn init_env_file(overwrite: bool) {
    let env_file =
        get_env_file_with_defaults("env.default.jinja").exit_on_err("Failed to get env file");

    if Path::new(".env").exists() && !overwrite {
        let should_overwrite =
            Confirm::new("A .env file already exists. Do you want to overwrite it?")
                .with_default(false)
                .prompt()
                .unwrap_or(false);

        if !should_overwrite {
            println!("Exiting...");
            return;
        }
    }

    std::fs::write(".env", env_file).exit_on_err("Failed to create .env file");
    println!("✅ Successfully created .env file.");
}
