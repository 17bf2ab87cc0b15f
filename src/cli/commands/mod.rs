pub mod cmd_config;
pub mod cmd_init;
pub mod cmd_ping;
pub mod cmd_provision;
pub mod cmd_script;
pub mod cmd_verify;
pub mod cmd_version;

use clap::Subcommand;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;

use crate::cli::commands::{
    cmd_init::InitCommands, cmd_provision::ProvisionArgs, cmd_script::ScriptArgs,
    cmd_verify::VerifyArgs, cmd_version::VersionCommand,
};

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the user, the collection and the seed document. Run once.
    Provision(ProvisionArgs),

    /// Check that a database has been provisioned
    Verify(VerifyArgs),

    /// Test the configured connection
    Ping,

    /// Render the equivalent mongo shell script instead of connecting
    Script(ScriptArgs),

    /// Initialize application
    Init {
        #[command(subcommand)]
        action: InitCommands,
    },

    /// Print the effective configuration (password hidden)
    Config,

    /// Print version
    Version(VersionCommand),
}

pub trait ExitOnErr<T> {
    fn exit_on_err(self, msg: &str) -> T;
}

impl<T, E: std::fmt::Display> ExitOnErr<T> for Result<T, E> {
    fn exit_on_err(self, msg: &str) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("❌ {}: {:#}", msg, e);
                std::process::exit(1);
            }
        }
    }
}

/// A steady spinner whose message follows whatever is sent on the channel.
pub fn new_spinner() -> (ProgressBar, mpsc::UnboundedSender<String>) {
    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner()
        .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
    {
        spinner.set_style(style);
    }
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));

    let (tx, mut rx) = mpsc::unbounded_channel::<String>();
    let spinner_clone = spinner.clone();
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            spinner_clone.set_message(msg);
        }
    });

    (spinner, tx)
}
