use mongoseed::{
    cli::{Cli, Context, ExitOnErr},
    config::Settings,
    services::AppServices,
    utils,
};

#[tokio::main]
async fn main() {
    let settings = Settings::new().exit_on_err("Failed to load configuration");
    let cli = Cli::parse_args();

    let _log_guard = utils::logger::init_logging(&settings.logs);

    let services = AppServices::new(&settings);

    cli.execute(&Context {
        settings: &settings,
        services: &services,
    })
    .await;
}
