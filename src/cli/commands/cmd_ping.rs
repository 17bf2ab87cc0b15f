use crate::{
    cli::{Context, commands::new_spinner},
    utils::redact_uri,
};

pub async fn execute(ctx: &Context<'_>) {
    let uri = redact_uri(&ctx.settings.mongo.uri);

    let (spinner, tx) = new_spinner();
    let _ = tx.send(format!("Pinging '{}'...", uri));

    let result = ctx.services.provision_service.ping().await;
    spinner.finish_and_clear();

    match result {
        Ok(_) => println!("✅ Connection test passed for '{}'", uri),
        Err(e) => {
            eprintln!("❌ Connection test failed for '{}': {:#}", uri, e);
            std::process::exit(1);
        }
    }
}
