use clap::Args;
use clap::crate_version;

#[derive(Args, Debug)]
pub struct VersionCommand;

pub async fn execute(_: &VersionCommand) {
    println!("mongoseed version: {}", crate_version!());
}
