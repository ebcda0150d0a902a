#![deny(clippy::all)]
use bili_emote_downloader::{run_from_args, Config};
use std::process::exit;

#[tokio::main]
async fn main() {
    env_logger::builder().format_timestamp(None).init();

    let code = run_from_args(std::env::args_os(), Config::default()).await;

    exit(code)
}
