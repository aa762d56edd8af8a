//! CLI entry point for easyjump.

mod cli;

use clap::Parser;
use easyjump::config::resolve_settings;
use easyjump::error::LoadError;
use easyjump::host::{DryRunHost, TmuxHost};
use easyjump::logging;
use easyjump::plugin::{load_plugin, LoadReport};

// Every tmux call is awaited before the next one starts; one thread is enough.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    if let Err(e) = run(&args).await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run(args: &cli::Args) -> Result<LoadReport, LoadError> {
    let settings = resolve_settings(args.overrides())?;
    let tmux = TmuxHost::new(settings.tmux_program.clone(), settings.socket_name.clone());

    if args.dry_run {
        let host = DryRunHost::stdout(tmux, args.format);
        load_plugin(&host, &settings).await
    } else {
        load_plugin(&tmux, &settings).await
    }
}
