use clap::Parser;
use envault::{run, Cli, SystemRuntime};

#[tokio::main]
async fn main() {
    // Help, version and usage errors exit here with clap's codes (0 and 2)
    let cli = Cli::parse();

    if let Err(e) = envault_utils::init_tracing(cli.verbose) {
        eprintln!("envault: failed to initialise logging: {e}");
    }

    let code = run(&cli, &SystemRuntime, &mut std::io::stderr()).await;
    std::process::exit(code);
}
