use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = ohmled::cli::Cli::parse();
    ohmled::init_logging(cli.verbose);
    let exit_code = ohmled::run(cli).await;
    std::process::exit(exit_code);
}
