use clap::Parser;
use variant_viz::cli::{Args, Commands};
use variant_viz::commands;
use variant_viz::config::{Config, BASE_URL_ENV};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let base_url = args.base_url;

    let result = match args.command {
        Commands::Properties => commands::properties::run(&api_config(base_url)).await,
        Commands::Sequence { fasta, output_file } => {
            commands::sequence::run(&api_config(base_url), fasta, output_file).await
        }
        Commands::Chart {
            property,
            format,
            output_file,
        } => commands::chart::run(&api_config(base_url), property, format, output_file).await,
        Commands::Config {
            api_base_url,
            timeout,
        } => commands::config::run(Config::load_saved(), api_base_url, timeout),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Saved config, then VISUALIZER_API_BASE_URL, then `--base-url`.
fn api_config(base_url: Option<String>) -> Config {
    Config::resolve(Config::load_saved(), std::env::var(BASE_URL_ENV).ok(), base_url)
}
