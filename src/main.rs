use clap::Parser;
use tallyman::cli::command::{Cli, ColorChoice, Commands};
use tallyman::cli::{chart, output, run, seed, summary};
use tallyman::config::Config;

fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(output::OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    let config = match Config::load_or_default(cli.command.config_path()) {
        Ok(c) => c,
        Err(e) => {
            output::error(&format!("Failed to load config: {e}"));
            std::process::exit(1);
        }
    };

    config.init_logging();

    let result = match &cli.command {
        Commands::Run(args) => run::execute(args, &config),
        Commands::Seed(args) => seed::execute(args, &config),
        Commands::Summary(args) => summary::execute(args, &config),
        Commands::Chart(args) => chart::execute(args, &config),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
