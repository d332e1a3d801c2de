use clap::Parser;
use ga4gh_convert::cli::{Args, Commands};
use ga4gh_convert::commands;
use ga4gh_convert::config::Config;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let config = Config::load();

    let result = match args.command {
        Commands::Read {
            record_file,
            stringency,
            format,
            output_file,
        } => commands::read::run(
            record_file,
            stringency.unwrap_or(config.stringency),
            format.unwrap_or(config.format),
            output_file,
        ),
        Commands::Feature {
            record_file,
            stringency,
            format,
            output_file,
        } => commands::feature::run(
            record_file,
            stringency.unwrap_or(config.stringency),
            format.unwrap_or(config.format),
            output_file,
        ),
        Commands::Cigar { cigar, stringency } => {
            commands::cigar::run(cigar, stringency.unwrap_or(config.stringency))
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
