//! docquery command-line interface

use clap::{Parser, Subcommand};
use docquery::cli::{inspect, logging, normalize, output};
use std::path::PathBuf;

/// docquery command-line tool
#[derive(Parser)]
#[command(name = "docquery")]
#[command(author, version, about = "Typecast document-database query criteria", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (json, pretty, table)
    #[arg(short = 'f', long, global = true)]
    format: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    color: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Typecast criteria against a schema
    Normalize {
        /// Schema file (JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Criteria file (JSON); read from stdin when omitted
        criteria: Option<PathBuf>,

        /// Criteria given inline as JSON
        #[arg(short, long, conflicts_with = "criteria")]
        inline: Option<String>,

        /// Locale for localized fields
        #[arg(short, long, default_value = "en")]
        locale: String,
    },

    /// Show the fields declared by a schema
    Inspect {
        /// Schema file (JSON)
        schema: PathBuf,
    },
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(&cli.color);

    if let Err(e) = logging::init_logging(cli.verbose) {
        eprintln!("{}", output::format_error(&e));
    }

    let result = match cli.command {
        Commands::Normalize {
            schema,
            criteria,
            inline,
            locale,
        } => {
            let config = normalize::NormalizeConfig {
                schema,
                criteria,
                inline,
                locale,
                verbose: cli.verbose,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            normalize::normalize(config)
        }

        Commands::Inspect { schema } => {
            let config = inspect::InspectConfig {
                schema,
                output_format: cli.format.clone(),
                output_file: cli.output.clone(),
            };
            inspect::inspect(config)
        }
    };

    if let Err(e) = result {
        eprintln!("{}", output::format_error(&e));
        std::process::exit(1);
    }
}
