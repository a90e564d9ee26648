use clap::{ArgGroup, Parser, Subcommand};
use themefile_cli::{
    check::run_check_command,
    debug::document_to_json,
    format::run_format_command,
    load_document,
    query::{LocaleMode, lookup},
    validation::validate_locale,
    view::{print_keys, print_sections},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    commands: Commands,
}

/// Supported subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a theme file and report the first error, if any.
    Check {
        /// The theme file to check
        #[arg(short, long)]
        input: String,
    },

    /// List the sections of a theme file.
    Sections {
        /// The theme file to read
        #[arg(short, long)]
        input: String,

        /// Also list the unnamed preamble
        #[arg(long)]
        all: bool,
    },

    /// List the keys of one section.
    Keys {
        /// The theme file to read
        #[arg(short, long)]
        input: String,

        /// Section name
        #[arg(short, long)]
        section: String,

        /// Include keys carrying a locale tag
        #[arg(long)]
        include_localized: bool,
    },

    /// Print the value of one key.
    #[command(group(ArgGroup::new("locale_mode").args(["locale", "localized"])))]
    Get {
        /// The theme file to read
        #[arg(short, long)]
        input: String,

        /// Section name
        #[arg(short, long)]
        section: String,

        /// Key name
        #[arg(short, long)]
        key: String,

        /// Resolve the value for this locale (e.g. de_DE.UTF-8)
        #[arg(long)]
        locale: Option<String>,

        /// Resolve the value for the locale of the environment
        #[arg(long)]
        localized: bool,

        /// Print the value as an integer
        #[arg(long)]
        integer: bool,
    },

    /// Rewrite a theme file in canonical form.
    Format {
        /// The theme file to read
        #[arg(short, long)]
        input: String,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Print the parsed document as JSON.
    Dump {
        /// The theme file to read
        #[arg(short, long)]
        input: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("THEMEFILE_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(args.commands) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(command: Commands) -> Result<(), String> {
    match command {
        Commands::Check { input } => {
            println!("{}", run_check_command(&input)?);
        }
        Commands::Sections { input, all } => {
            let doc = load_document(&input)?;
            print_sections(&doc, all);
        }
        Commands::Keys {
            input,
            section,
            include_localized,
        } => {
            let doc = load_document(&input)?;
            print_keys(&doc, &section, include_localized)?;
        }
        Commands::Get {
            input,
            section,
            key,
            locale,
            localized,
            integer,
        } => {
            let mode = match locale {
                Some(name) => LocaleMode::Preference(validate_locale(&name)?),
                None if localized => LocaleMode::Environment,
                None => LocaleMode::Untagged,
            };
            let doc = load_document(&input)?;
            println!("{}", lookup(&doc, &section, &key, &mode, integer)?);
        }
        Commands::Format { input, output } => {
            let doc = load_document(&input)?;
            run_format_command(&doc, output.as_deref())?;
        }
        Commands::Dump { input } => {
            let doc = load_document(&input)?;
            println!("{}", document_to_json(&doc)?);
        }
    }
    Ok(())
}
