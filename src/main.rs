use clap::{value_parser, Arg, ArgAction, Command}; // Command-line argument parsing
use log::{info, LevelFilter};
use std::path::PathBuf;
use std::process;

use user_directory::cli::{run_session, TerminalPrompter};
use user_directory::utils::logging::initialize_logging;
use user_directory::{Directory, DirectoryConfig, HashScheme};

fn build_cli() -> Command {
    Command::new("user-directory")
        .version("0.1.0")
        .about("In-memory user directory driven by a text menu")
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("JSON configuration file"),
        )
        .arg(
            Arg::new("min-password-length")
                .long("min-password-length")
                .value_name("N")
                .value_parser(value_parser!(usize))
                .help("Minimum password length in characters"),
        )
        .arg(
            Arg::new("salted")
                .long("salted")
                .action(ArgAction::SetTrue)
                .help("Hash passwords with a per-user salt"),
        )
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf))
                .help("Where to write log records"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Enable debug logging"),
        )
}

// File settings first, then command-line overrides
fn load_config(matches: &clap::ArgMatches) -> Result<DirectoryConfig, Box<dyn std::error::Error>> {
    let mut config = match matches.get_one::<PathBuf>("config") {
        Some(path) => DirectoryConfig::load(path)?,
        None => DirectoryConfig::default(),
    };

    if let Some(min) = matches.get_one::<usize>("min-password-length") {
        config.min_password_length = *min;
    }
    if matches.get_flag("salted") {
        config.hash_scheme = HashScheme::SaltedPbkdf2Sha256;
    }
    if let Some(path) = matches.get_one::<PathBuf>("log-file") {
        config.log_file = path.clone();
    }
    if matches.get_flag("verbose") {
        config.verbose = true;
    }

    config.validate()?;
    Ok(config)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let matches = build_cli().get_matches();
    let config = load_config(&matches)?;

    let level = if config.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    initialize_logging(&config.log_file, level)?;
    info!(
        "Starting directory: min_password_length={}, hash_scheme={:?}",
        config.min_password_length, config.hash_scheme
    );

    let mut directory = Directory::from_config(&config);
    let mut prompter = TerminalPrompter;
    run_session(&mut directory, &mut prompter)?;

    info!("Session ended with {} registered user(s)", directory.len());
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
