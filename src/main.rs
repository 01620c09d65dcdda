//! Interactive shell over the launchdeck library.
//!
//! Usage: `launchdeck [--data-dir <dir>] [config.toml]`
//!
//! Reads one command per line from stdin (see `help`), prints results to
//! stdout and errors to stderr. On start the previous session named by the
//! `currentUser` marker is resumed. Quitting leaves the marker in place; only
//! `logout` clears it.

#![allow(clippy::multiple_crate_versions)]

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use launchdeck::app::{execute, Command, Session};
use launchdeck::{initialize, observability, Config};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(about = "Personal launcher for game shortcuts and media files")]
struct Args {
    #[structopt(parse(from_os_str), help = "TOML configuration file")]
    config: Option<PathBuf>,
    #[structopt(
        short = "d",
        long = "data-dir",
        help = "Storage directory, overriding the configuration"
    )]
    data_dir: Option<String>,
}

impl Args {
    fn load_config(&self) -> launchdeck::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(dir) = &self.data_dir {
            config.data_dir = Some(dir.clone());
        }
        Ok(config)
    }
}

fn main() -> ExitCode {
    let args = Args::from_args();

    let config = match args.load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    observability::init_tracing(&config);

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "shell aborted");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> launchdeck::Result<()> {
    let span = tracing::debug_span!("shell");
    let _guard = span.enter();

    let mut launcher = initialize(config)?;
    let mut session: Option<Session> = launcher.resume()?;

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    if let Some(current) = &session {
        writeln!(stdout, "resumed session for {}", current.username())?;
    }

    loop {
        write!(stdout, "{}> ", session.as_ref().map_or("", Session::username))?;
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(Some(Command::Quit)) => break,
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        match execute(&mut launcher, &mut session, command) {
            Ok(lines) => {
                for line in lines {
                    writeln!(stdout, "{line}")?;
                }
            }
            Err(e) => {
                tracing::debug!(error = %e, "command failed");
                eprintln!("{e}");
            }
        }
    }

    Ok(())
}
