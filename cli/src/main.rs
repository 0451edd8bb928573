use std::io::Write;

use anyhow::Error;

use clap::{ArgAction, Parser, Subcommand};

mod sample;
use sample::Sample;

mod summarize;
use summarize::Summarize;

const NAME: &str = env!("CARGO_BIN_NAME");
const VERSION: &str = env!("CARGO_PKG_VERSION");
const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");

/// Tools for sampling ancestral allele frequencies.
#[derive(Debug, Parser)]
#[clap(name = NAME, author = AUTHOR, version = VERSION, about)]
#[clap(subcommand_required = true)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Suppress warnings.
    ///
    /// By default, only warnings are printed. By setting this flag, warnings will be disabled.
    #[arg(short = 'q', long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Verbosity.
    ///
    /// Flag can be set multiply times to increase verbosity, or left unset for quiet mode.
    #[clap(short = 'v', long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Print CLI arguments for debugging.
    #[clap(long, hide = true, global = true)]
    debug: bool,
}

impl Cli {
    pub fn run(self) -> Result<(), Error> {
        if self.debug {
            eprintln!("{self:#?}");
        }

        let level = if self.quiet {
            log::LevelFilter::Off
        } else {
            match self.verbose {
                0 => log::LevelFilter::Warn,
                1 => log::LevelFilter::Info,
                2 => log::LevelFilter::Debug,
                _ => log::LevelFilter::Trace,
            }
        };

        match env_logger::Builder::new()
            .filter_level(level)
            .target(env_logger::Target::Stderr)
            .format(|buf, record| {
                let level = record.level().as_str().to_lowercase();
                let args = record.args();
                writeln!(buf, "[ancpoly {level:>5}] {args}")
            })
            .try_init()
        {
            Ok(()) => (),
            Err(e) => eprintln!("failed to setup logger: {e}"),
        }

        self.command.run()
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    Sample(Sample),
    Summarize(Summarize),
}

impl Command {
    fn run(self) -> Result<(), Error> {
        match self {
            Command::Sample(sample) => sample.run(),
            Command::Summarize(summarize) => summarize.run(),
        }
    }
}

impl TryFrom<Command> for Sample {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Sample(sample) => Ok(sample),
            command => Err(command),
        }
    }
}

impl TryFrom<Command> for Summarize {
    type Error = Command;

    fn try_from(command: Command) -> Result<Self, Self::Error> {
        match command {
            Command::Summarize(summarize) => Ok(summarize),
            command => Err(command),
        }
    }
}

fn main() {
    let cli = Cli::parse();

    match cli.run() {
        Ok(()) => (),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use clap::error::ErrorKind as ClapErrorKind;

    fn try_parse_args(cmd: &str) -> Result<Cli, clap::Error> {
        Parser::try_parse_from(cmd.split_whitespace())
    }

    pub fn try_parse_subcmd<T>(cmd: &str) -> Result<T, clap::Error>
    where
        T: TryFrom<Command>,
        T::Error: std::fmt::Debug,
    {
        try_parse_args(cmd).map(|cli| T::try_from(cli.command).expect("wrong subcommand"))
    }

    pub fn parse_subcmd<T>(cmd: &str) -> T
    where
        T: TryFrom<Command>,
        T::Error: std::fmt::Debug,
    {
        try_parse_subcmd(cmd).expect("failed to parse command")
    }

    #[test]
    fn test_no_subcommand() {
        let result = try_parse_args("ancpoly");

        assert_eq!(
            result.unwrap_err().kind(),
            ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        let result = try_parse_args("ancpoly sample -q -v");

        assert_eq!(result.unwrap_err().kind(), ClapErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_clap_debug_assert() {
        use clap::CommandFactory;

        Cli::command().debug_assert();
    }
}
