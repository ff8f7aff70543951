use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use std::env;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::debug;
use wordcheck::domain::config::CheckConfig;
use wordcheck::kernel::config::load_config;
use wordcheck_check::{Cli, run, usage};
use wordcheck_logger::{Logger, parse_level};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::try_parse_args(env::args_os());

    let config = load_config::<CheckConfig>().context("Critical: Configuration is malformed")?;

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(parse_level(&config.log.level)?)
        .verbosity(cli.as_ref().map_or(0, |cli| cli.verbose))
        .json(config.log.json)
        .ansi(io::stderr().is_terminal())
        .init()?;

    debug!(
        level = %config.log.level,
        json = config.log.json,
        strict = config.palindrome.strict,
        "Configuration loaded"
    );

    let registry = wordcheck::init(&config)?;

    let code = match cli {
        Ok(cli) => run(&registry, &cli.positional(), &mut io::stdout().lock())?,
        Err(err) if err.kind() == ErrorKind::DisplayVersion => {
            err.print()?;
            0
        },
        Err(err) => {
            debug!(kind = ?err.kind(), "Arguments rejected");
            writeln!(io::stdout().lock(), "{}", usage(&registry))?;
            1
        },
    };

    io::stdout().flush()?;

    Ok(ExitCode::from(code))
}
