use anyhow::Context;
use clap::Parser;
use squawk_gen::app::dispatch;
use squawk_gen::utils::{logger, validation::Validate};
use squawk_gen::{CliConfig, SquawkError};

fn run(cli: &CliConfig) -> anyhow::Result<i32> {
    // File config first, then subcommand flags on top
    let mut config = cli.load_file_config().with_context(|| {
        format!(
            "Failed to load config file '{}'",
            cli.config.as_deref().map(|p| p.display().to_string()).unwrap_or_default()
        )
    })?;
    cli.apply_overrides(&mut config);

    if config.json_logging() {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }

    tracing::info!("Starting squawk-gen");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
        tracing::debug!("Effective config: {:?}", config);
    }

    config.validate().context("Configuration validation failed")?;

    let outcome = dispatch(cli.command.as_ref(), &config)?;
    print!("{}", outcome.output);

    Ok(outcome.exit_code)
}

fn main() {
    let cli = CliConfig::parse();

    let exit_code = match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("❌ {:#}", e);
            match e.downcast_ref::<SquawkError>() {
                Some(err) => {
                    eprintln!("❌ {}: {}", e, err.user_friendly_message());
                    err.exit_code()
                }
                None => {
                    eprintln!("❌ {:#}", e);
                    1
                }
            }
        }
    };

    std::process::exit(exit_code);
}
