#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Shell;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

fn arg_config_file() -> Arg {
    return Arg::new(ConfigKey::ConfigFile.to_string())
        .short('c')
        .long(ConfigKey::ConfigFile.to_string())
        .env("BADROS_CONFIG_FILE")
        .num_args(1)
        .help(format!(
            "Path to configuration file [default: {}]",
            Config::default(ConfigKey::ConfigFile)
        ));
}

fn arg_string(key: ConfigKey, env: &'static str, help: &'static str) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .help(format!("{help} [default: {}]", Config::default(key)));
}

fn arg_log_level() -> Arg {
    return Arg::new(ConfigKey::LogLevel.to_string())
        .long(ConfigKey::LogLevel.to_string())
        .env("BADROS_LOG_LEVEL")
        .num_args(1)
        .value_parser(PossibleValuesParser::new(LOG_LEVELS))
        .help(format!(
            "Verbosity of badros.log [default: {}]",
            Config::default(ConfigKey::LogLevel)
        ));
}

fn arg_skip_boot() -> Arg {
    return Arg::new(ConfigKey::SkipBoot.to_string())
        .long(ConfigKey::SkipBoot.to_string())
        .action(ArgAction::SetTrue)
        .help("Skip the boot sequence and open straight onto the dashboard");
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options")
        .subcommand_required(true)
        .subcommand(Command::new("default").about("Outputs the default configuration file"));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("badros")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(arg_config_file())
        .arg(arg_string(
            ConfigKey::EmailApiUrl,
            "BADROS_EMAIL_API_URL",
            "Base URL of the transactional email API",
        ))
        .arg(arg_string(
            ConfigKey::EmailServiceId,
            "BADROS_EMAIL_SERVICE_ID",
            "Email service identifier",
        ))
        .arg(arg_string(
            ConfigKey::EmailTemplateId,
            "BADROS_EMAIL_TEMPLATE_ID",
            "Email template identifier",
        ))
        .arg(arg_string(
            ConfigKey::EmailPublicKey,
            "BADROS_EMAIL_PUBLIC_KEY",
            "Public key sent as the email API user id",
        ))
        .arg(arg_string(
            ConfigKey::FallbackEmail,
            "BADROS_FALLBACK_EMAIL",
            "Address shown when a message cannot be delivered",
        ))
        .arg(arg_string(
            ConfigKey::RecipientName,
            "BADROS_RECIPIENT_NAME",
            "Name the contact form addresses messages to",
        ))
        .arg(arg_skip_boot())
        .arg(arg_log_level());
}

/// Handles subcommands and loads the configuration. Returns `false` when a
/// subcommand already did its work and the UI should not start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();
    return handle(build(), &matches).await;
}

pub async fn handle(mut cmd: Command, matches: &ArgMatches) -> Result<bool> {
    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                generate(completions, &mut cmd, "badros", &mut io::stdout());
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => {
            if let Some(("default", _)) = subcmd_matches.subcommand() {
                println!("{}", Config::serialize_default(cmd));
            }
            return Ok(false);
        }
        _ => {
            Config::load(cmd, vec![matches]).await?;
        }
    }

    return Ok(true);
}
