#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    EmailApiUrl,
    EmailServiceId,
    EmailTemplateId,
    EmailPublicKey,
    FallbackEmail,
    RecipientName,
    SkipBoot,
    LogLevel,
}

impl ConfigKey {
    fn is_flag(&self) -> bool {
        return *self == ConfigKey::SkipBoot;
    }
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn get_bool(key: ConfigKey) -> bool {
        return Config::get(key) == "true";
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    fn default_config_path() -> path::PathBuf {
        #[allow(unused_assignments)]
        let mut config_dir = dirs::config_dir();

        #[cfg(target_os = "macos")]
        {
            config_dir = dirs::home_dir().map(|home| home.join(".config"));
        }

        #[cfg(target_os = "linux")]
        {
            if config_dir.is_none() {
                config_dir = dirs::config_local_dir();
            }
        }

        return config_dir
            .unwrap_or_else(|| path::PathBuf::from("."))
            .join("badros/config.toml");
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = Config::default_config_path();

        let res = match key {
            ConfigKey::EmailApiUrl => "https://api.emailjs.com",
            ConfigKey::EmailServiceId => "service_badros",
            ConfigKey::EmailTemplateId => "template_contact",
            ConfigKey::EmailPublicKey => "",
            ConfigKey::FallbackEmail => "badr@badros.dev",
            ConfigKey::RecipientName => "Badr",
            ConfigKey::SkipBoot => "false",
            ConfigKey::LogLevel => "info",

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
        };

        return res.to_string();
    }

    /// Resolves every key from its default, then the TOML file, then the
    /// command line, each layer overriding the one before.
    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let mut config_file = Config::default(ConfigKey::ConfigFile);
        for matches in clap_arg_matches.as_slice() {
            if let Ok(Some(arg_config_file)) =
                matches.try_get_one::<String>(&ConfigKey::ConfigFile.to_string())
            {
                config_file = arg_config_file.to_string();
            }
        }

        let config_path = path::PathBuf::from(config_file);
        if config_path.exists() {
            let toml_str = fs::read_to_string(&config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            for key in ConfigKey::iter() {
                let Some(val) = doc.get(&key.to_string()) else {
                    continue;
                };

                // Use clap value parsers to do validation.
                let mut possible_values = vec![];
                if let Some(arg) = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                {
                    possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name().to_string())
                        .collect::<Vec<String>>();
                }

                if let Some(val_bool) = val.as_bool() {
                    Config::set(key, &val_bool.to_string());
                } else if let Some(val_int) = val.as_integer() {
                    Config::set(key, &val_int.to_string());
                } else if let Some(val_str) = val.as_str() {
                    if val_str.is_empty() {
                        continue;
                    }
                    if !possible_values.is_empty()
                        && !possible_values.contains(&val_str.to_string())
                    {
                        bail!(format!("config.toml has an invalid value for key '{key}': {val_str}\nPossible values are: {}", possible_values.join(", ")));
                    }
                    Config::set(key, val_str);
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if key.is_flag() {
                    if let Ok(Some(true)) = matches.try_get_one::<bool>(&key.to_string()) {
                        Config::set(key, "true");
                    }
                    continue;
                }

                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            config_file = %config_path.display(),
            email_api_url = Config::get(ConfigKey::EmailApiUrl),
            recipient_name = Config::get(ConfigKey::RecipientName),
            skip_boot = Config::get(ConfigKey::SkipBoot),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key == ConfigKey::ConfigFile {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg
                    .get_help()
                    .map(|help| return help.to_string())
                    .unwrap_or_default();

                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                if !arg.get_possible_values().is_empty() && !key.is_flag() {
                    let possible_values = arg
                        .get_possible_values()
                        .iter()
                        .map(|e| return e.get_name())
                        .collect::<Vec<_>>()
                        .join(", ");
                    description = format!("{description} [possible values: {}]", possible_values);
                }

                let mut val = Config::default(key);
                if val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() || val.parse::<bool>().is_ok() {
                    val = format!("{key} = {val}");
                } else {
                    val = format!("{key} = \"{val}\"");
                }

                return Some(format!("# {description}\n{val}"));
            })
            .collect::<Vec<String>>()
            .join("\n\n");

        return toml_str;
    }
}
