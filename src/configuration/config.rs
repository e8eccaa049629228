#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
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
    GeminiToken,
    GeminiURL,
    HealthCheckTimeout,
    Image,
    Model,
    Resume,
}

impl ConfigKey {
    /// Keys that only come from the command line and never from the config
    /// file.
    fn is_cli_only(&self) -> bool {
        return matches!(
            self,
            ConfigKey::ConfigFile | ConfigKey::Image | ConfigKey::Resume
        );
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

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        #[cfg(not(target_os = "macos"))]
        let config_path = dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("careermatch/config.toml");
        #[cfg(target_os = "macos")]
        let config_path = path::PathBuf::from(env::var("HOME").unwrap_or_default())
            .join(".config/careermatch/config.toml");

        let res = match key {
            ConfigKey::GeminiToken => return env::var("API_KEY").unwrap_or_default(),
            ConfigKey::GeminiURL => "https://generativelanguage.googleapis.com",
            ConfigKey::HealthCheckTimeout => "1000",
            ConfigKey::Model => "gemini-2.5-flash",

            // Special
            ConfigKey::ConfigFile => return config_path.to_string_lossy().to_string(),
            ConfigKey::Image => "",
            ConfigKey::Resume => "",
        };

        return res.to_string();
    }

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
            let toml_str = fs::read_to_string(config_path).await?;
            let doc = toml_str.parse::<toml_edit::Document>()?;

            // File keys must name a flag that can be set from a file.
            for (name, _) in doc.iter() {
                let settable = ConfigKey::iter()
                    .any(|key| return !key.is_cli_only() && key.to_string() == name)
                    && cmd
                        .get_arguments()
                        .any(|arg| return arg.get_long() == Some(name));
                if !settable {
                    bail!(format!("config.toml has an unknown key '{name}'"));
                }
            }

            for key in ConfigKey::iter() {
                if key.is_cli_only() {
                    continue;
                }

                if let Some(val) = doc.get(&key.to_string()) {
                    if let Some(val_int) = val.as_integer() {
                        if val_int < 0 {
                            bail!(format!(
                                "config.toml has an invalid value for key '{key}': {val_int}"
                            ));
                        }
                        Config::set(key, &val_int.to_string());
                    } else if let Some(val_str) = val.as_str() {
                        if val_str.is_empty() {
                            continue;
                        }
                        if key == ConfigKey::HealthCheckTimeout && val_str.parse::<u64>().is_err()
                        {
                            bail!(format!(
                                "config.toml has an invalid value for key '{key}': {val_str}"
                            ));
                        }
                        Config::set(key, val_str);
                    } else {
                        bail!(format!(
                            "config.toml has an invalid value for key '{key}', expected a string or a number"
                        ));
                    }
                }
            }
        }

        for key in ConfigKey::iter() {
            for matches in clap_arg_matches.as_slice() {
                if let Ok(Some(val)) = matches.try_get_one::<String>(&key.to_string()) {
                    if val.is_empty() {
                        continue;
                    }
                    Config::set(key, val)
                }
            }
        }

        tracing::debug!(
            gemini_url = Config::get(ConfigKey::GeminiURL),
            gemini_token_set = !Config::get(ConfigKey::GeminiToken).is_empty(),
            model = Config::get(ConfigKey::Model),
            image = Config::get(ConfigKey::Image),
            resume = Config::get(ConfigKey::Resume),
            "config"
        );

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> String {
        let toml_str = ConfigKey::iter()
            .filter_map(|key| {
                if key.is_cli_only() {
                    return None;
                }

                let arg = cmd
                    .get_arguments()
                    .find(|e| return e.get_long() == Some(key.to_string().as_str()))?;

                let mut description = arg.get_help()?.to_string();
                description = description
                    .split("[default:")
                    .next()
                    .unwrap_or_default()
                    .trim()
                    .to_string();

                let mut val = Config::default(key);
                if key == ConfigKey::GeminiToken || val.is_empty() {
                    val = format!("# {key} = \"\"");
                } else if val.parse::<i32>().is_ok() {
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
