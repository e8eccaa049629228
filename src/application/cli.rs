use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::ArgMatches;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::JobImage;
use crate::domain::models::RefineRequest;
use crate::domain::services::actions::help_text;
use crate::infrastructure::refiners::RefinerManager;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

/// Directory holding `debug.log` when tracing is enabled with
/// `RUST_LOG=careermatch`.
pub fn log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("CAREERMATCH_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir()
        .unwrap_or_else(env::temp_dir)
        .join("careermatch");
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

async fn refine_once(as_json: bool) -> Result<()> {
    let image = JobImage::open(&Config::get(ConfigKey::Image))?;
    let resume = fs::read_to_string(Config::get(ConfigKey::Resume)).await?;
    let request = RefineRequest::new(Some(image), &resume)?;

    let result = RefinerManager::get()?
        .refine(&request.image, &request.resume)
        .await?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{}", result.to_markdown());
    }

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    let mut cmd = Command::new("debug");
    cmd = cmd.about("Debug helpers for CareerMatch")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running CareerMatch with environment variable RUST_LOG=careermatch")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );

    return cmd;
}

fn arg_image(required: bool) -> Arg {
    return Arg::new(ConfigKey::Image.to_string())
        .short('i')
        .long(ConfigKey::Image.to_string())
        .num_args(1)
        .required(required)
        .help("Path to a screenshot of the job posting (PNG, JPEG, GIF, WEBP or BMP).");
}

fn arg_resume(required: bool) -> Arg {
    return Arg::new(ConfigKey::Resume.to_string())
        .short('r')
        .long(ConfigKey::Resume.to_string())
        .num_args(1)
        .required(required)
        .help("Path to a plain text file holding your current résumé.");
}

fn subcommand_refine() -> Command {
    return Command::new("refine")
        .about("Tailor a résumé to a job posting without starting the UI. Prints the result to stdout.")
        .arg(arg_image(true))
        .arg(arg_resume(true))
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the raw structured response instead of Markdown.")
                .action(ArgAction::SetTrue),
        );
}

pub fn build() -> Command {
    let commands_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") || line.starts_with("DRAG AND DROP:") {
                return Paint::new(format!("UI {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("careermatch")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(commands_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(subcommand_refine())
        .arg(arg_image(false))
        .arg(arg_resume(false))
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("CAREERMATCH_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::Model.to_string())
                .short('m')
                .long(ConfigKey::Model.to_string())
                .env("CAREERMATCH_MODEL")
                .num_args(1)
                .help(format!("Gemini model that analyzes the posting and rewrites the résumé. [default: {}]", Config::default(ConfigKey::Model)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiURL.to_string())
                .long(ConfigKey::GeminiURL.to_string())
                .env("CAREERMATCH_GEMINI_URL")
                .num_args(1)
                .help(format!("Gemini API URL. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::GeminiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiToken.to_string())
                .long(ConfigKey::GeminiToken.to_string())
                .env("GEMINI_API_KEY")
                .num_args(1)
                .help("Google Gemini API key. Falls back to the API_KEY environment variable.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::HealthCheckTimeout.to_string())
                .long(ConfigKey::HealthCheckTimeout.to_string())
                .env("CAREERMATCH_HEALTH_CHECK_TIMEOUT")
                .num_args(1)
                .help(format!("Time to wait in milliseconds before timing out when checking Gemini is reachable at startup. [default: {}]", Config::default(ConfigKey::HealthCheckTimeout)))
                .global(true),
        );
}

async fn parse_refine(matches: &ArgMatches, refine_matches: &ArgMatches) -> Result<()> {
    Config::load(build(), vec![matches, refine_matches]).await?;
    return refine_once(refine_matches.get_flag("json")).await;
}

pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("refine", refine_matches)) => {
            parse_refine(&matches, refine_matches).await?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
