mod verify;

use ash::vk;
use clap::{Parser, Subcommand, ValueEnum};
use metavk_core::config::{default_config_path, LoaderConfig};
use metavk_loader::{Level, Loader, LoaderOptions};
use tracing::info;

#[derive(Parser)]
#[command(name = "metavk")]
#[command(about = "metavk - Vulkan meta-loader inspection tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the Vulkan loader and print the instance version it reports
    Version {
        /// Configuration file path (default: system config, then ./metavk.toml)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// List the entry points metavk knows about
    Symbols {
        /// Only list entry points of this level
        #[arg(short, long)]
        level: Option<LevelArg>,

        /// Only list entry points the configured profile enables
        #[arg(long)]
        enabled_only: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file path (default: system config, then ./metavk.toml)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Check that the Vulkan loader can be opened and entry points resolved
    Verify {
        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Configuration file path (default: system config, then ./metavk.toml)
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LevelArg {
    Loader,
    Instance,
    Device,
}

impl From<LevelArg> for Level {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Loader => Level::Loader,
            LevelArg::Instance => Level::Instance,
            LevelArg::Device => Level::Device,
        }
    }
}

fn main() -> anyhow::Result<()> {
    metavk_common::init_logging();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version { config } => {
            let config = load_config(config);
            let options = LoaderOptions::from_config(&config)?;

            let mut loader = Loader::new(options);
            // SAFETY: candidates come from the platform defaults or the config file.
            unsafe { loader.initialize()? };
            info!("initialized loader from {}", loader.library_name().unwrap_or("?"));

            let version = loader.instance_version();
            println!("Library:          {}", loader.library_name().unwrap_or("?"));
            println!("Platform:         {}", metavk_common::platform::platform_name());
            println!("Instance version: {}", format_version(version));
            println!(
                "Profile version:  {}",
                format_version(loader.profile().api_version())
            );

            loader.finalize();
        }

        Commands::Symbols {
            level,
            enabled_only,
            json,
            config,
        } => {
            let profile = if enabled_only {
                Some(LoaderOptions::from_config(&load_config(config))?.profile)
            } else {
                None
            };

            let level = level.map(Level::from);
            let entries: Vec<_> = metavk_registry::entry_points()
                .filter(|e| level.map_or(true, |l| e.level == l))
                .filter(|e| profile.as_ref().map_or(true, |p| p.enables(&e.requires)))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                for entry in &entries {
                    println!("{:<48} {:<9} {}", entry.name, entry.level, entry.requires);
                }
                println!();
                println!("{} entry point(s)", entries.len());
            }
        }

        Commands::Verify { json, config } => {
            let config_path = config.unwrap_or_else(default_config_path);
            verify::run_verify(&config_path, json)?;
        }
    }

    Ok(())
}

fn load_config(path: Option<String>) -> LoaderConfig {
    let path = path.unwrap_or_else(default_config_path);
    LoaderConfig::load_or_default(path).with_env_overrides()
}

pub(crate) fn format_version(version: u32) -> String {
    if version == 0 {
        return "unknown".to_string();
    }
    format!(
        "{}.{}.{}",
        vk::api_version_major(version),
        vk::api_version_minor(version),
        vk::api_version_patch(version)
    )
}
