//! Command-line entry point.
//!
//! # Responsibility
//! - Load a site config, build the page state and print rendered cards or a
//!   JSON snapshot of the project list.
//! - Exercise the add-project form path without a browser.

use clap::{Parser, Subcommand};
use portfolio_core::{core_version, init_logging, PortfolioApi, PortfolioConfig, ProjectForm};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "portfolio", version, about = "Render and manage portfolio project cards")]
struct Cli {
    /// JSON site config with seed projects and filter tags.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Viewport width used for card and toast layout.
    #[arg(long, global = true)]
    width: Option<u32>,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<String>,

    #[arg(long, global = true, default_value_t = portfolio_core::default_log_level().to_string())]
    log_level: String,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the visible card markup.
    Render {
        /// Technology filter token; `all` shows every card.
        #[arg(long, default_value = "all")]
        filter: String,
    },
    /// Print the project list as JSON.
    List,
    /// Validate and add one project, then print the list as JSON.
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        /// Comma-separated technology names.
        #[arg(long, default_value = "")]
        technologies: String,
        #[arg(long, default_value = "")]
        image: String,
        #[arg(long, default_value = "")]
        github: String,
        #[arg(long, default_value = "")]
        live: String,
    },
    /// Print the available filter tokens.
    Filters,
    /// Print the core version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        init_logging(&cli.log_level, log_dir)?;
    }

    let mut config = match cli.config.as_ref() {
        Some(path) => PortfolioConfig::load(path).map_err(|err| err.to_string())?,
        None => PortfolioConfig::default(),
    };
    if let Some(width) = cli.width {
        config.viewport_width = width;
    }
    let mut api = PortfolioApi::from_config(&config);

    match cli.command.unwrap_or(Command::Render {
        filter: "all".to_string(),
    }) {
        Command::Render { filter } => {
            let visible = api.filter_projects(&filter);
            log::info!(
                "event=cli_render module=cli visible={visible} device={}",
                api.device_class()
            );
            println!("{}", api.render_html());
        }
        Command::List => print_json(&api)?,
        Command::Add {
            title,
            description,
            technologies,
            image,
            github,
            live,
        } => {
            let mut form = ProjectForm {
                title,
                description,
                image,
                technologies,
                github,
                live,
            };
            api.submit_project_form(&mut form).map_err(|err| {
                err.errors
                    .iter()
                    .map(|field| field.message.as_str())
                    .collect::<Vec<_>>()
                    .join("; ")
            })?;
            if let Some(toast) = api.notifications().last() {
                eprintln!("{}", toast.message);
            }
            print_json(&api)?;
        }
        Command::Filters => {
            for token in api.filter_tokens() {
                println!("{token}");
            }
        }
        Command::Version => println!("portfolio_core {}", core_version()),
    }
    Ok(())
}

fn print_json(api: &PortfolioApi) -> Result<(), String> {
    let json = serde_json::to_string_pretty(&api.get_projects())
        .map_err(|err| format!("failed to serialize projects: {err}"))?;
    println!("{json}");
    Ok(())
}
