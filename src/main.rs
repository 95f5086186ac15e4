// src/main.rs

use aneka_ui::cli::{Cli, Commands};
use aneka_ui::commands;
use clap::{CommandFactory, Parser};
use colored::Colorize;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(e) => {
            eprintln!("{} cannot determine working directory: {e}", "[error]".red());
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Init { yes, force } => commands::cmd_init(&cwd, yes, force),
        Commands::Add {
            components,
            overwrite,
            skip,
            all,
        } => commands::cmd_add(&cwd, components, overwrite, skip, all),
        Commands::List {
            installed,
            available,
        } => commands::cmd_list(&cwd, installed, available),
        Commands::Diff { component } => commands::cmd_diff(&cwd, &component),
        Commands::Update {
            components,
            all,
            force,
        } => commands::cmd_update(&cwd, components, all, force),
        Commands::Doctor { fix } => commands::cmd_doctor(&cwd, fix),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "[error]".red());
        std::process::exit(1);
    }
}
