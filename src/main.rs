//! Kiln compiler CLI entry point.

mod cli;

use std::path::PathBuf;

use clap::Parser;
use cli::{Cli, Command};
use kiln::{CompilationState, Config, KilnError, KilnResult, Module, SourceLocation};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("KILN_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Resolve {
            modules,
            include,
            extension,
            color,
        } => {
            let mut config = Config::new();
            config.source_extension = extension;
            config.color = color;
            for directory in include {
                config.add_source_directory(directory);
            }

            let state = resolve_modules(config, &modules);
            if state.has_diagnostics() {
                state.display_diagnostics();
                std::process::exit(1);
            }
        }
    }
}

fn resolve_modules(config: Config, names: &[String]) -> CompilationState {
    let mut state = CompilationState::new(config);
    let origin = SourceLocation::start_of("<command line>");

    for name in names {
        if state.module_exists(name) {
            continue;
        }

        let relative = state.config().relative_path_for(name);
        match load_module(&state, name, relative) {
            Ok(module) => {
                println!("{} -> {}", module.name, module.path.display());
                state.store_module(module);
            }
            Err(KilnError::ModuleNotFound(error)) => {
                tracing::debug!(module = %name, %error, "module not found");
                state
                    .diagnostics_mut()
                    .module_not_found_error(name, origin.clone());
            }
            Err(error) => {
                state
                    .diagnostics_mut()
                    .error(format!("The module {name} could not be read: {error}"), origin.clone());
            }
        }
    }

    state
}

fn load_module(state: &CompilationState, name: &str, relative: PathBuf) -> KilnResult<Module> {
    let path = state.find_module_path(relative)?;
    let source = std::fs::read_to_string(&path)?;
    Ok(Module::new(name, path).with_source(source))
}
