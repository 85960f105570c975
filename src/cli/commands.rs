use std::io::{self, BufWriter, Write};
use std::path::Path;

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use tracing::{debug, instrument};

use crate::application::DuplicatePolicy;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::infrastructure::di::{Input, ServiceContainer};
use crate::infrastructure::InfraError;

/// Dispatch the parsed command line.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    if let Some(Commands::Completion { shell }) = &cli.command {
        return _completion(*shell);
    }

    let settings = load_settings(cli)?;
    let container = ServiceContainer::new(settings);
    dispatch(cli, &container)
}

fn dispatch(cli: &Cli, container: &ServiceContainer) -> CliResult<()> {
    match &cli.command {
        None => _render(container, None),
        Some(Commands::Render { file }) => _render(container, file.as_deref()),
        Some(Commands::Check { file }) => _check(container, file.as_deref()),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => _config_show(container),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => _completion(*shell),
    }
}

/// Layered settings with command-line flags on top.
fn load_settings(cli: &Cli) -> CliResult<Settings> {
    let cwd = std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
    let settings = apply_flags(cli, Settings::load(Some(cwd.as_path()))?);
    debug!("settings: {:?}", settings);
    Ok(settings)
}

fn apply_flags(cli: &Cli, mut settings: Settings) -> Settings {
    if let Some(policy) = cli.on_duplicate {
        settings.on_duplicate = policy;
    }
    if cli.lenient {
        settings.strict_fields = false;
    }
    settings
}

#[instrument(skip(container))]
fn _render(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let text = container.read_input(&Input::from_arg(file))?;
    let tree = container.tree_service.render_input(&text)?;

    if container.tree_service.policy() == DuplicatePolicy::Warn {
        for diagnostic in &tree.diagnostics {
            output::warning(diagnostic);
        }
    }

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for line in &tree.lines {
        writeln!(out, "{}", line).map_err(|e| InfraError::io("write output", e))?;
    }
    out.flush().map_err(|e| InfraError::io("write output", e))?;
    Ok(())
}

#[instrument(skip(container))]
fn _check(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let text = container.read_input(&Input::from_arg(file))?;
    let edges = container.tree_service.parse(&text)?;
    let outcome = container.tree_service.inspect(&edges);

    match outcome.tree.as_ref() {
        Some(tree) => {
            output::action("root", &tree.root_name().unwrap_or("<empty>"));
            output::action(
                "shape",
                &format!(
                    "{} nodes, depth {}, {} leaves",
                    tree.len(),
                    tree.depth(),
                    tree.leaf_nodes().len()
                ),
            );
        }
        None => output::action("root", "<empty>"),
    }

    if outcome.diagnostics.is_empty() {
        output::success(&format!("{} edges, nothing dropped", edges.len()));
        return Ok(());
    }
    for diagnostic in &outcome.diagnostics {
        output::failure(diagnostic);
    }
    Err(CliError::Dropped(outcome.diagnostics.len()))
}

fn _config_show(container: &ServiceContainer) -> CliResult<()> {
    print!("{}", container.settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    match global_config_path() {
        Some(path) => output::action("global", &path.display()),
        None => output::warning("no config directory for this platform"),
    }
    let cwd = std::env::current_dir().map_err(|e| InfraError::io("current directory", e))?;
    output::action("local", &local_config_path(&cwd).display());
    Ok(())
}

fn _completion(shell: Shell) -> CliResult<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
    Ok(())
}
