//! Command dispatch

use std::io;
use std::path::Path;

use clap::CommandFactory;
use clap_complete::generate;
use tracing::{debug, instrument};

use crate::application::{run_demo, DemoReport, Snapshot};
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::output;
use crate::config::{global_config_path, Settings};

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    match &cli.command {
        Some(Commands::Demo { config }) => _demo(config.as_deref()),
        Some(Commands::Run {
            values,
            delete,
            probe,
            no_render,
        }) => _run(Settings {
            values: values.clone(),
            delete: delete.clone(),
            probe: probe.clone(),
            render: !no_render,
        }),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show { config } => _config_show(config.as_deref()),
            ConfigCommands::Path => _config_path(),
        },
        Some(Commands::Completion { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            generate(*shell, &mut cmd, name, &mut io::stdout());
            Ok(())
        }
        None => Err(CliError::Usage(
            "no command given, try `avltree demo` or `avltree --help`".into(),
        )),
    }
}

#[instrument]
fn _demo(config: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(config)?;
    debug!(?settings, "loaded settings");
    _run(settings)
}

#[instrument(skip_all)]
fn _run(settings: Settings) -> CliResult<()> {
    let report = run_demo(&settings)?;
    print_report(&report);
    Ok(())
}

#[instrument]
fn _config_show(config: Option<&Path>) -> CliResult<()> {
    let settings = Settings::load(config)?;
    output::info(&settings.to_toml()?);
    Ok(())
}

fn _config_path() -> CliResult<()> {
    let path = global_config_path()
        .ok_or_else(|| CliError::InvalidArgs("cannot determine config directory".into()))?;
    output::info(&path.display());
    Ok(())
}

fn print_report(report: &DemoReport) {
    for value in &report.rejected {
        output::warning(&format!("duplicate value {} rejected", value));
    }

    output::header("Constructed tree");
    print_snapshot(&report.before, true);

    for (value, removed) in &report.deletions {
        if *removed {
            output::success(&format!("deleted {}", value));
        } else {
            output::failure(&format!("{} not present, nothing deleted", value));
        }
    }

    output::header("After deletion");
    print_snapshot(&report.after, false);

    output::header("Lookups");
    for (value, found) in &report.probes {
        if *found {
            output::success(&format!("{} exists", value));
        } else {
            output::failure(&format!("{} does not exist", value));
        }
    }
    output::detail(&format!("{} values, valid AVL tree", report.len));
}

fn print_snapshot(snapshot: &Snapshot, all_orders: bool) {
    if let Some(diagram) = &snapshot.diagram {
        for line in diagram.lines() {
            output::detail(&line);
        }
    }
    output::sequence("preorder", &snapshot.preorder);
    if all_orders {
        output::sequence("postorder", &snapshot.postorder);
    }
    output::sequence("inorder", &snapshot.inorder);
    if all_orders {
        output::sequence("dfs", &snapshot.depth_first);
        output::sequence("bfs", &snapshot.breadth_first);
    }
    output::detail(&format!("height {}", snapshot.height));
}
