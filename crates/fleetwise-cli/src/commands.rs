//! Command handlers

use std::io::{self, Write};
use std::path::Path;

use fleetwise_app::app::{
    describe_vehicle, energize_vehicle, quote_roster, quote_vehicle, service_vehicle,
};
use fleetwise_app::config::Config;
use fleetwise_app::demo::run_demo;
use fleetwise_app::roster::Roster;
use fleetwise_app::tools::{tool_from_name, TOOL_NAMES};
use fleetwise_domain::model::AnyVehicle;
use fleetwise_types::{Error, OutputFormat, Result};
use tracing::info;

use crate::cli::{Cli, Commands, VehicleArgs};
use crate::output::{output_details, output_quote, output_quotes};

/// Execute a parsed command line, writing to stdout
pub fn execute(cli: Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_with(cli, &mut out)?;
    out.flush()?;
    Ok(())
}

/// Execute a parsed command line, writing report output to `out`
pub fn execute_with(cli: Cli, out: &mut dyn Write) -> Result<()> {
    let command = match cli.command {
        None | Some(Commands::Demo) => return run_demo(out),
        Some(command) => command,
    };

    let config_path = match cli.config {
        Some(path) => path,
        None => Config::config_path()?,
    };
    let settings = |format: Option<OutputFormat>| -> Result<(Config, OutputFormat)> {
        let config = Config::load_from(&config_path)?;
        let output_format = format.unwrap_or(config.output_format);
        Ok((config, output_format))
    };

    match command {
        Commands::Demo => run_demo(out),

        Commands::Quote { vehicle, surcharge } => {
            let (config, output_format) = settings(cli.format)?;
            let vehicle = build_vehicle(&vehicle);
            let quote = quote_vehicle(&vehicle, surcharge.unwrap_or(config.display_surcharge));
            output_quote(out, output_format, &quote)
        }

        Commands::Describe { vehicle } => {
            let (_, output_format) = settings(cli.format)?;
            let json = describe_vehicle(&build_vehicle(&vehicle))?;
            output_details(out, output_format, &json)
        }

        Commands::Service { vehicle, tool } => {
            let (config, _) = settings(cli.format)?;
            let tool = tool.unwrap_or(config.default_tool);
            service_vehicle(&build_vehicle(&vehicle), &tool, out)
        }

        Commands::Refuel { vehicle } => energize_vehicle(&build_vehicle(&vehicle), out),

        Commands::Roster { file, surcharge } => {
            let (config, output_format) = settings(cli.format)?;
            cmd_roster(
                out,
                output_format,
                &file,
                surcharge.unwrap_or(config.display_surcharge),
            )
        }

        Commands::Config {
            show,
            init,
            set_surcharge,
            set_output,
            set_tool,
            reset,
        } => cmd_config(
            out,
            &config_path,
            ConfigChanges {
                show,
                init,
                set_surcharge,
                set_output,
                set_tool,
                reset,
            },
        ),
    }
}

fn build_vehicle(args: &VehicleArgs) -> AnyVehicle {
    AnyVehicle::new(args.kind, args.make.clone(), args.model.clone(), args.year)
}

fn cmd_roster(out: &mut dyn Write, format: OutputFormat, file: &Path, surcharge: u32) -> Result<()> {
    info!(file = %file.display(), "quoting roster");
    let roster = Roster::load_from_file(file)?;
    let quotes = quote_roster(&roster, surcharge);
    output_quotes(out, format, &quotes)
}

struct ConfigChanges {
    show: bool,
    init: bool,
    set_surcharge: Option<u32>,
    set_output: Option<OutputFormat>,
    set_tool: Option<String>,
    reset: bool,
}

fn cmd_config(out: &mut dyn Write, path: &Path, changes: ConfigChanges) -> Result<()> {
    if changes.reset {
        let config = Config::default();
        config.save_to(path)?;
        writeln!(out, "Configuration reset to defaults")?;
        writeln!(out, "\n{}", config)?;
        return Ok(());
    }

    if changes.init {
        if path.exists() {
            writeln!(out, "Configuration already exists: {}", path.display())?;
        } else {
            Config::default().save_to(path)?;
            writeln!(out, "Configuration written to {}", path.display())?;
        }
        return Ok(());
    }

    let mut config = Config::load_from(path)?;
    let mut modified = false;

    if let Some(surcharge) = changes.set_surcharge {
        config.display_surcharge = surcharge;
        modified = true;
    }

    if let Some(output_format) = changes.set_output {
        config.output_format = output_format;
        modified = true;
    }

    if let Some(tool) = changes.set_tool {
        // Reject names that would fail later at service time
        let tool = tool_from_name(&tool)
            .map_err(|_| Error::UnknownTool(format!("{} (expected one of: {})", tool, TOOL_NAMES.join(", "))))?
            .name()
            .to_string();
        config.default_tool = tool;
        modified = true;
    }

    if modified {
        config.save_to(path)?;
        writeln!(out, "Configuration updated")?;
    }

    if changes.show || !modified {
        writeln!(out, "{}", config)?;
        writeln!(out, "Config file:       {}", path.display())?;
    }

    Ok(())
}
