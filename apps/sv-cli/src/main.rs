mod config;
mod error;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use sv_core::{
    Angle, AngleUnit, Capacitance, FormatOptions, Inductance, Resistance, SiPrefix, Temperature,
    TemperatureScale, format_with, group_thousands,
};
use tracing_subscriber::EnvFilter;

use crate::config::{CliConfig, load_config};
use crate::error::{CliError, CliResult};

#[derive(Parser)]
#[command(name = "sv-cli")]
#[command(about = "SI values CLI - format engineering values with metric prefixes", long_about = None)]
struct Cli {
    /// YAML file with default format options
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format a value with an SI prefix and unit symbol
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        /// Unit symbol (e.g., V, Ω, Hz)
        #[arg(short, long, default_value = "")]
        unit: String,
        /// Fractional digits of the mantissa
        #[arg(short, long)]
        decimals: Option<usize>,
        /// Omit the leading space
        #[arg(long)]
        no_space: bool,
    },
    /// Print a value with thousands separators
    Group {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(short, long, default_value_t = 0)]
        decimals: usize,
        /// Separator character (defaults to config, then space)
        #[arg(short, long)]
        separator: Option<char>,
    },
    /// Combine component values in series or parallel
    Combine {
        #[arg(value_enum)]
        component: Component,
        #[arg(value_enum)]
        topology: Topology,
        /// Component values in base units (Ω, F, H)
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<f64>,
        #[arg(short, long)]
        decimals: Option<usize>,
    },
    /// Show a temperature in kelvin, celsius and fahrenheit
    Temp {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long, value_enum, default_value_t = ScaleArg::Celsius)]
        scale: ScaleArg,
        #[arg(short, long, default_value_t = sv_core::temperature::DEFAULT_TEMPERATURE_DECIMALS)]
        decimals: usize,
    },
    /// Show an angle in radians and degrees
    Angle {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long, value_enum, default_value_t = AngleArg::Degrees)]
        unit: AngleArg,
        #[arg(short, long, default_value_t = sv_core::angle::DEFAULT_ANGLE_DECIMALS)]
        decimals: usize,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Component {
    Resistor,
    Capacitor,
    Inductor,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Topology {
    Series,
    Parallel,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ScaleArg {
    Kelvin,
    Celsius,
}

impl From<ScaleArg> for TemperatureScale {
    fn from(s: ScaleArg) -> Self {
        match s {
            ScaleArg::Kelvin => TemperatureScale::Kelvin,
            ScaleArg::Celsius => TemperatureScale::Celsius,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AngleArg {
    Radians,
    Degrees,
}

impl From<AngleArg> for AngleUnit {
    fn from(a: AngleArg) -> Self {
        match a {
            AngleArg::Radians => AngleUnit::Radians,
            AngleArg::Degrees => AngleUnit::Degrees,
        }
    }
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Format {
            value,
            unit,
            decimals,
            no_space,
        } => cmd_format(&config, value, &unit, decimals, no_space),
        Commands::Group {
            value,
            decimals,
            separator,
        } => cmd_group(&config, value, decimals, separator),
        Commands::Combine {
            component,
            topology,
            values,
            decimals,
        } => cmd_combine(&config, component, topology, &values, decimals),
        Commands::Temp {
            value,
            scale,
            decimals,
        } => cmd_temp(value, scale.into(), decimals),
        Commands::Angle {
            value,
            unit,
            decimals,
        } => cmd_angle(value, unit.into(), decimals),
    }
}

fn resolve_options(
    config: &CliConfig,
    decimals: Option<usize>,
    no_space: bool,
) -> FormatOptions {
    let mut options = config.format;
    if let Some(d) = decimals {
        options = options.with_decimals(d);
    }
    if no_space {
        options = options.with_leading_space(false);
    }
    tracing::debug!(?options, "resolved format options");
    options
}

fn warn_if_unrepresentable(value: f64) {
    if !value.is_finite() {
        tracing::warn!(value, "non-finite value, printed literally");
    } else if value != 0.0 && SiPrefix::for_magnitude(value.abs()).is_none() {
        tracing::warn!(value, "value below the smallest SI prefix");
    }
}

fn cmd_format(
    config: &CliConfig,
    value: f64,
    unit: &str,
    decimals: Option<usize>,
    no_space: bool,
) -> CliResult<()> {
    let options = resolve_options(config, decimals, no_space);
    warn_if_unrepresentable(value);
    println!("{}", format_with(value, unit, options));
    Ok(())
}

fn cmd_group(
    config: &CliConfig,
    value: f64,
    decimals: usize,
    separator: Option<char>,
) -> CliResult<()> {
    let separator = separator.unwrap_or(config.separator);
    tracing::debug!(decimals, %separator, "grouping thousands");
    println!("{}", group_thousands(value, decimals, separator));
    Ok(())
}

fn cmd_combine(
    config: &CliConfig,
    component: Component,
    topology: Topology,
    values: &[f64],
    decimals: Option<usize>,
) -> CliResult<()> {
    if values.iter().any(|v| !v.is_finite()) {
        return Err(CliError::Input(
            "component values must be finite".to_string(),
        ));
    }

    let options = resolve_options(config, decimals, false);
    let line = match (component, topology) {
        (Component::Resistor, Topology::Series) => {
            Resistance::new(Resistance::series_all(values)).display_with(options)
        }
        (Component::Resistor, Topology::Parallel) => {
            Resistance::new(Resistance::parallel_all(values)).display_with(options)
        }
        (Component::Capacitor, Topology::Series) => {
            Capacitance::new(Capacitance::series_all(values)).display_with(options)
        }
        (Component::Capacitor, Topology::Parallel) => {
            Capacitance::new(Capacitance::parallel_all(values)).display_with(options)
        }
        (Component::Inductor, Topology::Series) => {
            Inductance::new(Inductance::series_all(values)).display_with(options)
        }
        (Component::Inductor, Topology::Parallel) => {
            Inductance::new(Inductance::parallel_all(values)).display_with(options)
        }
    };
    tracing::debug!(?component, ?topology, count = values.len(), "combined");
    println!("{line}");
    Ok(())
}

fn cmd_temp(value: f64, scale: TemperatureScale, decimals: usize) -> CliResult<()> {
    let t = Temperature::new(sv_core::ensure_finite(value, "temperature")?, scale);
    println!("{}", t.display_kelvin(decimals));
    println!("{}", t.display_celsius(decimals));
    println!("{}", t.display_fahrenheit(decimals));
    Ok(())
}

fn cmd_angle(value: f64, unit: AngleUnit, decimals: usize) -> CliResult<()> {
    let a = Angle::new(sv_core::ensure_finite(value, "angle")?, unit);
    println!("{}", a.display_radians(decimals));
    println!("{}", a.display_degrees(decimals));
    Ok(())
}
