//! The command line interface for carbon-calc.
use crate::activity::{CalculationInput, PhysicalActivity, VirtualActivity};
use crate::calculator::{Activity, sum_contributions};
use crate::factors::{CommuteMethod, EMISSION_FACTORS, EventType};
use crate::log;
use crate::report::{write_factors, write_report};
use crate::settings::Settings;
use crate::units::{Dimensionless, Distance, Energy, Quantity};
use ::log::{debug, info};
use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

pub mod settings;
use settings::SettingsSubcommands;

/// The command line interface for carbon-calc.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// The available commands.
    #[command(subcommand)]
    command: Option<Commands>,
    /// Flag to provide the CLI docs as markdown
    #[arg(long, hide = true)]
    markdown_help: bool,
}

/// Options for the calculate command
#[derive(Args)]
pub struct CalculateOpts {
    /// Whether to show the emissions from each activity as well as the total
    #[arg(long)]
    pub breakdown: bool,
}

/// Activity quantities for a physical event
#[derive(Args)]
pub struct PhysicalArgs {
    /// Air travel distance (km)
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    pub air_travel_distance: f64,
    /// Car travel distance (km)
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    pub car_travel_distance: f64,
    /// Nights of accommodation per attendee
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub accommodation: f64,
    /// Number of participants
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub participants: f64,
    /// Commute method ("Shuttle/Public Transport" or "Car")
    #[arg(long, default_value_t = CommuteMethod::default().to_string())]
    pub commute_method: String,
    /// Commute distance (km)
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    pub commute_distance: f64,
}

impl From<PhysicalArgs> for PhysicalActivity {
    fn from(args: PhysicalArgs) -> Self {
        Self {
            air_travel_distance: Distance(args.air_travel_distance),
            car_travel_distance: Distance(args.car_travel_distance),
            accommodation: Dimensionless(args.accommodation),
            participants: Quantity(args.participants),
            commute_method: args.commute_method,
            commute_distance: Distance(args.commute_distance),
        }
    }
}

/// Activity quantities for a virtual event
#[derive(Args)]
pub struct VirtualArgs {
    /// Electricity consumption (kWh)
    #[arg(long, default_value_t = 1000.0, allow_negative_numbers = true)]
    pub electricity_consumption: f64,
    /// Internet provider emission units
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub internet_provider: f64,
    /// Web cluster server emission units
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub web_cluster_servers: f64,
    /// Personal computer emission units
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub personal_computers: f64,
    /// Mobile device emission units
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    pub mobile_devices: f64,
}

impl From<VirtualArgs> for VirtualActivity {
    fn from(args: VirtualArgs) -> Self {
        Self {
            electricity_consumption: Energy(args.electricity_consumption),
            internet_provider: Quantity(args.internet_provider),
            web_cluster_servers: Quantity(args.web_cluster_servers),
            personal_computers: Quantity(args.personal_computers),
            mobile_devices: Quantity(args.mobile_devices),
        }
    }
}

/// The available commands.
#[derive(Subcommand)]
enum Commands {
    /// Calculate the emissions for an event.
    Calculate {
        /// The kind of event, or a file describing it.
        #[command(subcommand)]
        event: EventSubcommands,
    },
    /// Show the emission factors for an event type.
    Factors {
        /// The type of event.
        event_type: EventType,
    },
    /// Manage the program settings file.
    Settings {
        /// The available subcommands for managing the settings file.
        #[command(subcommand)]
        subcommand: SettingsSubcommands,
    },
}

/// Ways of describing the event to calculate emissions for
#[derive(Subcommand)]
enum EventSubcommands {
    /// A physical event.
    Physical {
        /// Activity quantities
        #[command(flatten)]
        activity: PhysicalArgs,
        /// Other calculation options
        #[command(flatten)]
        opts: CalculateOpts,
    },
    /// A virtual event.
    Virtual {
        /// Activity quantities
        #[command(flatten)]
        activity: VirtualArgs,
        /// Other calculation options
        #[command(flatten)]
        opts: CalculateOpts,
    },
    /// An event described in a TOML file.
    File {
        /// Path to the event file.
        path: PathBuf,
        /// Other calculation options
        #[command(flatten)]
        opts: CalculateOpts,
    },
}

impl Commands {
    /// Execute the supplied CLI command
    fn execute(self) -> Result<()> {
        match self {
            Self::Calculate { event } => match event {
                EventSubcommands::Physical { activity, opts } => handle_calculate_command(
                    &CalculationInput::Physical(activity.into()),
                    &opts,
                    None,
                ),
                EventSubcommands::Virtual { activity, opts } => handle_calculate_command(
                    &CalculationInput::Virtual(activity.into()),
                    &opts,
                    None,
                ),
                EventSubcommands::File { path, opts } => {
                    handle_calculate_file_command(&path, &opts, None)
                }
            },
            Self::Factors { event_type } => handle_factors_command(event_type),
            Self::Settings { subcommand } => subcommand.execute(),
        }
    }
}

/// Parse CLI arguments and start carbon-calc
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    // Invoked as: `$ carbon-calc --markdown-help`
    if cli.markdown_help {
        clap_markdown::print_help_markdown::<Cli>();
        return Ok(());
    }

    let Some(command) = cli.command else {
        // Output program help
        let help_str = Cli::command().render_long_help().to_string();
        println!("{help_str}");
        return Ok(());
    };

    command.execute()
}

/// Load program settings and initialise the logger
fn init_program(settings: Option<Settings>, opts: &CalculateOpts) -> Result<Settings> {
    // Load program settings, if not provided
    let mut settings = if let Some(settings) = settings {
        settings
    } else {
        Settings::load().context("Failed to load settings.")?
    };

    // This setting can be overridden by command-line argument
    if opts.breakdown {
        settings.show_breakdown = true;
    }

    // Initialise program logger
    log::init(&settings.log_level).context("Failed to initialise logging.")?;

    Ok(settings)
}

/// Handle the `calculate physical` and `calculate virtual` commands.
pub fn handle_calculate_command(
    input: &CalculationInput,
    opts: &CalculateOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = init_program(settings, opts)?;
    write_calculation(&mut io::stdout().lock(), input, settings.show_breakdown)
}

/// Handle the `calculate file` command.
pub fn handle_calculate_file_command(
    file_path: &Path,
    opts: &CalculateOpts,
    settings: Option<Settings>,
) -> Result<()> {
    let settings = init_program(settings, opts)?;

    let input = CalculationInput::from_path(file_path).context("Failed to load event.")?;
    info!("Loaded event from {}", file_path.display());

    write_calculation(&mut io::stdout().lock(), &input, settings.show_breakdown)
}

/// Handle the `factors` command.
fn handle_factors_command(event_type: EventType) -> Result<()> {
    write_factors(&mut io::stdout().lock(), EMISSION_FACTORS.factors(event_type))?;

    Ok(())
}

/// Calculate the emissions for an event and write a report.
///
/// # Arguments
///
/// * `out` - Where to write the report
/// * `input` - The event to calculate emissions for
/// * `show_breakdown` - Whether to include emissions from each activity in the report
pub fn write_calculation<W: Write>(
    out: &mut W,
    input: &CalculationInput,
    show_breakdown: bool,
) -> Result<()> {
    info!("Calculating emissions for {} event", input.event_type());
    let contributions = input
        .contributions(&EMISSION_FACTORS)
        .context("Failed to calculate emissions.")?;
    let total = sum_contributions(&contributions);
    debug!("Calculated total emissions: {total} kg CO2e");

    write_report(
        out,
        EMISSION_FACTORS.factors(input.event_type()),
        total,
        show_breakdown.then_some(contributions.as_slice()),
    )?;

    Ok(())
}
