//! Command handlers

use chrono::{DateTime, Duration, DurationRound, Utc};

use crate::cli::{CarArgs, CarCommands, Cli, Commands, OutputFormat};
use crate::output::{output_cars, output_import, output_rental, output_rentals};
use rentx_app::app::{
    CreateRentalRequest, CreateRentalUseCase, ListRentalsByUserUseCase, RegisterCarUseCase,
};
use rentx_app::config::Config;
use rentx_app::repository::{open_car_repo, open_rental_repo};
use rentx_domain::model::NewCar;
use rentx_domain::provider::DateProvider;
use rentx_domain::repository::CarRepository;
use rentx_infra::fleet_loader::load_fleet_from_file;
use rentx_infra::SystemDateProvider;
use rentx_types::{Error, Result};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    let mut config = Config::load()?;
    if let Some(dir) = cli.store_dir.clone() {
        config.store_dir = Some(dir);
    }
    let format = cli.format.unwrap_or(config.output_format);

    match cli.command {
        Commands::Rent {
            user,
            car,
            days,
            return_at,
        } => cmd_rent(&config, format, user, car, days, return_at),
        Commands::Rentals { user } => cmd_rentals(&config, format, &user),
        Commands::Car { command } => match command {
            CarCommands::Add(args) => cmd_car_add(&config, format, args),
            CarCommands::List => cmd_car_list(&config, format),
            CarCommands::Import { file } => {
                let cars = load_fleet_from_file(&file)?;
                let use_case = RegisterCarUseCase::new(open_car_repo(&config)?);
                let summary = use_case.import(cars)?;
                output_import(format, &summary)
            }
        },
        Commands::Config {
            show,
            set_store_dir,
            set_output,
        } => cmd_config(show, set_store_dir, set_output),
    }
}

fn cmd_rent(
    config: &Config,
    format: OutputFormat,
    user_id: String,
    car_id: String,
    days: Option<u32>,
    return_at: Option<DateTime<Utc>>,
) -> Result<()> {
    let date_provider = SystemDateProvider;
    let expected_return_date = match (return_at, days) {
        (Some(at), _) => at,
        (None, Some(days)) => return_after_days(date_provider.now(), days)?,
        (None, None) => {
            return Err(Error::InvalidInput(
                "either --days or --return-at is required".to_string(),
            ))
        }
    };

    let cars = open_car_repo(config)?;
    if cars.find_by_id(&car_id)?.is_none() {
        return Err(Error::CarNotFound(car_id));
    }

    let use_case = CreateRentalUseCase::new(open_rental_repo(config)?, date_provider);
    let rental = use_case.execute(CreateRentalRequest {
        user_id,
        car_id,
        expected_return_date,
    })?;

    output_rental(format, &rental)
}

/// Return instant `days` after the next whole minute.
///
/// Rounding up keeps a `--days 1` request at or above a full day when the
/// use case reads the clock a moment later.
fn return_after_days(now: DateTime<Utc>, days: u32) -> Result<DateTime<Utc>> {
    let minute = Duration::minutes(1);
    let start = now
        .duration_trunc(minute)
        .map_err(|e| Error::InvalidInput(e.to_string()))?
        + minute;
    Ok(start + Duration::days(i64::from(days)))
}

fn cmd_rentals(config: &Config, format: OutputFormat, user_id: &str) -> Result<()> {
    let use_case = ListRentalsByUserUseCase::new(open_rental_repo(config)?);
    let rentals = use_case.execute(user_id)?;
    output_rentals(format, &rentals)
}

fn cmd_car_add(config: &Config, format: OutputFormat, args: CarArgs) -> Result<()> {
    let use_case = RegisterCarUseCase::new(open_car_repo(config)?);
    let car = use_case.execute(NewCar {
        name: args.name,
        description: args.description,
        brand: args.brand,
        category_id: args.category,
        fine_amount: args.fine_amount,
        daily_rate: args.daily_rate,
        license_plate: args.plate,
    })?;
    output_cars(format, std::slice::from_ref(&car))
}

fn cmd_car_list(config: &Config, format: OutputFormat) -> Result<()> {
    let cars = open_car_repo(config)?.find_all()?;
    output_cars(format, &cars)
}

fn cmd_config(
    show: bool,
    set_store_dir: Option<std::path::PathBuf>,
    set_output: Option<OutputFormat>,
) -> Result<()> {
    let mut config = Config::load()?;
    let mut modified = false;

    if let Some(dir) = set_store_dir {
        config.store_dir = Some(dir);
        modified = true;
    }
    if let Some(format) = set_output {
        config.output_format = format;
        modified = true;
    }

    if modified {
        config.save()?;
        println!("Configuration saved.");
    }

    if show || !modified {
        println!("{}", config);
    }

    Ok(())
}
