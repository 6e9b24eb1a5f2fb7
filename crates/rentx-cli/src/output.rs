//! Output formatting module

use rentx_app::app::ImportSummary;
use rentx_domain::model::{Car, Rental};
use rentx_types::{OutputFormat, Result};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

pub fn output_rental(output_format: OutputFormat, rental: &Rental) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(rental)?);
        return Ok(());
    }

    println!("\nRental Created");
    println!("==============");
    println!("Rental ID:       {}", rental.id);
    println!("User:            {}", rental.user_id);
    println!("Car:             {}", rental.car_id);
    println!("Start:           {}", rental.start_date.format(DATE_FORMAT));
    println!(
        "Expected return: {}",
        rental.expected_return_date.format(DATE_FORMAT)
    );
    Ok(())
}

pub fn output_rentals(output_format: OutputFormat, rentals: &[Rental]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(rentals)?);
        return Ok(());
    }

    if rentals.is_empty() {
        println!("No rentals found.");
        return Ok(());
    }

    println!(
        "{:<36}  {:<36}  {:<16}  {:<16}  {}",
        "ID", "Car", "Start", "Expected return", "Status"
    );
    for rental in rentals {
        let status = match rental.end_date {
            None => "open".to_string(),
            Some(end) => format!("closed {}", end.format(DATE_FORMAT)),
        };
        println!(
            "{:<36}  {:<36}  {:<16}  {:<16}  {}",
            rental.id,
            rental.car_id,
            rental.start_date.format(DATE_FORMAT),
            rental.expected_return_date.format(DATE_FORMAT),
            status
        );
    }
    Ok(())
}

pub fn output_cars(output_format: OutputFormat, cars: &[Car]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(cars)?);
        return Ok(());
    }

    if cars.is_empty() {
        println!("No cars registered.");
        return Ok(());
    }

    println!(
        "{:<36}  {:<16}  {:<12}  {:<12}  {:>10}  {:>8}",
        "ID", "Name", "Brand", "Plate", "Daily rate", "Fine"
    );
    for car in cars {
        println!(
            "{:<36}  {:<16}  {:<12}  {:<12}  {:>10.2}  {:>8.2}",
            car.id, car.name, car.brand, car.license_plate, car.daily_rate, car.fine_amount
        );
    }
    Ok(())
}

pub fn output_import(output_format: OutputFormat, summary: &ImportSummary) -> Result<()> {
    if output_format == OutputFormat::Json {
        let value = serde_json::json!({
            "created": summary.created,
            "skipped": summary.skipped,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("Imported {} car(s).", summary.created);
    if !summary.skipped.is_empty() {
        println!("Skipped existing plates: {}", summary.skipped.join(", "));
    }
    Ok(())
}
