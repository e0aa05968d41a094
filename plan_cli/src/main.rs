use chrono::NaiveDate;
use clap::Parser;
use plan_core::*;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "liftplan")]
#[command(about = "Twelve-week training plan day calculator", long_about = None)]
struct Cli {
    /// Calendar date to look up, formatted YYYY-MM-DD
    date: String,
}

fn main() -> ExitCode {
    plan_core::logging::init();

    let cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let date = match NaiveDate::parse_from_str(&cli.date, "%Y-%m-%d") {
        Ok(date) => date,
        Err(_) => {
            eprintln!("Invalid date format. Use YYYY-MM-DD.");
            return ExitCode::FAILURE;
        }
    };

    let program = get_default_program();
    let errors = program.validate();
    if !errors.is_empty() {
        eprintln!("Program validation errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        return ExitCode::FAILURE;
    }

    tracing::debug!(
        "Resolving {} against schedule starting {}",
        date,
        config.schedule.start_date
    );

    match locate(date, &config.schedule) {
        ProgramStatus::NotStarted { starts_on } => {
            println!("Program starts on {}. Today is too early.", starts_on);
            ExitCode::SUCCESS
        }
        ProgramStatus::Completed => {
            println!(
                "The {}-week program has been completed.",
                config.schedule.program_weeks
            );
            ExitCode::SUCCESS
        }
        ProgramStatus::InProgress(position) => {
            let day = prescribe_day(program, &position, &config.schedule);
            print_day(date, &day);
            ExitCode::SUCCESS
        }
    }
}

fn print_day(date: NaiveDate, day: &PrescribedDay) {
    println!();
    println!("--- DAILY WORKOUT ---");
    println!("Date: {}", date.format("%Y-%m-%d"));
    println!("Week: {}  |  Day: {}", day.week, day.title);
    println!("{}", "-".repeat(40));

    for prescription in &day.prescriptions {
        println!("- {}", prescription);
    }

    println!("{}", "-".repeat(40));
    println!("Enjoy your training!");
    println!();
}
