// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use court_booking::{CoreError, NewReservation, ReservationManager};
use court_booking_domain::{
    CourtCatalog, DomainError, Reservation, ReservationId, ReservationPatch, TimeSlot,
    parse_iso_date,
};
use court_booking_persistence::{DEFAULT_LEDGER_PATH, JsonLedgerStore};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use thiserror::Error;
use tracing::error;

/// Court booking - manage court reservations from the command line
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the ledger artifact.
    #[arg(short, long, default_value = DEFAULT_LEDGER_PATH)]
    ledger: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Book a court for a client.
    Create {
        /// Client full name.
        #[arg(long)]
        name: String,
        /// National identity document number.
        #[arg(long)]
        document: String,
        /// Phone number.
        #[arg(long)]
        phone: String,
        /// Email address.
        #[arg(long)]
        email: String,
        /// Court type to book.
        #[arg(long)]
        court: String,
        /// Date, `YYYY-MM-DD`.
        #[arg(long)]
        date: String,
        /// Hour label, `HH:00`.
        #[arg(long)]
        slot: String,
    },
    /// List all reservations in creation order.
    List,
    /// Show a single reservation.
    Show {
        /// The reservation id.
        id: ReservationId,
    },
    /// Edit fields of an existing reservation.
    Edit {
        /// The reservation id.
        id: ReservationId,
        /// New client full name.
        #[arg(long)]
        name: Option<String>,
        /// New national identity document number.
        #[arg(long)]
        document: Option<String>,
        /// New phone number.
        #[arg(long)]
        phone: Option<String>,
        /// New email address.
        #[arg(long)]
        email: Option<String>,
        /// New court type.
        #[arg(long)]
        court: Option<String>,
        /// New date, `YYYY-MM-DD`.
        #[arg(long)]
        date: Option<String>,
        /// New hour label, `HH:00`.
        #[arg(long)]
        slot: Option<String>,
    },
    /// Cancel a reservation.
    Cancel {
        /// The reservation id.
        id: ReservationId,
    },
    /// Check whether a slot is free; without a slot, list all free hours.
    Availability {
        /// Court type.
        court: String,
        /// Date, `YYYY-MM-DD`.
        date: String,
        /// Hour label, `HH:00`.
        slot: Option<String>,
    },
    /// List the configured court types and their hourly rates.
    Courts,
}

/// Errors surfaced to the terminal.
#[derive(Debug, Error)]
enum CliError {
    /// A reservation operation failed.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// An argument failed domain validation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli: Cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(%err, "operation failed");
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let manager: ReservationManager = ReservationManager::new(
        CourtCatalog::default(),
        JsonLedgerStore::new(cli.ledger),
    )?;

    match cli.command {
        Command::Create {
            name,
            document,
            phone,
            email,
            court,
            date,
            slot,
        } => {
            let reservation: Reservation = manager.create(&NewReservation {
                full_name: name,
                national_id: document,
                phone,
                email,
                court_type: court,
                date,
                time_slot: slot,
            })?;
            println!("Created reservation {}", reservation.id);
            print_reservation(&reservation);
        }
        Command::List => {
            let reservations: Vec<Reservation> = manager.list_all();
            if reservations.is_empty() {
                println!("No reservations.");
            }
            for reservation in &reservations {
                print_reservation(reservation);
            }
        }
        Command::Show { id } => {
            let reservation: Reservation = manager.find_by_id(&id)?;
            print_reservation(&reservation);
        }
        Command::Edit {
            id,
            name,
            document,
            phone,
            email,
            court,
            date,
            slot,
        } => {
            let patch: ReservationPatch = ReservationPatch {
                full_name: name,
                national_id: document,
                phone,
                email,
                court_type: court,
                date,
                time_slot: slot,
            };
            let updated: Reservation = manager.edit(&id, &patch)?;
            println!("Updated reservation {}", updated.id);
            print_reservation(&updated);
        }
        Command::Cancel { id } => {
            manager.cancel(&id)?;
            println!("Cancelled reservation {id}");
        }
        Command::Availability { court, date, slot } => {
            let day = parse_iso_date(&date)?;
            if let Some(label) = slot {
                let slot: TimeSlot = TimeSlot::from_str(&label)?;
                if manager.check_availability(&court, day, slot, None) {
                    println!("{court} is available on {date} at {slot}");
                } else {
                    println!("{court} is NOT available on {date} at {slot}");
                }
            } else {
                let free: Vec<String> = manager
                    .catalog()
                    .open_hours()
                    .slots()
                    .into_iter()
                    .filter(|s| manager.check_availability(&court, day, *s, None))
                    .map(|s| s.to_string())
                    .collect();
                if free.is_empty() {
                    println!("No free hours for {court} on {date}");
                } else {
                    println!("Free hours for {court} on {date}: {}", free.join(", "));
                }
            }
        }
        Command::Courts => {
            for court_type in manager.court_types() {
                println!("{court_type}: ${:.2}/hour", manager.rate_for(court_type));
            }
        }
    }

    Ok(())
}

fn print_reservation(reservation: &Reservation) {
    println!(
        "{}  {}  {}  {}  {}  ${:.2}",
        reservation.id,
        reservation.client.full_name(),
        reservation.court_type,
        reservation.date,
        reservation.time_slot,
        reservation.price
    );
}
