//! # Bistro POS - Terminal Front End
//!
//! Opens one order for the configured table, adds the configured selections
//! from the house menu and prints the invoice.
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()        RUST_LOG filter, logs on stderr               │
//! │  2. AppConfig::load()     defaults → bistro.toml → BISTRO_* env         │
//! │  3. catalog::seed()       house menu                                    │
//! │  4. Order::builder()      reservation + staff + pricing                 │
//! │  5. add_item() × N        copies from the catalog                       │
//! │  6. print_invoice()       receipt or JSON on stdout                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```bash
//! BISTRO_SELECTIONS=101x2,900x1 BISTRO_MEMBER=1 bistro
//! BISTRO_OUTPUT=json RUST_LOG=debug bistro
//! ```

mod catalog;
mod config;
mod error;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;

use bistro_core::{Order, Reservation, Staff};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, OutputFormat};
use crate::error::{CliError, CliResult};

fn main() -> ExitCode {
    init_tracing();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "Run failed");
            ExitCode::FAILURE
        }
    }
}

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=bistro_core=trace` - Trace the domain crate only
/// - Default: INFO, DEBUG for bistro crates
///
/// Logs go to stderr so the receipt on stdout can be piped.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bistro_core=debug,bistro=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> CliResult<()> {
    let config_path = std::env::var_os("BISTRO_CONFIG").map(PathBuf::from);
    let config = AppConfig::load(config_path)?;
    info!(
        table = config.session.table_id,
        staff = config.session.staff_id,
        selections = config.session.selections.len(),
        "Configuration loaded"
    );

    let mut menu = catalog::seed()?;

    let reservation = Reservation::new(config.session.table_id).shared();
    let staff = Rc::new(Staff::new(config.session.staff_id, config.session.staff_name.clone()));
    let mut order = Order::builder()
        .reservation(reservation)
        .staff(staff)
        .pricing(config.pricing)
        .build()?;

    for selection in &config.session.selections {
        let item = menu
            .find_mut(selection.code)
            .ok_or(CliError::UnknownCode(selection.code))?;
        order.add_item(item, selection.quantity)?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if config.session.show_menu {
        writeln!(out, "{}", menu.name())?;
        write!(out, "{}", menu.display())?;
        writeln!(out)?;
    }

    if let Some(invoice) = order.print_invoice(config.session.member) {
        match config.session.output {
            OutputFormat::Text => write!(out, "{}", invoice)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &invoice.summary())?;
                writeln!(out)?;
            }
        }
    }
    out.flush()?;

    Ok(())
}
