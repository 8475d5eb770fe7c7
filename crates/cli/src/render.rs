//! Listing output for the view options of the menu.

use std::io::Write;

use clinic_core::constants::RECORD_SEPARATOR;
use clinic_core::{CatalogStore, ClinicResult, Displayable};

use crate::error::CliResult;

/// How listings are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub fn write_patients<W: Write>(
    out: &mut W,
    store: &CatalogStore,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, &store.patients().collect::<Vec<_>>()),
        OutputFormat::Text => {
            for patient in store.patients() {
                writeln!(out, "{}\n", patient.display_summary())?;
            }
            Ok(())
        }
    }
}

pub fn write_doctors<W: Write>(
    out: &mut W,
    store: &CatalogStore,
    format: OutputFormat,
) -> CliResult<()> {
    match format {
        OutputFormat::Json => write_json(out, &store.doctors().collect::<Vec<_>>()),
        OutputFormat::Text => {
            for doctor in store.doctors() {
                writeln!(out, "{}\n", doctor.display_summary())?;
            }
            Ok(())
        }
    }
}

pub fn write_appointments<W: Write>(
    out: &mut W,
    store: &CatalogStore,
    format: OutputFormat,
) -> CliResult<()> {
    let views = store
        .appointments()
        .map(|a| store.appointment_view(a))
        .collect::<ClinicResult<Vec<_>>>()?;

    match format {
        OutputFormat::Json => write_json(out, &views),
        OutputFormat::Text => {
            for view in &views {
                writeln!(out, "{}", view.display_summary())?;
                writeln!(out, "{RECORD_SEPARATOR}")?;
            }
            Ok(())
        }
    }
}

pub fn write_payments<W: Write>(
    out: &mut W,
    store: &CatalogStore,
    format: OutputFormat,
) -> CliResult<()> {
    let breakdowns = store
        .payments()
        .map(|p| store.payment_breakdown(p))
        .collect::<ClinicResult<Vec<_>>>()?;

    match format {
        OutputFormat::Json => write_json(out, &breakdowns),
        OutputFormat::Text if breakdowns.is_empty() => {
            writeln!(out, "No payments recorded.")?;
            Ok(())
        }
        OutputFormat::Text => {
            for breakdown in &breakdowns {
                writeln!(out, "{}", breakdown.display_summary())?;
                writeln!(out, "{RECORD_SEPARATOR}")?;
            }
            Ok(())
        }
    }
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(out: &mut W, value: &T) -> CliResult<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
