//! # Clinic Core
//!
//! Record keeping for a small clinic: patients, doctors, appointments, medicine
//! purchases and payments, held in memory for the life of the process.
//!
//! - [`CatalogStore`] owns every collection and answers identifier lookups
//! - [`appointments`] links a patient and doctor and attaches medicines
//! - [`billing`] totals an appointment and records the payment
//! - [`display`] renders records as text
//!
//! **No presentation concerns**: menus, prompts and input parsing belong in `clinic-cli`.

pub mod appointments;
pub mod billing;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod display;
pub mod entities;
pub mod error;

pub use appointments::{schedule_appointment, AppointmentRequest, ScheduledAppointment};
pub use billing::{appointment_total, record_payment, PaymentRequest};
pub use catalog::CatalogStore;
pub use config::{BillingPolicy, CoreConfig, IdPolicy};
pub use display::Displayable;
pub use error::{ClinicError, ClinicResult, RecordKind};

// Re-export validated value types so callers need only one import path.
pub use clinic_types::{Amount, AmountError, NonEmptyText, TextError};
