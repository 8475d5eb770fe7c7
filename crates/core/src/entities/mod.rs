//! Entity model.
//!
//! Records are immutable once stored. Cross-references between records are typed
//! keys into the [`CatalogStore`](crate::CatalogStore) arenas rather than embedded
//! copies, so an appointment reads its patient and doctor through the store.

mod appointment;
mod medicine;
mod payment;
mod person;

pub use appointment::{Appointment, AppointmentView};
pub use medicine::Medicine;
pub use payment::{Payment, PaymentBreakdown};
pub use person::{Doctor, Patient, Person};

/// Position of a patient in the catalogue's patient arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PatientKey(pub(crate) usize);

/// Position of a doctor in the catalogue's doctor arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DoctorKey(pub(crate) usize);

/// Position of a medicine in the preloaded catalogue (0-based).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MedicineKey(pub(crate) usize);

/// Position of an appointment in the catalogue's appointment arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AppointmentKey(pub(crate) usize);
