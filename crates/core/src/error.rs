use clinic_types::AmountError;

/// The kinds of record held by the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Patient,
    Doctor,
    Medicine,
    Appointment,
    Payment,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RecordKind::Patient => "patient",
            RecordKind::Doctor => "doctor",
            RecordKind::Medicine => "medicine",
            RecordKind::Appointment => "appointment",
            RecordKind::Payment => "payment",
        };
        f.write_str(name)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ClinicError {
    #[error("{kind} not found: {id}")]
    NotFound { kind: RecordKind, id: String },
    #[error("invalid medicine selection {position} (catalogue has {catalogue_size} items)")]
    InvalidSelection {
        position: i64,
        catalogue_size: usize,
    },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("{kind} id already in use: {id}")]
    DuplicateId { kind: RecordKind, id: String },
    #[error("appointment {appointment_id} already billed by payment {payment_id}")]
    AlreadyBilled {
        appointment_id: String,
        payment_id: String,
    },
    #[error("{kind} reference does not belong to this catalogue")]
    UnknownKey { kind: RecordKind },

    #[error(transparent)]
    Amount(#[from] AmountError),
}

pub type ClinicResult<T> = std::result::Result<T, ClinicError>;
