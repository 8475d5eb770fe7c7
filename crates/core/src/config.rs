//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then handed to the
//! [`CatalogStore`](crate::CatalogStore). Nothing in the core reads environment
//! variables or files.

use crate::constants::DEFAULT_MEDICINES;
use crate::entities::Medicine;
use crate::{ClinicError, ClinicResult};

/// How identifiers supplied at creation time are checked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Reject a record whose identifier is already used by a record of the same kind.
    #[default]
    Unique,
    /// Accept duplicates. Lookups return the earliest record, so later ones are shadowed.
    Shadow,
}

/// Whether an appointment may be paid for more than once.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BillingPolicy {
    /// At most one payment per appointment.
    #[default]
    SinglePayment,
    /// Every payment request for an existing appointment is recorded.
    Permissive,
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    id_policy: IdPolicy,
    billing_policy: BillingPolicy,
    medicines: Vec<Medicine>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// The medicine catalogue must contain at least one entry, otherwise no
    /// selection could ever be valid.
    pub fn new(
        id_policy: IdPolicy,
        billing_policy: BillingPolicy,
        medicines: Vec<Medicine>,
    ) -> ClinicResult<Self> {
        if medicines.is_empty() {
            return Err(ClinicError::InvalidInput(
                "medicine catalogue cannot be empty".into(),
            ));
        }

        Ok(Self {
            id_policy,
            billing_policy,
            medicines,
        })
    }

    /// Default catalogue with the given policies.
    pub fn with_policies(id_policy: IdPolicy, billing_policy: BillingPolicy) -> Self {
        Self {
            id_policy,
            billing_policy,
            medicines: default_medicines(),
        }
    }

    pub fn id_policy(&self) -> IdPolicy {
        self.id_policy
    }

    pub fn billing_policy(&self) -> BillingPolicy {
        self.billing_policy
    }

    pub fn medicines(&self) -> &[Medicine] {
        &self.medicines
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self::with_policies(IdPolicy::default(), BillingPolicy::default())
    }
}

/// Builds the fixed four-item catalogue from [`DEFAULT_MEDICINES`].
pub fn default_medicines() -> Vec<Medicine> {
    DEFAULT_MEDICINES
        .iter()
        .map(|(name, price)| Medicine::new(*name, clinic_types::Amount::whole(*price)))
        .collect()
}
