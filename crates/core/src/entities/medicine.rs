use clinic_types::Amount;
use serde::Serialize;

/// An item in the preloaded medicine catalogue.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Medicine {
    name: String,
    price: Amount,
}

impl Medicine {
    pub fn new(name: impl Into<String>, price: Amount) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Amount {
        self.price
    }
}
