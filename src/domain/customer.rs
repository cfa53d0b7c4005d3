use crate::error::{RentalError, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub age: u32,
}

impl Customer {
    pub fn new(id: impl Into<String>, name: impl Into<String>, age: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age,
        }
    }

    /// Rejects a zero age. Whether the age may rent is a pricing rule.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 {
            return Err(RentalError::InvalidInput(
                "customer age must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
