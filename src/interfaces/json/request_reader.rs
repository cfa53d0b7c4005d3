use crate::domain::category::Category;
use crate::domain::transaction::RentalRequest;
use crate::error::{RentalError, Result};
use serde::de::DeserializeOwned;
use std::io::Read;

/// Reads a request body and checks its shape.
///
/// Missing or mistyped fields are reported as `InvalidInput` (a client error),
/// never as a server-side JSON failure. Business rules such as the minimum
/// age are left to the pricing engine.
pub struct RequestReader<R: Read> {
    source: R,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Body of a vehicle lookup: a bare category. Only the id and the
    /// vehicle list are required.
    pub fn category(self) -> Result<Category> {
        let category: Category = self.deserialize()?;
        category.validate()?;
        Ok(category)
    }

    /// Body of a rent or price request. The category must carry a price.
    pub fn rental(self) -> Result<RentalRequest> {
        let request: RentalRequest = self.deserialize()?;
        request.validate()?;
        Ok(request)
    }

    fn deserialize<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_reader(self.source)
            .map_err(|e| RentalError::InvalidInput(format!("malformed request body: {e}")))
    }
}
