use crate::domain::category::Category;
use crate::domain::ports::{VehicleSelectorBox, VehicleStoreBox};
use crate::domain::vehicle::Vehicle;
use crate::error::{RentalError, Result};

/// Resolves a category to one concrete vehicle record.
pub struct VehicleRepository {
    store: VehicleStoreBox,
    selector: VehicleSelectorBox,
}

impl VehicleRepository {
    pub fn new(store: VehicleStoreBox, selector: VehicleSelectorBox) -> Self {
        Self { store, selector }
    }

    /// Picks one of `category.car_ids` with the configured selector and
    /// fetches its record.
    ///
    /// A category failing [`Category::validate`] is rejected before the store
    /// is read. The price is not consulted. A stale id fails with `VehicleUnavailable`.
    pub async fn find(&self, category: &Category) -> Result<Vehicle> {
        category.validate()?;

        let id = self
            .selector
            .select(&category.car_ids)
            .and_then(|index| category.car_ids.get(index))
            .ok_or_else(|| {
                RentalError::Config(format!(
                    "selector gave no usable position for {} vehicles",
                    category.car_ids.len()
                ))
            })?;
        tracing::debug!(category = %category.id, vehicle = %id, "selected vehicle");

        match self.store.get(id).await? {
            Some(vehicle) => Ok(vehicle),
            None => {
                tracing::warn!(category = %category.id, vehicle = %id, "vehicle not in store");
                Err(RentalError::VehicleUnavailable(id.clone()))
            }
        }
    }
}
