use super::vehicle::{Vehicle, VehicleId};
use crate::error::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

/// Read-only access to vehicle reference data.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    async fn load_all(&self) -> Result<Vec<Vehicle>>;
    async fn get(&self, id: &VehicleId) -> Result<Option<Vehicle>>;
}

/// Picks which of a category's vehicles to hand out.
pub trait VehicleSelector: Send + Sync {
    /// Returns an index into `ids`, or `None` when `ids` is empty.
    fn select(&self, ids: &[VehicleId]) -> Option<usize>;
}

/// Source of "today" for due-date computation.
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}

pub type VehicleStoreBox = Box<dyn VehicleStore>;
pub type VehicleSelectorBox = Box<dyn VehicleSelector>;
pub type ClockBox = Box<dyn Clock>;
