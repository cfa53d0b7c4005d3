use crate::domain::ports::VehicleStore;
use crate::domain::vehicle::{Vehicle, VehicleId};
use crate::error::{RentalError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Vehicle store backed by a JSON array of car records on disk.
///
/// The file is read once in [`JsonFileVehicleStore::open`] and the records are
/// kept immutable for the lifetime of the store. Clones share the snapshot.
#[derive(Clone, Debug)]
pub struct JsonFileVehicleStore {
    vehicles: Arc<Vec<Vehicle>>,
    index: Arc<HashMap<VehicleId, usize>>,
}

impl JsonFileVehicleStore {
    /// Loads and indexes all records found at `path`.
    ///
    /// Duplicate ids are a configuration error, since lookup by id would
    /// otherwise be ambiguous.
    pub async fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        let vehicles: Vec<Vehicle> = serde_json::from_slice(&bytes)?;
        let store = Self::from_records(vehicles)?;
        tracing::info!(
            path = %path.display(),
            vehicles = store.vehicles.len(),
            "loaded vehicle store"
        );
        Ok(store)
    }

    pub fn from_records(vehicles: Vec<Vehicle>) -> Result<Self> {
        let mut index = HashMap::with_capacity(vehicles.len());
        for (position, vehicle) in vehicles.iter().enumerate() {
            if index.insert(vehicle.id.clone(), position).is_some() {
                return Err(RentalError::Config(format!(
                    "duplicate vehicle id '{}' in store",
                    vehicle.id
                )));
            }
        }
        Ok(Self {
            vehicles: Arc::new(vehicles),
            index: Arc::new(index),
        })
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

#[async_trait]
impl VehicleStore for JsonFileVehicleStore {
    async fn load_all(&self) -> Result<Vec<Vehicle>> {
        Ok(self.vehicles.as_ref().clone())
    }

    async fn get(&self, id: &VehicleId) -> Result<Option<Vehicle>> {
        Ok(self
            .index
            .get(id)
            .map(|&position| self.vehicles[position].clone()))
    }
}
