//! Vehicle selection strategies.
//!
//! | Strategy | Use |
//! |----------|-----|
//! | `UniformRandomSelector` | production default |
//! | `FixedSelector` | deterministic tests |

use crate::domain::ports::VehicleSelector;
use crate::domain::vehicle::VehicleId;
use rand::Rng;

/// Draws an index uniformly at random. Previously issued vehicles are not
/// excluded, so two identical requests may get the same vehicle.
#[derive(Debug, Default, Clone, Copy)]
pub struct UniformRandomSelector;

impl UniformRandomSelector {
    pub fn new() -> Self {
        Self
    }
}

impl VehicleSelector for UniformRandomSelector {
    fn select(&self, ids: &[VehicleId]) -> Option<usize> {
        if ids.is_empty() {
            return None;
        }
        Some(rand::thread_rng().gen_range(0..ids.len()))
    }
}

/// Always picks the same position, wrapped to the list length.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector {
    position: usize,
}

impl FixedSelector {
    pub fn new(position: usize) -> Self {
        Self { position }
    }

    /// Selector that always returns the first id.
    pub fn first() -> Self {
        Self::new(0)
    }
}

impl VehicleSelector for FixedSelector {
    fn select(&self, ids: &[VehicleId]) -> Option<usize> {
        if ids.is_empty() {
            None
        } else {
            Some(self.position % ids.len())
        }
    }
}
