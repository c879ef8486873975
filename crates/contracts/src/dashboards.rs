use serde::{Deserialize, Serialize};

/// Payload of the `/freelancer/get-total-*` counters.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TotalCount {
    pub count: usize,
}
