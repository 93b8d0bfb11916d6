use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct DashboardDto {
    pub total_samples: u64,
    pub total_positions: u64,
    pub free_positions: u64,
    /// Number of samples per status
    pub status_counts: BTreeMap<String, u64>,
    /// Number of occupied positions per enclosing freezer, `Unknown` when a
    /// box has no freezer ancestor
    pub freezer_counts: BTreeMap<String, u64>,
}
