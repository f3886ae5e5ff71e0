use serde::{Deserialize, Serialize};

/// One canonical company with the order rows that grouped under it.
///
/// `variants` lists the raw customer labels observed for this company, in
/// order of first appearance and without duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyGroup {
    pub base_company: String,
    pub total_orders: usize,
    pub variants: Vec<String>,
}
