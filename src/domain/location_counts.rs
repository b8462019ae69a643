use serde::Serialize;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct LocationCounts {
    pub num_logistics_centers: usize,
    pub num_sales_outlets: usize,
    pub num_customers: usize,
}
