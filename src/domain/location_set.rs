use crate::domain::{Coordinate, LocationCategory, LocationCounts};
use serde::Serialize;

/// The coordinates of logistics centers, sales outlets and customers, in the order they were produced.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct LocationSet {
    logistics_centers: Vec<Coordinate>,
    sales_outlets: Vec<Coordinate>,
    customers: Vec<Coordinate>,
}

impl LocationSet {
    pub fn new(logistics_centers: Vec<Coordinate>, sales_outlets: Vec<Coordinate>, customers: Vec<Coordinate>) -> Self {
        LocationSet {
            logistics_centers,
            sales_outlets,
            customers,
        }
    }

    pub fn logistics_centers(&self) -> &[Coordinate] {
        &self.logistics_centers
    }

    pub fn sales_outlets(&self) -> &[Coordinate] {
        &self.sales_outlets
    }

    pub fn customers(&self) -> &[Coordinate] {
        &self.customers
    }

    pub fn category(&self, category: LocationCategory) -> &[Coordinate] {
        match category {
            LocationCategory::LogisticsCenters => &self.logistics_centers,
            LocationCategory::SalesOutlets => &self.sales_outlets,
            LocationCategory::Customers => &self.customers,
        }
    }

    /// True if no category holds a single coordinate.
    pub fn is_empty(&self) -> bool {
        LocationCategory::ALL.iter().all(|&category| self.category(category).is_empty())
    }

    pub fn counts(&self) -> LocationCounts {
        LocationCounts {
            num_logistics_centers: self.logistics_centers.len(),
            num_sales_outlets: self.sales_outlets.len(),
            num_customers: self.customers.len(),
        }
    }
}
