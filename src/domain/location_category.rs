use std::fmt::{Display, Formatter};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LocationCategory {
    LogisticsCenters,
    SalesOutlets,
    Customers,
}

impl LocationCategory {
    /// All categories in the order they appear in a location file.
    pub const ALL: [LocationCategory; 3] = [LocationCategory::LogisticsCenters, LocationCategory::SalesOutlets, LocationCategory::Customers];

    /// The JSON key of this category inside `locations`.
    pub fn key(self) -> &'static str {
        match self {
            LocationCategory::LogisticsCenters => "logistics_centers",
            LocationCategory::SalesOutlets => "sales_outlets",
            LocationCategory::Customers => "customers",
        }
    }
}

impl Display for LocationCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
