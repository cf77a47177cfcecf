use super::filter::CostRange;

// ---------------------------------------------------------------------------
// Source column names (matched exactly, no normalization)
// ---------------------------------------------------------------------------

pub const COL_CITY: &str = "City";
pub const COL_COST_INDEX: &str = "Cost_index";
pub const COL_MEAL: &str = "Meal, Inexpensive Restaurant";
pub const COL_TRANSPORT_PASS: &str = "Monthly Pass (Regular Price)";
pub const COL_RENT: &str = "Apartment (1 bedroom) Outside of Centre";
pub const COL_CINEMA: &str = "Cinema, International Release, 1 Seat";

/// Every column the loader requires, in display order.
pub const REQUIRED_COLUMNS: [&str; 6] = [
    COL_CITY,
    COL_COST_INDEX,
    COL_MEAL,
    COL_TRANSPORT_PASS,
    COL_RENT,
    COL_CINEMA,
];

// ---------------------------------------------------------------------------
// Derived metric
// ---------------------------------------------------------------------------

/// A student is assumed to eat out once a day.
pub const MEALS_PER_MONTH: f64 = 30.0;

/// Total monthly student cost: rent + one cheap meal per day + transport pass.
/// No rounding, no currency conversion.
pub fn total_student_cost(rent: f64, meal: f64, transport_pass: f64) -> f64 {
    rent + meal * MEALS_PER_MONTH + transport_pass
}

// ---------------------------------------------------------------------------
// CityCostRecord – one row of the working set
// ---------------------------------------------------------------------------

/// Living costs of one city, prices in euro.
#[derive(Debug, Clone, PartialEq)]
pub struct CityCostRecord {
    pub city: String,
    pub cost_index: f64,
    /// Meal at an inexpensive restaurant.
    pub meal: f64,
    /// Monthly public-transport pass, regular price.
    pub transport_pass: f64,
    /// One-bedroom apartment outside of the centre.
    pub rent: f64,
    /// Cinema ticket, international release, one seat.
    pub cinema: f64,
    /// Derived once at construction, see [`total_student_cost`].
    pub total_student_cost: f64,
}

impl CityCostRecord {
    pub fn new(
        city: impl Into<String>,
        cost_index: f64,
        meal: f64,
        transport_pass: f64,
        rent: f64,
        cinema: f64,
    ) -> Self {
        Self {
            city: city.into(),
            cost_index,
            meal,
            transport_pass,
            rent,
            cinema,
            total_student_cost: total_student_cost(rent, meal, transport_pass),
        }
    }
}

// ---------------------------------------------------------------------------
// CityCostTable – the immutable working set
// ---------------------------------------------------------------------------

/// The filtered, derived working set. Built once by the loader and only ever
/// read afterwards; filters produce index views into it.
#[derive(Debug, Clone, Default)]
pub struct CityCostTable {
    records: Vec<CityCostRecord>,
}

impl CityCostTable {
    /// Wrap records in source order. Uniqueness of city names is the
    /// loader's job.
    pub fn from_records(records: Vec<CityCostRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[CityCostRecord] {
        &self.records
    }

    pub fn get(&self, index: usize) -> Option<&CityCostRecord> {
        self.records.get(index)
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// City names in source order, as offered by the city selector.
    pub fn city_names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.city.as_str())
    }

    /// Min/max of the derived total cost; `None` for an empty table.
    pub fn cost_bounds(&self) -> Option<CostRange> {
        let mut totals = self.records.iter().map(|r| r.total_student_cost);
        let first = totals.next()?;
        let (lo, hi) = totals.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(CostRange::new(lo, hi))
    }

    /// The record whose city equals `name` exactly.
    pub fn find_city(&self, name: &str) -> Option<&CityCostRecord> {
        self.records.iter().find(|r| r.city == name)
    }
}

/// Euro amount as shown on the dashboard.
pub fn format_euro(value: f64) -> String {
    format!("€{value:.2}")
}

/// Three-city fixture shared by unit tests across the crate.
#[cfg(test)]
pub(crate) fn sample_table() -> CityCostTable {
    CityCostTable::from_records(vec![
        CityCostRecord::new("Berlin", 68.4, 10.0, 86.0, 600.0, 11.0),
        CityCostRecord::new("Munich", 80.1, 14.0, 57.0, 1050.0, 12.5),
        CityCostRecord::new("Leipzig", 58.2, 9.0, 60.5, 420.0, 9.0),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_student_cost_berlin() {
        let berlin = CityCostRecord::new("Berlin", 68.4, 10.0, 86.0, 600.0, 11.0);
        assert_eq!(berlin.total_student_cost, 986.0);
    }

    #[test]
    fn test_total_is_exact_linear_combination() {
        let r = CityCostRecord::new("Bonn", 61.0, 12.35, 91.9, 577.77, 10.0);
        assert_eq!(r.total_student_cost, 577.77 + 12.35 * 30.0 + 91.9);
    }

    #[test]
    fn test_cost_bounds() {
        let table = sample_table();
        let bounds = table.cost_bounds().unwrap();
        assert_eq!(bounds.lo, 420.0 + 270.0 + 60.5);
        assert_eq!(bounds.hi, 1050.0 + 420.0 + 57.0);
    }

    #[test]
    fn test_cost_bounds_empty_table() {
        assert!(CityCostTable::default().cost_bounds().is_none());
    }

    #[test]
    fn test_find_city_exact_match() {
        let table = sample_table();
        assert_eq!(table.find_city("Munich").unwrap().city, "Munich");
        assert!(table.find_city("munich").is_none());
        assert!(table.find_city("Hamburg").is_none());
    }

    #[test]
    fn test_city_names_keep_source_order() {
        let table = sample_table();
        let names: Vec<&str> = table.city_names().collect();
        assert_eq!(names, ["Berlin", "Munich", "Leipzig"]);
    }

    #[test]
    fn test_format_euro() {
        assert_eq!(format_euro(986.0), "€986.00");
        assert_eq!(format_euro(12.5), "€12.50");
    }
}
