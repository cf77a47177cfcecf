// ---------------------------------------------------------------------------
// Allow-list of German cities kept in the working set
// ---------------------------------------------------------------------------

/// The cities shown on the dashboard. Names must match the source `City`
/// column exactly (no case folding, no umlauts).
pub const GERMAN_CITIES: [&str; 15] = [
    "Berlin",
    "Munich",
    "Hamburg",
    "Frankfurt",
    "Cologne",
    "Bonn",
    "Dusseldorf",
    "Stuttgart",
    "Leipzig",
    "Dresden",
    "Nuremberg",
    "Hannover",
    "Bremen",
    "Essen",
    "Dortmund",
];

/// Whether `name` belongs to the allow-list.
pub fn is_german_city(name: &str) -> bool {
    GERMAN_CITIES.contains(&name)
}
