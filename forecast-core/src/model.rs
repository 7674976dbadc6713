/// One (timestamp, temperature) sample within the forecast day.
#[derive(Debug, Clone, PartialEq)]
pub struct HourlyPoint {
    /// Provider-local timestamp, `YYYY-MM-DD HH:MM`.
    pub time: String,
    pub temp_c: f64,
}

/// A single day's hourly forecast for one place, as resolved by the provider.
///
/// This is an immutable snapshot: fetching again produces a fresh record
/// instead of mutating an old one. `place_name` is the provider's resolved
/// name and may differ from the query string.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastRecord {
    pub place_name: String,
    pub local_time: String,
    pub current_temp_c: f64,
    pub last_updated: String,
    /// Chronological, as returned by the provider; order is preserved all the
    /// way into the stored table.
    pub hourly_points: Vec<HourlyPoint>,
}

impl ForecastRecord {
    /// One-line summary of current conditions.
    pub fn summary(&self) -> String {
        format!(
            "{}: {}: {} C",
            self.place_name, self.last_updated, self.current_temp_c
        )
    }
}
