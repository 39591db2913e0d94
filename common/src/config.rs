pub struct Config {
    /// Horizon in years for the projected value and rent figures.
    pub projection_years: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            projection_years: 5,
        }
    }
}
