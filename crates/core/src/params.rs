use thiserror::Error;

use crate::CobbDouglas;

/// Parameters for a single analysis run.
///
/// The [`Default`] reproduces the plotted scenario: `Q = 5·K^0.34·L^0.66`
/// over capital in `[1, 5]` and labor in `[1, 10]`, 200 samples per input,
/// and 25 contour levels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Params {
    function: CobbDouglas,
    capital: [f64; 2],
    labor: [f64; 2],
    samples: usize,
    levels: usize,
}

/// Errors that can occur when validating parameters.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("productivity must be finite and positive")]
    Productivity,

    #[error("output elasticities must be finite and positive")]
    Elasticity,

    #[error("capital range must be finite, non-negative, and increasing")]
    CapitalRange,

    #[error("labor range must be finite, non-negative, and increasing")]
    LaborRange,

    #[error("at least 2 samples per input are required")]
    Samples,

    #[error("at least 2 contour levels are required")]
    Levels,
}

impl Default for Params {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(CobbDouglas::default(), [1.0, 5.0], [1.0, 10.0], 200, 25).unwrap()
    }
}

impl Params {
    /// Creates validated parameters.
    ///
    /// Input ranges must be non-negative so every sample is a valid base for
    /// the production function's fractional powers.
    ///
    /// # Errors
    ///
    /// Returns an error if a range is non-finite, negative, or not increasing,
    /// or if fewer than two samples or levels are requested.
    pub fn new(
        function: CobbDouglas,
        capital: [f64; 2],
        labor: [f64; 2],
        samples: usize,
        levels: usize,
    ) -> Result<Self, ConfigError> {
        if !valid_range(capital) {
            return Err(ConfigError::CapitalRange);
        }
        if !valid_range(labor) {
            return Err(ConfigError::LaborRange);
        }
        if samples < 2 {
            return Err(ConfigError::Samples);
        }
        if levels < 2 {
            return Err(ConfigError::Levels);
        }

        Ok(Self {
            function,
            capital,
            labor,
            samples,
            levels,
        })
    }

    /// Returns a copy with a different production function.
    #[must_use]
    pub fn with_function(mut self, function: CobbDouglas) -> Self {
        self.function = function;
        self
    }

    /// Returns a copy with a different sample count.
    ///
    /// # Errors
    ///
    /// Returns an error if `samples < 2`.
    pub fn with_samples(self, samples: usize) -> Result<Self, ConfigError> {
        Self::new(self.function, self.capital, self.labor, samples, self.levels)
    }

    /// Returns a copy with a different contour level count.
    ///
    /// # Errors
    ///
    /// Returns an error if `levels < 2`.
    pub fn with_levels(self, levels: usize) -> Result<Self, ConfigError> {
        Self::new(self.function, self.capital, self.labor, self.samples, levels)
    }

    #[must_use]
    pub fn function(&self) -> &CobbDouglas {
        &self.function
    }

    /// Returns the capital interval `[start, end]`.
    #[must_use]
    pub fn capital(&self) -> [f64; 2] {
        self.capital
    }

    /// Returns the labor interval `[start, end]`.
    #[must_use]
    pub fn labor(&self) -> [f64; 2] {
        self.labor
    }

    /// Returns the number of samples along each input.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples
    }

    /// Returns the number of contour level boundaries.
    #[must_use]
    pub fn levels(&self) -> usize {
        self.levels
    }
}

fn valid_range([start, end]: [f64; 2]) -> bool {
    start.is_finite() && end.is_finite() && start >= 0.0 && end > start
}
