//! Cobb-Douglas production functions.
//!
//! The workspace plots `Q = A · K^α · L^β`, where `K` is capital, `L` is labor,
//! `A` is total factor productivity, and `α`/`β` are the output elasticities of
//! capital and labor.

use std::{convert::Infallible, fmt};

use crate::{Model, params::ConfigError};

/// A pair of production inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inputs {
    pub capital: f64,
    pub labor: f64,
}

impl Inputs {
    #[must_use]
    pub fn new(capital: f64, labor: f64) -> Self {
        Self { capital, labor }
    }
}

/// How output responds when all inputs are scaled by the same factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnsToScale {
    Decreasing,
    Constant,
    Increasing,
}

/// A Cobb-Douglas production function `Q = A · K^α · L^β`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CobbDouglas {
    productivity: f64,
    capital_share: f64,
    labor_share: f64,
}

impl Default for CobbDouglas {
    /// Returns `Q = 5 · K^0.34 · L^0.66`.
    fn default() -> Self {
        Self {
            productivity: 5.0,
            capital_share: 0.34,
            labor_share: 0.66,
        }
    }
}

impl CobbDouglas {
    /// Tolerance used when classifying returns to scale.
    const SCALE_EPSILON: f64 = 1e-12;

    /// Creates a production function with validated coefficients.
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is non-finite or not strictly positive.
    pub fn new(
        productivity: f64,
        capital_share: f64,
        labor_share: f64,
    ) -> Result<Self, ConfigError> {
        let positive = |value: f64| value.is_finite() && value > 0.0;

        if !positive(productivity) {
            return Err(ConfigError::Productivity);
        }
        if !positive(capital_share) || !positive(labor_share) {
            return Err(ConfigError::Elasticity);
        }

        Ok(Self {
            productivity,
            capital_share,
            labor_share,
        })
    }

    #[must_use]
    pub fn productivity(&self) -> f64 {
        self.productivity
    }

    #[must_use]
    pub fn capital_share(&self) -> f64 {
        self.capital_share
    }

    #[must_use]
    pub fn labor_share(&self) -> f64 {
        self.labor_share
    }

    /// Returns the output produced by `capital` and `labor`.
    ///
    /// Inputs are expected to be non-negative; negative inputs yield `NaN`.
    #[must_use]
    pub fn output(&self, capital: f64, labor: f64) -> f64 {
        self.productivity * capital.powf(self.capital_share) * labor.powf(self.labor_share)
    }

    /// Returns `∂Q/∂K = α · Q / K`.
    #[must_use]
    pub fn marginal_product_capital(&self, capital: f64, labor: f64) -> f64 {
        self.capital_share * self.output(capital, labor) / capital
    }

    /// Returns `∂Q/∂L = β · Q / L`.
    #[must_use]
    pub fn marginal_product_labor(&self, capital: f64, labor: f64) -> f64 {
        self.labor_share * self.output(capital, labor) / labor
    }

    /// Returns the marginal rate of technical substitution `MP_L / MP_K`.
    ///
    /// This is the magnitude of the isoquant slope through `(capital, labor)`
    /// when labor is on the horizontal axis: the capital that can be given up
    /// per extra unit of labor while holding output constant.
    #[must_use]
    pub fn mrts(&self, capital: f64, labor: f64) -> f64 {
        (self.labor_share / self.capital_share) * capital / labor
    }

    /// Returns the degree of homogeneity `α + β`.
    #[must_use]
    pub fn degree(&self) -> f64 {
        self.capital_share + self.labor_share
    }

    #[must_use]
    pub fn returns_to_scale(&self) -> ReturnsToScale {
        let excess = self.degree() - 1.0;
        if excess.abs() <= Self::SCALE_EPSILON {
            ReturnsToScale::Constant
        } else if excess < 0.0 {
            ReturnsToScale::Decreasing
        } else {
            ReturnsToScale::Increasing
        }
    }
}

impl Model for CobbDouglas {
    type Input = Inputs;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &Inputs) -> Result<f64, Self::Error> {
        Ok(self.output(input.capital, input.labor))
    }
}

impl fmt::Display for CobbDouglas {
    /// Formats as `Q = 5·K^0.34·L^0.66`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Q = {}·K^{}·L^{}",
            self.productivity, self.capital_share, self.labor_share
        )
    }
}
