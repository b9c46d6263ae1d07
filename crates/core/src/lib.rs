//! Core computations for visualizing production functions.
//!
//! An analysis runs as a single pipeline:
//!
//! - [`InputRange`] and [`Mesh`]: evenly spaced capital and labor samples and
//!   their full cross product
//! - [`CobbDouglas`]: the production function `Q = A · K^α · L^β`
//! - [`OutputGrid`]: the function evaluated at every mesh cell
//! - [`Normalization`]: the shared color scale and contour levels
//! - [`isoline`]: marching-squares isoquants at those levels
//!
//! [`Analysis::run`] performs every step from validated [`Params`] and bundles
//! the results for rendering.

mod analysis;
mod colormap;
mod error;
mod grid;
mod model;
mod normalize;
mod params;
mod production;
mod surface;

pub mod isoline;

pub use analysis::Analysis;
pub use colormap::{Colormap, Rgb};
pub use error::Error;
pub use grid::{GridError, InputRange, Mesh};
pub use isoline::Isoline;
pub use model::{Model, Snapshot};
pub use normalize::{NormalizeError, Normalization};
pub use params::{ConfigError, Params};
pub use production::{CobbDouglas, Inputs, ReturnsToScale};
pub use surface::OutputGrid;
