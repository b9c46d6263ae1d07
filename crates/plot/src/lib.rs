//! Native egui figures for production function analyses.
//!
//! Two figures render an [`Analysis`]:
//!
//! - [`SurfaceFigure`]: the output surface over labor and capital, with
//!   filled contours projected onto the floor, seen from a fixed [`Camera`]
//! - [`IsoquantFigure`]: filled isoquant bands with labeled contour lines
//!
//! Both color through the analysis' shared [`Normalization`] via a
//! [`Palette`], and each carries its own [`Colorbar`]. Call `show` with a
//! [`FigureConfig`] to open a blocking window.
//!
//! The geometry behind each figure ([`SurfaceScene`], [`BandRaster`]) is
//! built up front and can be inspected without opening a window.
//!
//! [`Analysis`]: isoquant_core::Analysis
//! [`Normalization`]: isoquant_core::Normalization

mod camera;
mod colorbar;
mod figure;
mod isoquant;
mod palette;
mod raster;
mod scene;
mod surface;
mod ticks;

pub use camera::{Camera, Projected};
pub use colorbar::Colorbar;
pub use figure::FigureConfig;
pub use isoquant::IsoquantFigure;
pub use palette::Palette;
pub use raster::BandRaster;
pub use scene::{Facet, Label, SurfaceScene};
pub use surface::SurfaceFigure;
