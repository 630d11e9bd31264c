//! catpal - stable category colors for charts
//!
//! Binds category labels to colors once, so every chart drawn from the same
//! data colors each category the same way no matter which subset it shows.

pub mod binding;
pub mod cli;
pub mod color;
pub mod config;
pub mod palette;
pub mod scale;
pub mod theme;

pub use binding::{BindingError, BindingResult, CategoryColorBinding};
pub use color::Color;
pub use config::{ConfigError, PaletteConfig};
pub use palette::Palette;
pub use scale::{Aesthetic, DiscreteScale, LegendEntry};
pub use theme::{LegendPosition, Theme, ThemeBase};
