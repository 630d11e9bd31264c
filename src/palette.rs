//! Named color palettes for categorical data.
//!
//! Palettes are plain ordered color lists. They become label-keyed only
//! through [`Palette::bind`], which is the one place positions are used.

use std::fmt::Display;
use std::hash::Hash;

use crate::binding::{BindingError, BindingResult, CategoryColorBinding};
use crate::color::{Color, hsv_to_rgb};

/// Okabe & Ito colorblind-safe palette, grey first.
pub const OKABE_ITO: [&str; 8] = [
    "#999999", // grey
    "#E69F00", // orange
    "#56B4E9", // sky blue
    "#009E73", // bluish green
    "#F0E442", // yellow
    "#0072B2", // blue
    "#D55E00", // vermillion
    "#CC79A7", // reddish purple
];

/// Okabe & Ito colorblind-safe palette, black first.
pub const OKABE_ITO_BLACK: [&str; 8] = [
    "#000000", "#E69F00", "#56B4E9", "#009E73", "#F0E442", "#0072B2", "#D55E00", "#CC79A7",
];

/// Starting hue (degrees) for [`Palette::hue`].
pub const HUE_START: f32 = 15.0;
const HUE_SATURATION: f32 = 0.65;
const HUE_VALUE: f32 = 0.9;

/// Default grey ramp bounds for [`Palette::grey_default`].
pub const GREY_START: f32 = 0.2;
pub const GREY_END: f32 = 0.8;

/// An ordered, named list of colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    name: String,
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from any color tokens.
    pub fn new<C: Into<Color>>(name: &str, colors: impl IntoIterator<Item = C>) -> Self {
        Self {
            name: name.to_string(),
            colors: colors.into_iter().map(Into::into).collect(),
        }
    }

    /// Colorblind-friendly palette with grey.
    pub fn okabe_ito() -> Self {
        Self::new("colorblind", OKABE_ITO)
    }

    /// Colorblind-friendly palette with black.
    pub fn okabe_ito_black() -> Self {
        Self::new("colorblind_black", OKABE_ITO_BLACK)
    }

    /// `n` hues evenly spaced around the color wheel.
    pub fn hue(n: usize) -> Self {
        let step = if n == 0 { 0.0 } else { 360.0 / n as f32 };
        let colors = (0..n).map(|i| {
            let (r, g, b) = hsv_to_rgb(HUE_START + step * i as f32, HUE_SATURATION, HUE_VALUE);
            Color::from_rgb_f32(r, g, b)
        });
        Self::new("hue", colors)
    }

    /// `n` greys evenly spaced from `start` to `end` brightness (0.0-1.0).
    pub fn grey(n: usize, start: f32, end: f32) -> Self {
        let colors = (0..n).map(|i| {
            let t = if n <= 1 {
                0.0
            } else {
                i as f32 / (n - 1) as f32
            };
            let v = start + (end - start) * t;
            Color::from_rgb_f32(v, v, v)
        });
        Self::new("grey", colors)
    }

    /// Grey ramp with the default 0.2 to 0.8 range.
    pub fn grey_default(n: usize) -> Self {
        Self::grey(n, GREY_START, GREY_END)
    }

    /// Look up a built-in palette by name. `n` sizes the generated ones.
    pub fn by_name(name: &str, n: usize) -> Option<Self> {
        match name {
            "colorblind" => Some(Self::okabe_ito()),
            "colorblind_black" => Some(Self::okabe_ito_black()),
            "hue" => Some(Self::hue(n)),
            "grey" | "gray" => Some(Self::grey_default(n)),
            _ => None,
        }
    }

    /// Names accepted by [`Palette::by_name`].
    pub fn builtin_names() -> &'static [&'static str] {
        &["colorblind", "colorblind_black", "hue", "grey"]
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Bind `labels` to the first `labels.len()` colors of this palette.
    ///
    /// Colors are never recycled: a palette shorter than the label list is
    /// an [`BindingError::ArityMismatch`].
    pub fn bind<L>(&self, labels: Vec<L>) -> BindingResult<CategoryColorBinding<L>>
    where
        L: Eq + Hash + Clone + Display,
    {
        if labels.len() > self.colors.len() {
            return Err(BindingError::ArityMismatch {
                labels: labels.len(),
                colors: self.colors.len(),
            });
        }
        let colors = self.colors[..labels.len()].to_vec();
        CategoryColorBinding::new(labels, colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_okabe_ito_order() {
        let palette = Palette::okabe_ito();
        assert_eq!(palette.len(), 8);
        assert_eq!(palette.colors()[0].as_str(), "#999999");
        assert_eq!(palette.colors()[1].as_str(), "#E69F00");

        let black = Palette::okabe_ito_black();
        assert_eq!(black.colors()[0].as_str(), "#000000");
        assert_eq!(black.colors()[1..], palette.colors()[1..]);
    }

    #[test]
    fn test_hue_palette_is_distinct() {
        let palette = Palette::hue(5);
        assert_eq!(palette.len(), 5);
        for (i, a) in palette.colors().iter().enumerate() {
            assert!(a.to_rgb().is_some());
            for b in &palette.colors()[i + 1..] {
                assert_ne!(a, b);
            }
        }
        assert!(Palette::hue(0).is_empty());
    }

    #[test]
    fn test_grey_ramp_endpoints() {
        let palette = Palette::grey(3, 0.0, 1.0);
        let hex: Vec<&str> = palette.colors().iter().map(Color::as_str).collect();
        assert_eq!(hex, vec!["#000000", "#808080", "#FFFFFF"]);

        let single = Palette::grey_default(1);
        assert_eq!(single.colors()[0].as_str(), "#333333");
    }

    #[test]
    fn test_by_name() {
        assert_eq!(Palette::by_name("colorblind", 0), Some(Palette::okabe_ito()));
        assert_eq!(Palette::by_name("hue", 4).map(|p| p.len()), Some(4));
        assert_eq!(Palette::by_name("gray", 2).map(|p| p.len()), Some(2));
        assert!(Palette::by_name("rainbow", 3).is_none());
        for name in Palette::builtin_names() {
            assert!(Palette::by_name(name, 3).is_some());
        }
    }

    #[test]
    fn test_bind_takes_leading_colors() {
        let binding = Palette::okabe_ito()
            .bind(vec!["infant", "child", "adult"])
            .unwrap();
        assert_eq!(binding.get(&"adult").unwrap().as_str(), "#56B4E9");
    }

    #[test]
    fn test_bind_does_not_recycle() {
        let err = Palette::hue(2).bind(vec!["a", "b", "c"]).unwrap_err();
        assert_eq!(
            err,
            BindingError::ArityMismatch {
                labels: 3,
                colors: 2
            }
        );
    }
}
