//! Discrete color scales backed by a shared binding.
//!
//! A [`DiscreteScale`] is what a single chart asks of a binding: which
//! categories to show, in what order, and which color each datum gets.

use std::fmt::Display;
use std::hash::Hash;

use crate::binding::{BindingResult, CategoryColorBinding};
use crate::color::Color;
use crate::theme::Theme;

/// The categorical aesthetic a scale colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Aesthetic {
    /// Area fill (bars, boxes)
    Fill,
    /// Outline or point color
    Colour,
}

/// One row of a legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry<L> {
    pub label: L,
    pub color: Color,
}

/// Manual discrete scale that looks colors up by label.
#[derive(Debug, Clone)]
pub struct DiscreteScale<'a, L = String> {
    aesthetic: Aesthetic,
    binding: &'a CategoryColorBinding<L>,
    name: Option<String>,
    breaks: Option<Vec<L>>,
}

impl<'a, L> DiscreteScale<'a, L>
where
    L: Eq + Hash + Clone + Display,
{
    /// Scale for `aesthetic` using every label of `binding`.
    pub fn manual(aesthetic: Aesthetic, binding: &'a CategoryColorBinding<L>) -> Self {
        Self {
            aesthetic,
            binding,
            name: None,
            breaks: None,
        }
    }

    /// Legend title.
    pub fn with_name(self, name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..self
        }
    }

    /// Categories shown by this chart, in display order.
    ///
    /// Leaving a bound label out is how a chart omits a category.
    pub fn with_breaks(self, breaks: Vec<L>) -> Self {
        Self {
            breaks: Some(breaks),
            ..self
        }
    }

    pub fn aesthetic(&self) -> Aesthetic {
        self.aesthetic
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Displayed labels: explicit breaks, or all bound labels in order.
    pub fn breaks(&self) -> &[L] {
        self.breaks.as_deref().unwrap_or(self.binding.labels())
    }

    /// Colors for the displayed labels, the sequence given to the renderer.
    pub fn values(&self) -> BindingResult<Vec<Color>> {
        self.binding.resolve(self.breaks())
    }

    /// Legend rows for the displayed labels.
    pub fn legend(&self) -> BindingResult<Vec<LegendEntry<L>>> {
        let colors = self.values()?;
        Ok(self
            .breaks()
            .iter()
            .cloned()
            .zip(colors)
            .map(|(label, color)| LegendEntry { label, color })
            .collect())
    }

    /// Legend rows, or nothing when `theme` hides legends.
    pub fn themed_legend(&self, theme: &Theme) -> BindingResult<Vec<LegendEntry<L>>> {
        if !theme.shows_legend() {
            return Ok(Vec::new());
        }
        self.legend()
    }

    /// Color for each data value.
    ///
    /// Values only need to be bound, not listed in the breaks.
    pub fn map<'v, I>(&self, values: I) -> BindingResult<Vec<Color>>
    where
        I: IntoIterator<Item = &'v L>,
        L: 'v,
    {
        self.binding.resolve(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binding::BindingError;
    use crate::palette::Palette;
    use crate::theme::LegendPosition;

    fn age_binding() -> CategoryColorBinding {
        Palette::okabe_ito()
            .bind(vec![
                "infant".to_string(),
                "child".to_string(),
                "adult".to_string(),
            ])
            .unwrap()
    }

    fn s(v: &str) -> String {
        v.to_string()
    }

    #[test]
    fn test_default_breaks_use_all_labels() {
        let binding = age_binding();
        let scale = DiscreteScale::manual(Aesthetic::Fill, &binding).with_name("Age");

        assert_eq!(scale.aesthetic(), Aesthetic::Fill);
        assert_eq!(scale.name(), Some("Age"));
        assert_eq!(scale.breaks(), binding.labels());
        assert_eq!(scale.values().unwrap(), binding.colors().to_vec());
    }

    #[test]
    fn test_two_charts_agree_on_shared_categories() {
        let binding = age_binding();
        let full = DiscreteScale::manual(Aesthetic::Fill, &binding);
        let dropped = DiscreteScale::manual(Aesthetic::Colour, &binding)
            .with_breaks(vec![s("child"), s("adult")]);

        let full_legend = full.legend().unwrap();
        let dropped_legend = dropped.legend().unwrap();

        assert_eq!(dropped_legend.len(), 2);
        assert_eq!(dropped_legend[0], full_legend[1]);
        assert_eq!(dropped_legend[1], full_legend[2]);
        assert_eq!(dropped_legend[0].color.as_str(), "#E69F00");
    }

    #[test]
    fn test_unknown_break_fails() {
        let binding = age_binding();
        let scale =
            DiscreteScale::manual(Aesthetic::Fill, &binding).with_breaks(vec![s("teen")]);
        assert_eq!(
            scale.legend().unwrap_err(),
            BindingError::UnknownLabel { label: s("teen") }
        );
    }

    #[test]
    fn test_map_accepts_bound_labels_outside_breaks() {
        let binding = age_binding();
        let scale = DiscreteScale::manual(Aesthetic::Colour, &binding).with_breaks(vec![s("adult")]);
        let data = vec![s("infant"), s("adult"), s("infant")];

        let colors = scale.map(&data).unwrap();
        let hex: Vec<&str> = colors.iter().map(Color::as_str).collect();
        assert_eq!(hex, vec!["#999999", "#56B4E9", "#999999"]);

        let bad = vec![s("elder")];
        assert!(scale.map(&bad).is_err());
    }

    #[test]
    fn test_themed_legend_respects_hidden_legend() {
        let binding = age_binding();
        let scale = DiscreteScale::manual(Aesthetic::Fill, &binding);

        let hidden = Theme::minimal().with_legend_position(LegendPosition::None);
        assert!(scale.themed_legend(&hidden).unwrap().is_empty());
        assert_eq!(scale.themed_legend(&Theme::grey()).unwrap().len(), 3);
    }
}
