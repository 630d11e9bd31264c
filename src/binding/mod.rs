//! Stable label to color bindings shared across rendering calls.
//!
//! A binding pairs the i-th label with the i-th color once, up front. Every
//! chart that uses it looks colors up by label, so dropping a category from
//! one chart never shifts the colors of the others.

mod error;

pub use error::{BindingError, BindingResult};

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use crate::color::Color;

/// Immutable mapping from category label to color.
#[derive(Debug, Clone)]
pub struct CategoryColorBinding<L = String> {
    /// Labels in construction order
    labels: Vec<L>,
    /// Colors parallel to `labels`
    colors: Vec<Color>,
    /// Label -> position in `labels`/`colors`
    index: HashMap<L, usize>,
}

impl<L> CategoryColorBinding<L>
where
    L: Eq + Hash + Clone + Display,
{
    /// Pair `labels[i]` with `colors[i]`.
    ///
    /// Fails with [`BindingError::ArityMismatch`] when the lengths differ and
    /// with [`BindingError::DuplicateLabel`] on the first repeated label.
    pub fn new<C>(labels: Vec<L>, colors: Vec<C>) -> BindingResult<Self>
    where
        C: Into<Color>,
    {
        if labels.len() != colors.len() {
            return Err(BindingError::ArityMismatch {
                labels: labels.len(),
                colors: colors.len(),
            });
        }

        let mut index = HashMap::with_capacity(labels.len());
        for (i, label) in labels.iter().enumerate() {
            if index.insert(label.clone(), i).is_some() {
                return Err(BindingError::DuplicateLabel {
                    label: label.to_string(),
                });
            }
        }

        let colors: Vec<Color> = colors.into_iter().map(Into::into).collect();
        log::debug!("Created color binding with {} categories", labels.len());

        Ok(Self {
            labels,
            colors,
            index,
        })
    }

    /// Colors for `requested`, in the same order.
    ///
    /// Fails with [`BindingError::UnknownLabel`] on the first label that is
    /// not bound. Repeated labels resolve to the same color each time.
    pub fn resolve<'a, I>(&self, requested: I) -> BindingResult<Vec<Color>>
    where
        I: IntoIterator<Item = &'a L>,
        L: 'a,
    {
        requested
            .into_iter()
            .map(|label| self.color_of(label).cloned())
            .collect()
    }

    /// Color for a single label, or [`BindingError::UnknownLabel`].
    pub fn color_of(&self, label: &L) -> BindingResult<&Color> {
        self.get(label).ok_or_else(|| BindingError::UnknownLabel {
            label: label.to_string(),
        })
    }

    /// Color for a single label, if bound.
    pub fn get(&self, label: &L) -> Option<&Color> {
        self.index.get(label).map(|&i| &self.colors[i])
    }

    /// Whether `label` is bound.
    pub fn contains(&self, label: &L) -> bool {
        self.index.contains_key(label)
    }
}

impl<L> CategoryColorBinding<L> {
    /// Number of bound labels.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in construction order.
    pub fn labels(&self) -> &[L] {
        &self.labels
    }

    /// Colors in construction order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate `(label, color)` pairs in construction order.
    pub fn iter(&self) -> impl Iterator<Item = (&L, &Color)> {
        self.labels.iter().zip(self.colors.iter())
    }
}
