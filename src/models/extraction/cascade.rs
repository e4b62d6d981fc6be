//! Countercurrent cascade stage counts (Kremser-Brown-Souders).
//!
//! The Kremser-Brown-Souders relation approximates the number of theoretical
//! equilibrium stages a countercurrent liquid-liquid extraction cascade needs
//! to lift a feed purity `x_f` to a target purity `x_p` with a constant
//! separation factor β:
//!
//! ```text
//! N = ln(S) / ln(β),   S = (x_p (1 - x_f)) / (x_f (1 - x_p))
//! ```
//!
//! `S` is the separation degree, the ratio of product odds to feed odds.
//! The relation assumes dilute solutions, immiscible phases, countercurrent
//! flow, and equilibrium at each stage.
//!
//! This logarithmic form is the canonical one in this crate. Some published
//! figures for the same inputs come from hand-rounded variants of the
//! relation; where they disagree with this form, the closed form here wins.

mod error;

pub use error::CascadeError;

use uom::si::{f64::Ratio, ratio::ratio};

use crate::support::constraint::{Constrained, StrictlyPositive, UnitIntervalOpen};

/// A fully-specified separation duty: one extractant, one feed, one target.
///
/// Construction validates every field, so the stage-count evaluation can
/// never divide by zero or take the logarithm of a non-positive number.
///
/// # Example
///
/// ```
/// use extraction_models::models::extraction::cascade::CascadeSpec;
///
/// // P507 benchmark: 10% Nd feed to magnet-grade 99.9% purity.
/// let spec = CascadeSpec::from_fractions(2.5, 0.10, 0.999).unwrap();
/// let n = spec.theoretical_stages();
/// assert!((n - 9.94).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CascadeSpec {
    beta: Constrained<Ratio, StrictlyPositive>,
    feed_purity: Constrained<Ratio, UnitIntervalOpen>,
    target_purity: Constrained<Ratio, UnitIntervalOpen>,
}

impl CascadeSpec {
    /// Builds a cascade specification from `uom` ratios.
    ///
    /// # Errors
    ///
    /// Returns a field-specific [`CascadeError`] if β is not strictly
    /// positive or either purity lies outside the open interval (0, 1).
    /// NaN fails in every field.
    pub fn new(beta: Ratio, feed_purity: Ratio, target_purity: Ratio) -> Result<Self, CascadeError> {
        Ok(Self {
            beta: StrictlyPositive::new(beta).map_err(CascadeError::SeparationFactor)?,
            feed_purity: UnitIntervalOpen::new(feed_purity).map_err(CascadeError::FeedPurity)?,
            target_purity: UnitIntervalOpen::new(target_purity)
                .map_err(CascadeError::TargetPurity)?,
        })
    }

    /// Builds a cascade specification from plain fractions.
    ///
    /// # Errors
    ///
    /// Same validation as [`CascadeSpec::new`].
    pub fn from_fractions(
        beta: f64,
        feed_purity: f64,
        target_purity: f64,
    ) -> Result<Self, CascadeError> {
        Self::new(
            Ratio::new::<ratio>(beta),
            Ratio::new::<ratio>(feed_purity),
            Ratio::new::<ratio>(target_purity),
        )
    }

    /// The separation factor β.
    pub fn beta(&self) -> Ratio {
        self.beta.into_inner()
    }

    /// The feed purity fraction.
    pub fn feed_purity(&self) -> Ratio {
        self.feed_purity.into_inner()
    }

    /// The target purity fraction.
    pub fn target_purity(&self) -> Ratio {
        self.target_purity.into_inner()
    }

    /// The separation degree `S`: product odds over feed odds.
    ///
    /// Equal feed and target purities give exactly 1 (no enrichment needed).
    pub fn separation_degree(&self) -> f64 {
        let x_f = self.feed_purity.into_inner().get::<ratio>();
        let x_p = self.target_purity.into_inner().get::<ratio>();
        (x_p * (1.0 - x_f)) / (x_f * (1.0 - x_p))
    }

    /// The theoretical equilibrium stage count `N = ln(S) / ln(β)`.
    ///
    /// Returns `f64::INFINITY` when β ≤ 1: no finite cascade achieves
    /// enrichment without selectivity. Equal feed and target purities give
    /// exactly 0. A target below the feed gives a negative `N` (the duty is
    /// a stripping operation, not an enrichment).
    pub fn theoretical_stages(&self) -> f64 {
        let beta = self.beta.into_inner().get::<ratio>();
        if beta <= 1.0 {
            return f64::INFINITY;
        }
        self.separation_degree().ln() / beta.ln()
    }

    /// The practical stage count at a given stage efficiency.
    ///
    /// Real mixer-settlers do not reach equilibrium, so the theoretical
    /// count is inflated by the efficiency and rounded up to whole stages,
    /// with a floor of one contact stage.
    ///
    /// Returns `None` when the theoretical count is unbounded (β ≤ 1).
    pub fn practical_stages(&self, efficiency: Constrained<Ratio, UnitIntervalOpen>) -> Option<u32> {
        let n = self.theoretical_stages();
        if !n.is_finite() {
            return None;
        }
        let inflated = (n / efficiency.into_inner().get::<ratio>()).ceil().max(1.0);
        Some(inflated as u32)
    }
}
