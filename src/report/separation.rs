//! Stage-count comparison reports for extractant technologies.

use prettytable::{Table, row};
use thiserror::Error;
use uom::si::{
    f64::Ratio,
    ratio::{percent, ratio},
};

use crate::models::extraction::cascade::{CascadeError, CascadeSpec};
use crate::support::constraint::{Constrained, ConstraintError, UnitIntervalOpen};

/// A named extractant and the separation factor claimed for it.
#[derive(Debug, Clone)]
pub struct Technology {
    /// Display name, e.g. "P507 (industrial standard)".
    pub name: String,

    /// Separation factor β for the target/impurity pair.
    pub beta: f64,

    /// Where the number comes from: literature citation or DFT screening.
    pub provenance: String,
}

/// Errors from assembling a separation report.
#[derive(Debug, Error)]
pub enum SeparationReportError {
    /// A purity or separation factor failed cascade validation.
    #[error("invalid cascade inputs: {0}")]
    Cascade(#[from] CascadeError),

    /// The stage efficiency must lie strictly inside (0, 1).
    #[error("invalid stage efficiency: {0}")]
    Efficiency(#[source] ConstraintError),
}

#[derive(Debug)]
struct ReportRow {
    technology: Technology,
    theoretical: f64,
    practical: Option<u32>,
}

/// Stage-count comparison across extractant technologies at fixed purities.
///
/// Technologies are compared in insertion order; the first entry is treated
/// as the incumbent when computing improvement figures.
#[derive(Debug)]
pub struct SeparationReport {
    feed_purity: Constrained<Ratio, UnitIntervalOpen>,
    target_purity: Constrained<Ratio, UnitIntervalOpen>,
    efficiency: Constrained<Ratio, UnitIntervalOpen>,
    rows: Vec<ReportRow>,
}

impl SeparationReport {
    /// Starts a report for a fixed feed purity, target purity, and stage
    /// efficiency.
    ///
    /// # Errors
    ///
    /// Returns an error if any fraction lies outside the open interval (0, 1).
    pub fn new(
        feed_purity: f64,
        target_purity: f64,
        stage_efficiency: f64,
    ) -> Result<Self, SeparationReportError> {
        let feed_purity = UnitIntervalOpen::new(Ratio::new::<ratio>(feed_purity))
            .map_err(CascadeError::FeedPurity)?;
        let target_purity = UnitIntervalOpen::new(Ratio::new::<ratio>(target_purity))
            .map_err(CascadeError::TargetPurity)?;
        let efficiency = UnitIntervalOpen::new(Ratio::new::<ratio>(stage_efficiency))
            .map_err(SeparationReportError::Efficiency)?;

        Ok(Self {
            feed_purity,
            target_purity,
            efficiency,
            rows: Vec::new(),
        })
    }

    /// Evaluates one technology and appends its row.
    ///
    /// # Errors
    ///
    /// Returns an error if the technology's β fails cascade validation.
    pub fn add_technology(&mut self, technology: Technology) -> Result<(), SeparationReportError> {
        let spec = CascadeSpec::new(
            Ratio::new::<ratio>(technology.beta),
            self.feed_purity.into_inner(),
            self.target_purity.into_inner(),
        )?;
        let theoretical = spec.theoretical_stages();
        let practical = spec.practical_stages(self.efficiency);
        self.rows.push(ReportRow {
            technology,
            theoretical,
            practical,
        });
        Ok(())
    }

    /// β of the newest technology over β of the incumbent (first entry).
    ///
    /// `None` until the report has at least two rows.
    pub fn selectivity_gain(&self) -> Option<f64> {
        if self.rows.len() < 2 {
            return None;
        }
        let first = self.rows.first()?;
        let last = self.rows.last()?;
        Some(last.technology.beta / first.technology.beta)
    }

    /// Incumbent stage count over the newest technology's stage count.
    ///
    /// `None` until the report has at least two rows, or when either count
    /// is unbounded or zero.
    pub fn stage_reduction(&self) -> Option<f64> {
        if self.rows.len() < 2 {
            return None;
        }
        let first = self.rows.first()?.theoretical;
        let last = self.rows.last()?.theoretical;
        if !first.is_finite() || !last.is_finite() || last <= 0.0 {
            return None;
        }
        Some(first / last)
    }

    /// The comparison table.
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            "Technology",
            "β",
            "Theoretical stages",
            format!(
                "Practical stages ({:.0}% eff)",
                self.efficiency.into_inner().get::<percent>()
            ),
            "Source",
        ]);
        for entry in &self.rows {
            table.add_row(row![
                entry.technology.name,
                format!("{:.1}", entry.technology.beta),
                format_stages(entry.theoretical),
                entry
                    .practical
                    .map_or_else(|| "unbounded".to_string(), |n| n.to_string()),
                entry.technology.provenance,
            ]);
        }
        table
    }

    /// The full report: objective line, table, and comparison figures.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "OBJECTIVE: enrich feed from {:.1}% to {:.1}% purity\n\n",
            self.feed_purity.into_inner().get::<percent>(),
            self.target_purity.into_inner().get::<percent>(),
        ));
        out.push_str(&self.table().to_string());
        if let Some(gain) = self.selectivity_gain() {
            out.push_str(&format!("\nSelectivity improvement: {gain:.0}x\n"));
        }
        if let Some(reduction) = self.stage_reduction() {
            out.push_str(&format!("Stage reduction: {reduction:.1}x\n"));
        }
        out
    }
}

fn format_stages(stages: f64) -> String {
    if stages.is_finite() {
        format!("{stages:.2}")
    } else {
        "unbounded".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn magnet_recycling_report() -> SeparationReport {
        let mut report = SeparationReport::new(0.10, 0.999, 0.90).unwrap();
        report
            .add_technology(Technology {
                name: "P507 (industrial standard)".to_string(),
                beta: 2.5,
                provenance: "Gupta & Krishnamurthy (2005)".to_string(),
            })
            .unwrap();
        report
            .add_technology(Technology {
                name: "Janus ligand".to_string(),
                beta: 11_000.0,
                provenance: "DFT screening, conservative cap".to_string(),
            })
            .unwrap();
        report
    }

    #[test]
    fn renders_both_technologies() {
        let rendered = magnet_recycling_report().render();
        assert!(rendered.contains("P507"));
        assert!(rendered.contains("Janus ligand"));
        assert!(rendered.contains("9.94"));
        assert!(rendered.contains("0.98"));
        assert!(rendered.contains("10.0% to 99.9%"));
    }

    #[test]
    fn comparison_figures() {
        let report = magnet_recycling_report();
        assert_relative_eq!(report.selectivity_gain().unwrap(), 4400.0);
        assert_relative_eq!(report.stage_reduction().unwrap(), 10.156, max_relative = 1e-3);
    }

    #[test]
    fn no_comparison_with_a_single_row() {
        let mut report = SeparationReport::new(0.10, 0.999, 0.90).unwrap();
        report
            .add_technology(Technology {
                name: "P507".to_string(),
                beta: 2.5,
                provenance: "literature".to_string(),
            })
            .unwrap();
        assert!(report.selectivity_gain().is_none());
        assert!(report.stage_reduction().is_none());
    }

    #[test]
    fn unbounded_rows_render_without_a_reduction_figure() {
        let mut report = SeparationReport::new(0.10, 0.999, 0.90).unwrap();
        for (name, beta) in [("no selectivity", 1.0), ("Janus ligand", 11_000.0)] {
            report
                .add_technology(Technology {
                    name: name.to_string(),
                    beta,
                    provenance: "test".to_string(),
                })
                .unwrap();
        }
        assert!(report.render().contains("unbounded"));
        assert!(report.stage_reduction().is_none());
    }

    #[test]
    fn rejects_invalid_efficiency() {
        assert!(matches!(
            SeparationReport::new(0.10, 0.999, 1.0),
            Err(SeparationReportError::Efficiency(
                ConstraintError::AboveMaximum
            ))
        ));
    }

    #[test]
    fn rejects_invalid_technology_beta() {
        let mut report = SeparationReport::new(0.10, 0.999, 0.90).unwrap();
        let result = report.add_technology(Technology {
            name: "broken".to_string(),
            beta: -1.0,
            provenance: "test".to_string(),
        });
        assert!(matches!(
            result,
            Err(SeparationReportError::Cascade(
                CascadeError::SeparationFactor(ConstraintError::Negative)
            ))
        ));
    }
}
