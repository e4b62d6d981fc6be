//! Retention-lifetime comparison reports for adsorbents.

use prettytable::{Table, row};
use thiserror::Error;
use uom::si::{f64::MolarEnergy, molar_energy::kilojoule_per_mole};

use crate::models::adsorption::retention::{self, WellDepth};
use crate::support::constraint::{ConstraintError, StrictlyNegative};

/// Binding energies at or below this are effectively irreversible at room
/// temperature: desorption half-lives beyond any service interval.
pub const IRREVERSIBLE_THRESHOLD_KILOJOULE_PER_MOLE: f64 = -80.0;

/// A named adsorbent and the binding energy claimed for it.
#[derive(Debug, Clone)]
pub struct Adsorbent {
    /// Display name, e.g. "Granular activated carbon".
    pub name: String,

    /// Binding energy in kJ/mol; favorable binding is negative.
    pub binding_energy: f64,

    /// Binding mechanism or data source shown in the report.
    pub mechanism: String,
}

/// Errors from assembling a retention report.
#[derive(Debug, Error)]
pub enum RetentionReportError {
    /// An adsorbent's binding energy is not a strictly negative finite value.
    #[error("adsorbent {name:?} has an invalid binding energy: {source}")]
    BindingEnergy {
        name: String,
        #[source]
        source: ConstraintError,
    },
}

#[derive(Debug)]
struct ReportRow {
    adsorbent: Adsorbent,
    relative_lifetime: f64,
}

/// Retention-lifetime comparison against a fixed reference adsorbent.
///
/// Lifetimes are reported relative to the reference at 298 K, so the report
/// never needs an absolute desorption prefactor.
#[derive(Debug)]
pub struct RetentionReport {
    reference: Adsorbent,
    reference_depth: WellDepth,
    rows: Vec<ReportRow>,
}

impl RetentionReport {
    /// Starts a report anchored to a reference adsorbent.
    ///
    /// # Errors
    ///
    /// Returns an error if the reference binding energy is not strictly
    /// negative.
    pub fn new(reference: Adsorbent) -> Result<Self, RetentionReportError> {
        let reference_depth = well_depth(&reference)?;
        Ok(Self {
            reference,
            reference_depth,
            rows: Vec::new(),
        })
    }

    /// Evaluates one candidate against the reference and appends its row.
    ///
    /// # Errors
    ///
    /// Returns an error if the candidate binding energy is not strictly
    /// negative.
    pub fn add_adsorbent(&mut self, adsorbent: Adsorbent) -> Result<(), RetentionReportError> {
        let depth = well_depth(&adsorbent)?;
        let relative_lifetime = retention::relative_lifetime(depth, self.reference_depth);
        self.rows.push(ReportRow {
            adsorbent,
            relative_lifetime,
        });
        Ok(())
    }

    /// The comparison table, reference row first.
    pub fn table(&self) -> Table {
        let mut table = Table::new();
        table.add_row(row![
            "Adsorbent",
            "Binding (kJ/mol)",
            "Mechanism",
            "Relative lifetime",
        ]);
        table.add_row(row![
            self.reference.name,
            format!("{:.1}", self.reference.binding_energy),
            self.reference.mechanism,
            "1x (reference)",
        ]);
        for entry in &self.rows {
            table.add_row(row![
                entry.adsorbent.name,
                format!("{:.1}", entry.adsorbent.binding_energy),
                entry.adsorbent.mechanism,
                format_factor(entry.relative_lifetime),
            ]);
        }
        table
    }

    /// The full report: reference line plus the comparison table.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "REFERENCE: {} at {:.1} kJ/mol\n\n",
            self.reference.name, self.reference.binding_energy,
        ));
        out.push_str(&self.table().to_string());
        out
    }
}

fn well_depth(adsorbent: &Adsorbent) -> Result<WellDepth, RetentionReportError> {
    StrictlyNegative::new(MolarEnergy::new::<kilojoule_per_mole>(
        adsorbent.binding_energy,
    ))
    .map_err(|source| RetentionReportError::BindingEnergy {
        name: adsorbent.name.clone(),
        source,
    })
}

fn format_factor(factor: f64) -> String {
    if factor >= 1.0e4 {
        format!("{factor:.2e}x")
    } else {
        format!("{factor:.1}x")
    }
}

/// One host/guest pair from a DFT screening run.
#[derive(Debug, Clone)]
pub struct ScreeningHit {
    /// The receptor or sorbent framework.
    pub host: String,

    /// The adsorbate screened against it.
    pub guest: String,

    /// Computed binding energy in kJ/mol.
    pub binding_energy: f64,
}

/// Tabulates screening hits, flagging binding past the irreversibility
/// threshold.
pub fn screening_table(hits: &[ScreeningHit]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Host", "Guest", "Binding (kJ/mol)", "Status"]);
    for hit in hits {
        let status = if hit.binding_energy <= IRREVERSIBLE_THRESHOLD_KILOJOULE_PER_MOLE {
            "effectively irreversible"
        } else {
            "reversible at 298 K"
        };
        table.add_row(row![
            hit.host,
            hit.guest,
            format!("{:.1}", hit.binding_energy),
            status,
        ]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adsorbent(name: &str, binding_energy: f64, mechanism: &str) -> Adsorbent {
        Adsorbent {
            name: name.to_string(),
            binding_energy,
            mechanism: mechanism.to_string(),
        }
    }

    #[test]
    fn compares_candidates_against_activated_carbon() {
        let mut report = RetentionReport::new(adsorbent(
            "Granular activated carbon",
            -45.0,
            "van der Waals",
        ))
        .unwrap();
        report
            .add_adsorbent(adsorbent("Ion-exchange resin", -60.0, "electrostatic"))
            .unwrap();
        report
            .add_adsorbent(adsorbent(
                "Fluorophilic cage",
                -85.0,
                "fluorous encapsulation",
            ))
            .unwrap();

        let rendered = report.render();
        assert!(rendered.contains("1x (reference)"));
        assert!(rendered.contains("425.9x"));
        // -85 vs -45 is 40 kJ/mol deeper: about 1e7 relative lifetime.
        assert!(rendered.contains("e7x"));
    }

    #[test]
    fn rejects_non_negative_binding_energy() {
        let result = RetentionReport::new(adsorbent("unbound", 12.0, "none"));
        assert!(matches!(
            result,
            Err(RetentionReportError::BindingEnergy {
                source: ConstraintError::Positive,
                ..
            })
        ));

        let mut report =
            RetentionReport::new(adsorbent("Granular activated carbon", -45.0, "van der Waals"))
                .unwrap();
        assert!(matches!(
            report.add_adsorbent(adsorbent("broken", 0.0, "none")),
            Err(RetentionReportError::BindingEnergy {
                source: ConstraintError::Zero,
                ..
            })
        ));
    }

    #[test]
    fn screening_flags_the_irreversible_bindings() {
        let hits = [
            ScreeningHit {
                host: "FC-8".to_string(),
                guest: "PFOA".to_string(),
                binding_energy: -121.0,
            },
            ScreeningHit {
                host: "Activated carbon".to_string(),
                guest: "PFOA".to_string(),
                binding_energy: -45.0,
            },
        ];
        let rendered = screening_table(&hits).to_string();
        assert!(rendered.contains("effectively irreversible"));
        assert!(rendered.contains("reversible at 298 K"));
    }
}
