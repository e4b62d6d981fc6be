//! Magnet-recycling separation audit.
//!
//! Compares the industrial-standard P507 extractant against a
//! high-selectivity ligand for enriching neodymium from iron-rich magnet
//! leachate, quoting theoretical and practical stage counts.

use std::error::Error;

use uom::si::{f64::MolarEnergy, molar_energy::kilojoule_per_mole, ratio::ratio};

use extraction_models::models::extraction::selectivity;
use extraction_models::report::separation::{SeparationReport, Technology};

/// Magnet-grade neodymium purity.
const TARGET_PURITY: f64 = 0.999;

/// Typical Nd fraction in Fe-rich leachate.
const FEED_PURITY: f64 = 0.10;

/// Mixer-settler stage efficiency assumed for practical counts.
const STAGE_EFFICIENCY: f64 = 0.90;

fn main() -> Result<(), Box<dyn Error>> {
    println!("STRATEGIC MATERIALS AUDIT: MAGNET RECYCLING EFFICIENCY");
    println!();

    // The Boltzmann bound behind the ligand's conservative cap.
    let delta = MolarEnergy::new::<kilojoule_per_mole>(50.0);
    let theoretical_beta = selectivity::separation_factor(delta)?;
    println!(
        "DFT screening: ΔΔE = 50 kJ/mol gives a theoretical β of {:.1e},",
        theoretical_beta.get::<ratio>()
    );
    println!("capped at 11,000 for kinetic limitations.");
    println!();

    let mut report = SeparationReport::new(FEED_PURITY, TARGET_PURITY, STAGE_EFFICIENCY)?;
    report.add_technology(Technology {
        name: "P507 (industrial standard)".to_string(),
        beta: 2.5,
        provenance: "Gupta & Krishnamurthy (2005)".to_string(),
    })?;
    report.add_technology(Technology {
        name: "Janus ligand".to_string(),
        beta: 11_000.0,
        provenance: "DFT screening, conservative cap".to_string(),
    })?;

    print!("{}", report.render());
    Ok(())
}
