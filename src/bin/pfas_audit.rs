//! PFAS adsorbent retention audit.
//!
//! Compares conventional PFAS adsorbents (activated carbon, ion-exchange
//! resin) against a fluorophilic cage family on Arrhenius retention
//! lifetimes, then tabulates the DFT screening behind the cage numbers.

use std::error::Error;

use uom::si::{
    f64::{MolarEnergy, Time},
    molar_energy::kilojoule_per_mole,
    time::hour,
};

use extraction_models::models::adsorption::retention;
use extraction_models::report::retention::{
    Adsorbent, IRREVERSIBLE_THRESHOLD_KILOJOULE_PER_MOLE, RetentionReport, ScreeningHit,
    screening_table,
};
use extraction_models::support::constraint::{StrictlyNegative, StrictlyPositive};

/// Reference breakthrough for activated carbon under stressed conditions,
/// roughly six months of service.
const REFERENCE_BREAKTHROUGH_HOURS: f64 = 4380.0;

fn adsorbent(name: &str, binding_energy: f64, mechanism: &str) -> Adsorbent {
    Adsorbent {
        name: name.to_string(),
        binding_energy,
        mechanism: mechanism.to_string(),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    println!("COMPLIANCE AUDIT: PFAS ADSORBENT RETENTION");
    println!();

    let mut report = RetentionReport::new(adsorbent(
        "Granular activated carbon",
        -45.0,
        "non-specific van der Waals",
    ))?;
    report.add_adsorbent(adsorbent("Ion-exchange resin", -60.0, "electrostatic"))?;
    report.add_adsorbent(adsorbent(
        "Fluorocatcher (conservative)",
        -85.0,
        "pre-organized binding pocket",
    ))?;
    report.add_adsorbent(adsorbent(
        "Fluorocatcher FC-8 (best)",
        -121.0,
        "optimized for C8 perfluoroalkyl chain",
    ))?;

    print!("{}", report.render());
    println!();

    println!("DFT SCREENING RESULTS: FLUOROCATCHER FAMILY");
    let hits: Vec<ScreeningHit> = [
        ("FC-1", "PFOA", -85.2),
        ("FC-2", "PFOA", -91.7),
        ("FC-3", "PFOA", -88.4),
        ("FC-4", "PFOA", -95.1),
        ("FC-5", "PFOA", -102.3),
        ("FC-6", "PFOA", -108.6),
        ("FC-7", "PFOA", -115.2),
        ("FC-8", "PFOA", -121.0),
        ("FC-8", "PFOS", -118.5),
        ("FC-8", "PFHxS", -105.3),
        ("FC-8", "PFBS", -95.2),
        ("FC-8", "PFBA", -88.7),
        ("FC-8", "GenX", -92.1),
    ]
    .iter()
    .map(|&(host, guest, binding_energy)| ScreeningHit {
        host: host.to_string(),
        guest: guest.to_string(),
        binding_energy,
    })
    .collect();
    print!("{}", screening_table(&hits));
    println!();

    // Breakthrough projection for the lead candidate.
    let reference = StrictlyNegative::new(MolarEnergy::new::<kilojoule_per_mole>(-45.0))?;
    let candidate = StrictlyNegative::new(MolarEnergy::new::<kilojoule_per_mole>(-121.0))?;
    let reference_breakthrough =
        StrictlyPositive::new(Time::new::<hour>(REFERENCE_BREAKTHROUGH_HOURS))?;
    let estimate = retention::breakthrough_estimate(candidate, reference, reference_breakthrough);
    println!(
        "If activated carbon breaks through after {REFERENCE_BREAKTHROUGH_HOURS:.0} h, \
         FC-8 projects to {:.1e} h.",
        estimate.get::<hour>()
    );
    println!(
        "Binding at or below {IRREVERSIBLE_THRESHOLD_KILOJOULE_PER_MOLE:.0} kJ/mol is \
         effectively irreversible at 298 K; every Fluorocatcher variant qualifies."
    );
    Ok(())
}
