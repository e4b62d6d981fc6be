//! Renders the audit figures to `assets/images/`.

use std::error::Error;
use std::fs;

use uom::si::{f64::MolarEnergy, f64::Ratio, molar_energy::kilojoule_per_mole, ratio::ratio};

use extraction_models::chart::{self, ChartConfig, STANDARD_RED};
use extraction_models::models::adsorption::retention;
use extraction_models::models::extraction::cascade::CascadeSpec;
use extraction_models::support::constraint::UnitIntervalOpen;

const FEED_PURITY: f64 = 0.10;
const TARGET_PURITY: f64 = 0.999;
const STAGE_EFFICIENCY: f64 = 0.90;

fn main() -> Result<(), Box<dyn Error>> {
    fs::create_dir_all("assets/images")?;

    separation_efficiency_curve()?;
    stage_comparison()?;
    binding_energy_comparison()?;
    lifetime_extension_curve()?;

    println!("Wrote 4 figures to assets/images/");
    Ok(())
}

/// Theoretical stages versus β for the magnet-recycling duty, β log-spaced
/// from just above unity to the capped ligand value.
fn separation_efficiency_curve() -> Result<(), Box<dyn Error>> {
    let steps = 120;
    let (beta_min, beta_max) = (1.5_f64, 11_000.0_f64);
    let mut betas = Vec::with_capacity(steps + 1);
    let mut stages = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let fraction = i as f64 / steps as f64;
        let beta = beta_min * (beta_max / beta_min).powf(fraction);
        let spec = CascadeSpec::from_fractions(beta, FEED_PURITY, TARGET_PURITY)?;
        betas.push(beta);
        stages.push(spec.theoretical_stages());
    }

    let config = ChartConfig::labeled(
        "Theoretical stages vs separation factor",
        "Separation factor β",
        "Theoretical stages",
    );
    chart::plot_line_log_x(
        &betas,
        &stages,
        "assets/images/separation_efficiency_curve.png",
        Some(&config),
    )
}

/// Practical stage counts for the two audited extractants.
fn stage_comparison() -> Result<(), Box<dyn Error>> {
    let efficiency = UnitIntervalOpen::new(Ratio::new::<ratio>(STAGE_EFFICIENCY))?;
    let labels = ["P507", "Janus ligand"];
    let values: Vec<f64> = [2.5, 11_000.0]
        .iter()
        .map(|&beta| {
            let spec = CascadeSpec::from_fractions(beta, FEED_PURITY, TARGET_PURITY)?;
            let practical = spec
                .practical_stages(efficiency)
                .ok_or("unbounded stage count")?;
            Ok::<f64, Box<dyn Error>>(f64::from(practical))
        })
        .collect::<Result<_, _>>()?;

    let config = ChartConfig::labeled(
        "Practical stages at 90% efficiency",
        "",
        "Practical stages",
    );
    chart::plot_bars(
        &labels,
        &values,
        "assets/images/stage_comparison.png",
        Some(&config),
    )
}

/// Binding-well depths of the audited adsorbents, plotted as magnitudes.
fn binding_energy_comparison() -> Result<(), Box<dyn Error>> {
    let labels = [
        "GAC",
        "IX resin",
        "Fluorocatcher\n(conservative)",
        "FC-8\n(best)",
    ];
    let values = [45.0, 60.0, 85.0, 121.0];

    let mut config = ChartConfig::labeled(
        "PFAS binding strength by adsorbent",
        "",
        "|Binding energy| (kJ/mol)",
    );
    config.bar_color = STANDARD_RED;
    chart::plot_bars(
        &labels,
        &values,
        "assets/images/binding_energy_comparison.png",
        Some(&config),
    )
}

/// Lifetime decades gained per kJ/mol of extra well depth.
fn lifetime_extension_curve() -> Result<(), Box<dyn Error>> {
    let steps = 80;
    let mut depth_gain = Vec::with_capacity(steps + 1);
    let mut decades = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let delta = i as f64;
        let multiplier =
            retention::lifetime_multiplier(MolarEnergy::new::<kilojoule_per_mole>(delta))?;
        depth_gain.push(delta);
        decades.push(multiplier.log10());
    }

    let config = ChartConfig::labeled(
        "Retention lifetime vs extra well depth",
        "Additional well depth (kJ/mol)",
        "Lifetime extension (decades)",
    );
    chart::plot_line(
        &depth_gain,
        &decades,
        "assets/images/lifetime_extension_curve.png",
        Some(&config),
    )
}
