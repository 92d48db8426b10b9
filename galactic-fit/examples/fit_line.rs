use galactic_fit::{fit_mcmc, fit_odr, McmcConfig, SampleSet};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A distance-color style relation: slope -1, intercept 4.5, with
    // measurement noise baked into the uncertainty columns.
    let x = vec![0.42, 1.31, 2.05, 2.92, 4.11, 4.87, 6.03, 7.25, 8.10, 9.44];
    let y = vec![4.10, 3.25, 2.41, 1.62, 0.51, -0.34, -1.54, -2.76, -3.62, -4.91];
    let x_err = vec![0.08; 10];
    let y_err = vec![0.12; 10];

    let data = SampleSet::new(x, y, x_err, y_err)?;

    // --- Orthogonal regression: fast, symmetric errors ---
    let odr = fit_odr(&data)?;
    println!("York orthogonal regression:");
    println!("  slope     = {:.4} ± {:.4}", odr.slope, odr.slope_err);
    println!("  intercept = {:.4} ± {:.4}\n", odr.intercept, odr.intercept_err);

    // --- MCMC: posterior medians, asymmetric intervals ---
    let config = McmcConfig {
        seed: Some(20260807),
        ..Default::default()
    };
    let mcmc = fit_mcmc(&data, &config)?;
    println!("Ensemble MCMC ({} walkers, {} steps):", config.walkers, config.steps);
    println!(
        "  slope     = {:.4} +{:.4} -{:.4}",
        mcmc.slope.value, mcmc.slope.plus, mcmc.slope.minus
    );
    println!(
        "  intercept = {:.4} +{:.4} -{:.4}",
        mcmc.intercept.value, mcmc.intercept.plus, mcmc.intercept.minus
    );

    Ok(())
}
