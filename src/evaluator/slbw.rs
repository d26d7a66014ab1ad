use std::f64::consts::PI;

use num_complex::Complex64;
use rayon::prelude::*;

use crate::curve::{CrossSectionCurve, Reaction};
use crate::error::{Result, SlbwError};
use crate::evaluator::faddeeva::faddeeva;
use crate::evaluator::EnergyGrid;
use crate::resonance::IsotopeResonanceDataset;

//=====================================================================
// Doppler-broadened Single-Level Breit-Wigner evaluator. Each
// resonance contributes a psi (symmetric) and chi (interference)
// profile obtained from the Faddeeva function; capture and elastic
// cross sections are accumulated over the whole ladder on the
// resonance-region grid. Elastic starts from the potential
// scattering baseline.
//=====================================================================

/// Boltzmann constant in eV/K, as used by the reference tables.
pub const BOLTZMANN_EV_PER_K: f64 = 8.617e-5;

/// Peak cross-section scale from the reduced-mass/wave-number
/// relation, in barns eV.
pub const PEAK_XS_SCALE: f64 = 2_603_911.0;

// Per-resonance quantities hoisted out of the grid loop.
struct ResonanceLine {
    energy: f64,
    total_width: f64,
    // Doppler broadening parameter, Gamma * sqrt(A / (4 k T E0)).
    zeta: f64,
    // Peak scale r = (C / E0) * ((A + 1) / A).
    r: f64,
    // Interference amplitude q = sqrt(r * SigP).
    q: f64,
    // (Gn / Gamma) * (Gg / Gamma)
    capture_strength: f64,
    // (Gn / Gamma)^2
    elastic_strength: f64,
}

pub struct DopplerBroadenedXSEvaluator {
    pub temperature_K: f64,
    pub interference_scale: f64,
}

impl DopplerBroadenedXSEvaluator {
    pub fn new(temperature_K: f64, interference_scale: f64) -> Result<Self> {
        if !(temperature_K > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "temperature_K",
                value: temperature_K,
            });
        }
        if !(interference_scale > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "interference_scale",
                value: interference_scale,
            });
        }
        Ok(Self {
            temperature_K,
            interference_scale,
        })
    }

    /// Evaluate capture and elastic cross sections over the
    /// resonance-region grid. Grid points are evaluated in parallel;
    /// each point owns a private resonance-loop accumulator, so the
    /// floating-point accumulation order is deterministic.
    pub fn evaluate(
        &self,
        dataset: &IsotopeResonanceDataset,
        grid: &EnergyGrid,
    ) -> Result<(CrossSectionCurve, CrossSectionCurve)> {
        let lines = self.resonance_lines(dataset)?;
        let sig_p = dataset.potential_xs_barns;

        let points: Vec<(f64, f64)> = grid
            .energies()
            .par_iter()
            .map(|&energy| {
                let mut capture = 0.0;
                let mut elastic = sig_p;
                for line in &lines {
                    let x = 2.0 * (energy - line.energy) / line.total_width;
                    let argument = Complex64::new(x, 1.0) * (0.5 * line.zeta);
                    let profile =
                        faddeeva(argument) * (PI * line.zeta / (2.0 * PI.sqrt()));
                    let psi = profile.re;
                    let chi = self.interference_scale * profile.im;
                    capture += line.capture_strength
                        * (line.energy / energy).sqrt()
                        * line.r
                        * psi;
                    elastic += line.elastic_strength * (line.r * psi + line.q * chi);
                }
                (capture, elastic)
            })
            .collect();

        let capture_xs: Vec<f64> = points.iter().map(|p| p.0).collect();
        let elastic_xs: Vec<f64> = points.iter().map(|p| clamp_cancellation(p.1, sig_p)).collect();

        let capture = CrossSectionCurve::new(
            Reaction::Capture,
            self.temperature_K,
            grid.energies().to_vec(),
            capture_xs,
        )?;
        let elastic = CrossSectionCurve::new(
            Reaction::Elastic,
            self.temperature_K,
            grid.energies().to_vec(),
            elastic_xs,
        )?;
        Ok((capture, elastic))
    }

    fn resonance_lines(&self, dataset: &IsotopeResonanceDataset) -> Result<Vec<ResonanceLine>> {
        let a = dataset.mass_number;
        let sig_p = dataset.potential_xs_barns;
        dataset
            .resonances()
            .iter()
            .map(|record| {
                let energy = record.energy_eV;
                let total_width = record.total_width();
                if !(energy > 0.0) {
                    return Err(SlbwError::NumericDomain {
                        context: "resonance energy",
                        value: energy,
                    });
                }
                if !(total_width > 0.0) {
                    return Err(SlbwError::NumericDomain {
                        context: "resonance total width",
                        value: total_width,
                    });
                }
                let zeta = total_width
                    * (a / (4.0 * BOLTZMANN_EV_PER_K * self.temperature_K * energy)).sqrt();
                let r = (PEAK_XS_SCALE / energy) * ((a + 1.0) / a);
                let q = (r * sig_p).sqrt();
                let gn_over_gamma = record.neutron_width / total_width;
                let gg_over_gamma = record.radiative_width / total_width;
                Ok(ResonanceLine {
                    energy,
                    total_width,
                    zeta,
                    r,
                    q,
                    capture_strength: gn_over_gamma * gg_over_gamma,
                    elastic_strength: gn_over_gamma * gn_over_gamma,
                })
            })
            .collect()
    }
}

// The elastic interference term can cancel against the potential
// baseline to a tiny negative residue at off-resonance points. Such
// residues (well below floating-point resolution of the baseline) are
// floored at zero; anything larger is a genuine invariant violation
// and is left for curve construction to reject.
fn clamp_cancellation(value: f64, baseline: f64) -> f64 {
    if value < 0.0 && value.abs() < baseline * 1e-12 {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::resonance::ResonanceRecord;

    fn single_resonance_dataset() -> IsotopeResonanceDataset {
        let mut dataset = IsotopeResonanceDataset::new("U".to_string(), 238.0, 11.2934).unwrap();
        dataset
            .append(ResonanceRecord::new(100.0, 0.01, 0.02).unwrap())
            .unwrap();
        dataset
    }

    #[test]
    fn test_capture_peaks_at_resonance() {
        let dataset = single_resonance_dataset();
        let grid = EnergyGrid::linear(50.0, 150.0, 3).unwrap();
        let evaluator = DopplerBroadenedXSEvaluator::new(300.0, 2.0).unwrap();

        let (capture, _elastic) = evaluator.evaluate(&dataset, &grid).unwrap();
        let xs = capture.xs_barns();
        assert!(xs[1] > xs[0]);
        assert!(xs[1] > xs[2]);
        assert!(xs.iter().all(|&v| v >= 0.0));
    }

    #[test]
    fn test_elastic_baseline_off_resonance() {
        // Far from the resonance the elastic cross section relaxes to
        // the potential scattering baseline.
        let dataset = single_resonance_dataset();
        let grid = EnergyGrid::logarithmic(1e-3, 1.0, 0.01).unwrap();
        let evaluator = DopplerBroadenedXSEvaluator::new(300.0, 2.0).unwrap();

        let (_capture, elastic) = evaluator.evaluate(&dataset, &grid).unwrap();
        let baseline = dataset.potential_xs_barns;
        for &value in elastic.xs_barns() {
            assert_relative_eq!(value, baseline, max_relative = 0.3);
        }
    }

    #[test]
    fn test_interference_scale_changes_elastic_only() {
        let dataset = single_resonance_dataset();
        let grid = EnergyGrid::linear(50.0, 150.0, 11).unwrap();

        let (capture_1, elastic_1) = DopplerBroadenedXSEvaluator::new(300.0, 1.0)
            .unwrap()
            .evaluate(&dataset, &grid)
            .unwrap();
        let (capture_2, elastic_2) = DopplerBroadenedXSEvaluator::new(300.0, 2.0)
            .unwrap()
            .evaluate(&dataset, &grid)
            .unwrap();

        for (a, b) in capture_1.xs_barns().iter().zip(capture_2.xs_barns()) {
            assert_relative_eq!(a, b);
        }
        // Off-center points carry interference, so elastic differs.
        assert!(
            elastic_1
                .xs_barns()
                .iter()
                .zip(elastic_2.xs_barns())
                .any(|(a, b)| (a - b).abs() > 1e-12)
        );
    }

    #[test]
    fn test_broadening_lowers_peak() {
        // Higher temperature spreads the resonance, lowering its peak.
        let dataset = single_resonance_dataset();
        let grid = EnergyGrid::linear(99.0, 101.0, 21).unwrap();

        let peak_at = |temperature: f64| {
            let (capture, _) = DopplerBroadenedXSEvaluator::new(temperature, 2.0)
                .unwrap()
                .evaluate(&dataset, &grid)
                .unwrap();
            capture.xs_barns().iter().cloned().fold(f64::MIN, f64::max)
        };
        assert!(peak_at(300.0) > peak_at(3000.0));
    }

    #[test]
    fn test_rejects_nonpositive_temperature() {
        assert!(DopplerBroadenedXSEvaluator::new(0.0, 2.0).is_err());
        assert!(DopplerBroadenedXSEvaluator::new(-300.0, 2.0).is_err());
    }

    #[test]
    fn test_clamp_cancellation() {
        assert_eq!(clamp_cancellation(-1e-15, 11.3), 0.0);
        assert_eq!(clamp_cancellation(5.0, 11.3), 5.0);
        // A substantial negative value is not silently repaired.
        assert_eq!(clamp_cancellation(-1.0, 11.3), -1.0);
    }
}
