use std::path::PathBuf;

use crate::curve::Delimiter;
use crate::error::{Result, SlbwError};

//=====================================================================
// Configuration for a single synthesis run. The cross-section library
// directory is an explicit field here rather than process-wide state,
// so tests can point each run at its own temporary directory.
//=====================================================================

#[derive(Debug, Clone)]
pub struct SynthesisConfig {
    /// Directory holding resonance parameter files and finished tables.
    pub xs_library_dir: PathBuf,
    /// Target nucleus temperature in Kelvin.
    pub temperature_K: f64,
    /// How many positive-energy resonances to take from the file.
    pub number_of_positive_resonances: usize,
    /// Lowest energy of the synthesized curve (eV).
    pub energy_min: f64,
    /// Upper bound of the finished curve (eV).
    pub energy_max_final: f64,
    /// Upper edge of the resolved-resonance region (eV).
    pub resolved_region_cutoff: f64,
    /// Resolution of the resonance-region energy grid (eV).
    pub energy_bin_width: f64,
    /// Spacing of the fictitious identical resonances (eV).
    pub synthetic_resonance_spacing: f64,
    /// Lower bound of the fictitious resonance ladder (eV).
    pub synthetic_region_lower_bound: f64,
    /// Radiative width held constant across the fictitious resonances.
    pub synthetic_gamma_gamma: f64,
    /// Flat capture cross section above the resolved region (barns).
    pub flat_background_xs: f64,
    /// Scaling applied to the interference profile chi. The two known
    /// generation paths disagree on this constant: 2.0 reproduces the
    /// production tables, 1.0 the earlier hand-run variant.
    pub interference_scale: f64,
    /// Column delimiter of the written table.
    pub delimiter: Delimiter,
    /// Whether an existing table at the output path may be clobbered.
    pub overwrite: bool,
}

impl SynthesisConfig {
    pub fn new<P: Into<PathBuf>>(xs_library_dir: P, temperature_K: f64) -> Self {
        Self {
            xs_library_dir: xs_library_dir.into(),
            temperature_K,
            number_of_positive_resonances: 14,
            energy_min: 1e-5,
            energy_max_final: 2e7,
            resolved_region_cutoff: 1000.0,
            energy_bin_width: 0.075,
            synthetic_resonance_spacing: 25.0,
            synthetic_region_lower_bound: 300.0,
            synthetic_gamma_gamma: 0.023,
            flat_background_xs: 0.1,
            interference_scale: 2.0,
            delimiter: Delimiter::Comma,
            overwrite: true,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.temperature_K > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "temperature_K",
                value: self.temperature_K,
            });
        }
        if !(self.energy_min > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "energy_min",
                value: self.energy_min,
            });
        }
        if !(self.resolved_region_cutoff > self.energy_min) {
            return Err(SlbwError::NumericDomain {
                context: "resolved_region_cutoff",
                value: self.resolved_region_cutoff,
            });
        }
        if !(self.energy_max_final > self.resolved_region_cutoff) {
            return Err(SlbwError::NumericDomain {
                context: "energy_max_final",
                value: self.energy_max_final,
            });
        }
        if !(self.energy_bin_width > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "energy_bin_width",
                value: self.energy_bin_width,
            });
        }
        if !(self.synthetic_resonance_spacing > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "synthetic_resonance_spacing",
                value: self.synthetic_resonance_spacing,
            });
        }
        if !(self.interference_scale > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "interference_scale",
                value: self.interference_scale,
            });
        }
        Ok(())
    }
}
