use crate::error::{Result, SlbwError};
use crate::resonance::{IsotopeResonanceDataset, ResonanceRecord};

//=====================================================================
// Extends a parsed resonance ladder with evenly spaced fictitious
// resonances, bridging the last tabulated resonance into the
// unresolved region. The radiative width is held constant; the
// neutron width follows a 1/v-like scaling propagated from each
// resonance to its immediate successor.
//=====================================================================

pub struct SyntheticResonanceExtender {
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub spacing: f64,
    pub radiative_width: f64,
}

impl SyntheticResonanceExtender {
    pub fn new(lower_bound: f64, upper_bound: f64, spacing: f64, radiative_width: f64) -> Self {
        Self {
            lower_bound,
            upper_bound,
            spacing,
            radiative_width,
        }
    }

    /// Append the synthetic ladder over `[lower_bound, upper_bound]`.
    /// The last real resonance anchors the width recurrence
    /// `Gn_k = Gn_{k-1} * sqrt(E_k / E_{k-1})`.
    pub fn extend(&self, dataset: &mut IsotopeResonanceDataset) -> Result<()> {
        if !(self.spacing > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "synthetic_resonance_spacing",
                value: self.spacing,
            });
        }
        if !(self.upper_bound > self.lower_bound) {
            return Err(SlbwError::NumericDomain {
                context: "synthetic region upper bound",
                value: self.upper_bound,
            });
        }
        let anchor = dataset.last().ok_or(SlbwError::InsufficientData {
            requested: 1,
            available: 0,
        })?;
        if self.lower_bound <= anchor.energy_eV {
            return Err(SlbwError::NumericDomain {
                context: "synthetic region lower bound",
                value: self.lower_bound,
            });
        }

        let count =
            ((self.upper_bound - self.lower_bound) / self.spacing).round() as usize + 1;
        // A ladder needs at least both endpoints; a spacing wider than
        // the region would silently drop the lower bound.
        if count < 2 {
            return Err(SlbwError::NumericDomain {
                context: "synthetic resonance count",
                value: count as f64,
            });
        }
        let step = (self.upper_bound - self.lower_bound) / (count - 1) as f64;

        let mut previous_energy = anchor.energy_eV;
        let mut previous_width = anchor.neutron_width;
        for k in 0..count {
            // Hit the upper bound exactly rather than accumulate step error.
            let energy = if k == count - 1 {
                self.upper_bound
            } else {
                self.lower_bound + step * k as f64
            };
            let neutron_width = previous_width * (energy / previous_energy).sqrt();
            dataset.append(ResonanceRecord::new(
                energy,
                neutron_width,
                self.radiative_width,
            )?)?;
            previous_energy = energy;
            previous_width = neutron_width;
        }
        Ok(())
    }
}
