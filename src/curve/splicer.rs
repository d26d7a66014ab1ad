use crate::curve::CrossSectionCurve;
use crate::error::{Result, SlbwError};
use crate::evaluator::EnergyGrid;

//=====================================================================
// Splices the fine resonance-region curve with a coarse flat
// background segment running from the resolved-region cutoff to the
// final energy bound. The seam must stay strictly increasing.
//=====================================================================

/// Point count of the flat background segment.
const BACKGROUND_POINTS: usize = 10;

pub struct SpectrumSplicer {
    pub resolved_region_cutoff: f64,
    pub energy_max_final: f64,
    pub energy_bin_width: f64,
}

impl SpectrumSplicer {
    pub fn new(resolved_region_cutoff: f64, energy_max_final: f64, energy_bin_width: f64) -> Self {
        Self {
            resolved_region_cutoff,
            energy_max_final,
            energy_bin_width,
        }
    }

    /// Append a constant-valued background segment to `curve` and
    /// return the finished spectrum. The segment starts one bin width
    /// above the cutoff; on an exact collision with the last
    /// resonance-region point it is nudged by one more bin width.
    pub fn splice(&self, curve: CrossSectionCurve, flat_xs: f64) -> Result<CrossSectionCurve> {
        if !(flat_xs >= 0.0) {
            return Err(SlbwError::NegativeCrossSection {
                index: 0,
                value: flat_xs,
            });
        }
        let last_energy = *curve.energies().last().ok_or(SlbwError::LengthMismatch {
            energies: 0,
            xs: 0,
        })?;

        let mut start = self.resolved_region_cutoff + self.energy_bin_width;
        if start <= last_energy {
            start = last_energy + self.energy_bin_width;
        }
        if start <= last_energy {
            return Err(SlbwError::NonIncreasingEnergy {
                index: curve.len(),
                previous: last_energy,
                current: start,
            });
        }

        let background = EnergyGrid::linear(start, self.energy_max_final, BACKGROUND_POINTS)?;

        let mut energies = curve.energies().to_vec();
        let mut xs_barns = curve.xs_barns().to_vec();
        energies.extend_from_slice(background.energies());
        xs_barns.extend(std::iter::repeat(flat_xs).take(background.len()));

        CrossSectionCurve::new(curve.reaction, curve.temperature_K, energies, xs_barns)
    }
}
