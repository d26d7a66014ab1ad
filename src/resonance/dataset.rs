use crate::error::{Result, SlbwError};
use crate::resonance::ResonanceRecord;

//=====================================================================
// The full resonance ladder for one isotope: potential scattering
// cross section plus the tabulated (and later synthetic) resonances
// in ascending energy order. Read-only once the extension step has
// appended its records.
//=====================================================================

#[derive(Debug, Clone)]
pub struct IsotopeResonanceDataset {
    pub element: String,
    pub mass_number: f64,
    pub potential_xs_barns: f64,
    resonances: Vec<ResonanceRecord>,
}

impl IsotopeResonanceDataset {
    pub fn new(element: String, mass_number: f64, potential_xs_barns: f64) -> Result<Self> {
        if !(mass_number > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "mass_number",
                value: mass_number,
            });
        }
        if !(potential_xs_barns > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "potential_xs_barns",
                value: potential_xs_barns,
            });
        }
        Ok(Self {
            element,
            mass_number,
            potential_xs_barns,
            resonances: Vec::new(),
        })
    }

    /// Append a resonance, enforcing strictly ascending energies.
    pub fn append(&mut self, record: ResonanceRecord) -> Result<()> {
        if let Some(last) = self.resonances.last() {
            if record.energy_eV <= last.energy_eV {
                return Err(SlbwError::NonIncreasingEnergy {
                    index: self.resonances.len(),
                    previous: last.energy_eV,
                    current: record.energy_eV,
                });
            }
        }
        self.resonances.push(record);
        Ok(())
    }

    #[inline]
    pub fn resonances(&self) -> &[ResonanceRecord] {
        &self.resonances
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.resonances.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.resonances.is_empty()
    }

    #[inline]
    pub fn last(&self) -> Option<&ResonanceRecord> {
        self.resonances.last()
    }
}

impl std::fmt::Display for IsotopeResonanceDataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}-{} ({} resonances, SigP = {} b)",
            self.element,
            self.mass_number as i64,
            self.resonances.len(),
            self.potential_xs_barns
        )
    }
}
