use strum_macros::{Display, EnumIter};

use crate::error::{Result, SlbwError};

//=====================================================================
// The finished product of the synthesis: an energy-resolved cross
// section for one reaction at one temperature. Energies are strictly
// increasing and every value is non-negative; both invariants are
// enforced at construction.
//=====================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Reaction {
    #[strum(serialize = "capture")]
    Capture,
    #[strum(serialize = "elastic")]
    Elastic,
}

#[derive(Debug, Clone)]
pub struct CrossSectionCurve {
    pub reaction: Reaction,
    pub temperature_K: f64,
    energies: Vec<f64>,
    xs_barns: Vec<f64>,
}

impl CrossSectionCurve {
    pub fn new(
        reaction: Reaction,
        temperature_K: f64,
        energies: Vec<f64>,
        xs_barns: Vec<f64>,
    ) -> Result<Self> {
        if energies.len() != xs_barns.len() {
            return Err(SlbwError::LengthMismatch {
                energies: energies.len(),
                xs: xs_barns.len(),
            });
        }
        for (index, pair) in energies.windows(2).enumerate() {
            if !(pair[1] > pair[0]) {
                return Err(SlbwError::NonIncreasingEnergy {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
        for (index, &value) in xs_barns.iter().enumerate() {
            if !(value >= 0.0) {
                return Err(SlbwError::NegativeCrossSection { index, value });
            }
        }
        Ok(Self {
            reaction,
            temperature_K,
            energies,
            xs_barns,
        })
    }

    #[inline]
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    #[inline]
    pub fn xs_barns(&self) -> &[f64] {
        &self.xs_barns
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.energies
            .iter()
            .copied()
            .zip(self.xs_barns.iter().copied())
    }
}

impl std::fmt::Display for CrossSectionCurve {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} XS at T={}K ({} points)",
            self.reaction,
            self.temperature_K,
            self.energies.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use strum::IntoEnumIterator;

    #[test]
    fn test_reaction_names() {
        let names: Vec<String> = Reaction::iter().map(|r| r.to_string()).collect();
        assert_eq!(names, vec!["capture", "elastic"]);
    }

    #[test]
    fn test_construction_validates_invariants() {
        let curve = CrossSectionCurve::new(
            Reaction::Capture,
            300.0,
            vec![1.0, 2.0, 3.0],
            vec![0.1, 0.2, 0.3],
        )
        .unwrap();
        assert_eq!(curve.len(), 3);
        assert_eq!(curve.points().count(), 3);

        // Non-increasing energies are rejected.
        assert!(matches!(
            CrossSectionCurve::new(Reaction::Capture, 300.0, vec![1.0, 1.0], vec![0.1, 0.2]),
            Err(SlbwError::NonIncreasingEnergy { index: 1, .. })
        ));
        // Negative cross sections are rejected.
        assert!(matches!(
            CrossSectionCurve::new(Reaction::Capture, 300.0, vec![1.0, 2.0], vec![0.1, -0.2]),
            Err(SlbwError::NegativeCrossSection { index: 1, .. })
        ));
        // Mismatched lengths are rejected.
        assert!(matches!(
            CrossSectionCurve::new(Reaction::Capture, 300.0, vec![1.0, 2.0], vec![0.1]),
            Err(SlbwError::LengthMismatch { .. })
        ));
    }
}
