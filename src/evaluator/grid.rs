use crate::error::{Result, SlbwError};

//=====================================================================
// Energy grids for cross-section evaluation: a logarithmically spaced
// grid over the resonance region and a linearly spaced grid over the
// flat background region. Strictly increasing, immutable once built.
//=====================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct EnergyGrid {
    energies: Vec<f64>,
}

impl EnergyGrid {
    /// Log-spaced grid over `[e_min, e_cutoff]`. The bin count is
    /// `round((e_cutoff - e_min) / bin_width)`, matching the
    /// resonance-region resolution convention.
    pub fn logarithmic(e_min: f64, e_cutoff: f64, bin_width: f64) -> Result<Self> {
        if !(e_min > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "grid minimum energy",
                value: e_min,
            });
        }
        if !(e_cutoff > e_min) {
            return Err(SlbwError::NumericDomain {
                context: "grid cutoff energy",
                value: e_cutoff,
            });
        }
        if !(bin_width > 0.0) {
            return Err(SlbwError::NumericDomain {
                context: "grid bin width",
                value: bin_width,
            });
        }
        let count = ((e_cutoff - e_min) / bin_width).round() as usize;
        if count < 2 {
            return Err(SlbwError::NumericDomain {
                context: "grid point count",
                value: count as f64,
            });
        }
        let (log_min, log_max) = (e_min.log10(), e_cutoff.log10());
        let step = (log_max - log_min) / (count - 1) as f64;
        let energies = (0..count)
            .map(|i| {
                if i == count - 1 {
                    e_cutoff
                } else {
                    10f64.powf(log_min + step * i as f64)
                }
            })
            .collect();
        Self::from_energies(energies)
    }

    /// Linearly spaced grid of `count` points over `[start, stop]`.
    pub fn linear(start: f64, stop: f64, count: usize) -> Result<Self> {
        if count < 2 {
            return Err(SlbwError::NumericDomain {
                context: "grid point count",
                value: count as f64,
            });
        }
        if !(stop > start) {
            return Err(SlbwError::NumericDomain {
                context: "grid stop energy",
                value: stop,
            });
        }
        let step = (stop - start) / (count - 1) as f64;
        let energies = (0..count)
            .map(|i| if i == count - 1 { stop } else { start + step * i as f64 })
            .collect();
        Self::from_energies(energies)
    }

    fn from_energies(energies: Vec<f64>) -> Result<Self> {
        for (index, pair) in energies.windows(2).enumerate() {
            if !(pair[1] > pair[0]) {
                return Err(SlbwError::NonIncreasingEnergy {
                    index: index + 1,
                    previous: pair[0],
                    current: pair[1],
                });
            }
        }
        Ok(Self { energies })
    }

    #[inline]
    pub fn energies(&self) -> &[f64] {
        &self.energies
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.energies.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.energies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn test_logarithmic_grid_endpoints() {
        let grid = EnergyGrid::logarithmic(1e-5, 1000.0, 0.075).unwrap();
        let expected = ((1000.0f64 - 1e-5) / 0.075).round() as usize;
        assert_eq!(grid.len(), expected);
        assert_relative_eq!(grid.energies()[0], 1e-5);
        assert_relative_eq!(*grid.energies().last().unwrap(), 1000.0);
    }

    #[test]
    fn test_logarithmic_grid_is_log_spaced() {
        let grid = EnergyGrid::logarithmic(1.0, 1000.0, 10.0).unwrap();
        let e = grid.energies();
        // Constant ratio between successive points.
        let ratio = e[1] / e[0];
        for pair in e.windows(2) {
            assert_relative_eq!(pair[1] / pair[0], ratio, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_linear_grid() {
        let grid = EnergyGrid::linear(1000.075, 2e7, 10).unwrap();
        assert_eq!(grid.len(), 10);
        assert_relative_eq!(grid.energies()[0], 1000.075);
        assert_relative_eq!(*grid.energies().last().unwrap(), 2e7);
        let step = grid.energies()[1] - grid.energies()[0];
        for pair in grid.energies().windows(2) {
            assert_relative_eq!(pair[1] - pair[0], step, max_relative = 1e-9);
        }
    }

    #[test]
    fn test_monotonicity() {
        for grid in [
            EnergyGrid::logarithmic(1e-5, 1000.0, 0.075).unwrap(),
            EnergyGrid::linear(1000.075, 2e7, 10).unwrap(),
        ] {
            for pair in grid.energies().windows(2) {
                assert!(pair[0] < pair[1]);
            }
        }
    }

    #[test]
    fn test_rejects_bad_bounds() {
        assert!(EnergyGrid::logarithmic(0.0, 1000.0, 0.075).is_err());
        assert!(EnergyGrid::logarithmic(10.0, 10.0, 0.075).is_err());
        assert!(EnergyGrid::linear(10.0, 5.0, 10).is_err());
        assert!(EnergyGrid::linear(1.0, 2.0, 1).is_err());
    }
}
