mod faddeeva;
mod grid;
mod slbw;

pub use faddeeva::faddeeva as faddeeva_w;
pub use grid::EnergyGrid;
pub use slbw::{DopplerBroadenedXSEvaluator, BOLTZMANN_EV_PER_K, PEAK_XS_SCALE};
