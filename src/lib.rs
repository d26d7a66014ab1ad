#![allow(non_snake_case)]

//! Synthesis of temperature-dependent neutron cross-section tables
//! from tabulated resonance parameters, using the Single-Level
//! Breit-Wigner formalism with Doppler broadening. The finished
//! tables are consumed as lookup curves by a Monte Carlo transport
//! engine.

mod config;
mod curve;
mod error;
mod evaluator;
mod pipeline;
mod resonance;

pub use config::SynthesisConfig;
pub use curve::{CrossSectionCurve, CrossSectionFileWriter, Delimiter, Reaction, SpectrumSplicer};
pub use error::{Result, SlbwError};
pub use evaluator::{
    faddeeva_w, DopplerBroadenedXSEvaluator, EnergyGrid, BOLTZMANN_EV_PER_K, PEAK_XS_SCALE,
};
pub use pipeline::SlbwPipeline;
pub use resonance::{
    decode_fixed_width, encode_fixed_width, IsotopeResonanceDataset, ResonanceFileParser,
    ResonanceRecord, SyntheticResonanceExtender,
};
