mod cross_section;
mod splicer;
mod writer;

pub use cross_section::{CrossSectionCurve, Reaction};
pub use splicer::SpectrumSplicer;
pub use writer::{CrossSectionFileWriter, Delimiter};
