mod dataset;
mod extender;
mod parser;
mod record;

pub use dataset::IsotopeResonanceDataset;
pub use extender::SyntheticResonanceExtender;
pub use parser::ResonanceFileParser;
pub use record::{decode_fixed_width, encode_fixed_width, ResonanceRecord};
