use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::PathBuf;

use tracing::info;

use crate::config::SynthesisConfig;
use crate::curve::{CrossSectionCurve, CrossSectionFileWriter, Reaction, SpectrumSplicer};
use crate::error::{Result, SlbwError};
use crate::evaluator::{DopplerBroadenedXSEvaluator, EnergyGrid};
use crate::resonance::{ResonanceFileParser, SyntheticResonanceExtender};

//=====================================================================
// End-to-end synthesis: parse the resonance parameter file, extend
// the ladder into the unresolved region, evaluate the Doppler
// broadened SLBW line shapes over the resonance-region grid, splice
// on the flat background, and write the finished table. Resonance
// files are looked up by name under the configured library directory.
//=====================================================================

pub struct SlbwPipeline {
    config: SynthesisConfig,
}

impl SlbwPipeline {
    pub fn new(config: SynthesisConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[inline]
    pub fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Synthesize and write the table for one reaction. Returns the
    /// written path.
    pub fn synthesize(&self, resonance_file_name: &str, reaction: Reaction) -> Result<PathBuf> {
        let (capture, elastic, element, mass_number) = self.spliced_curves(resonance_file_name)?;
        let curve = match reaction {
            Reaction::Capture => capture,
            Reaction::Elastic => elastic,
        };
        self.write_table(&curve, &element, mass_number)
    }

    /// Synthesize both reactions from a single evaluation pass.
    pub fn synthesize_both(&self, resonance_file_name: &str) -> Result<(PathBuf, PathBuf)> {
        let (capture, elastic, element, mass_number) = self.spliced_curves(resonance_file_name)?;
        let capture_path = self.write_table(&capture, &element, mass_number)?;
        let elastic_path = self.write_table(&elastic, &element, mass_number)?;
        Ok((capture_path, elastic_path))
    }

    /// Write a flat elastic table at the potential scattering value,
    /// for isotopes treated without resonances.
    pub fn write_potential_scattering(&self, resonance_file_name: &str) -> Result<PathBuf> {
        let config = &self.config;
        let path = config.xs_library_dir.join(resonance_file_name);
        let parser = ResonanceFileParser::new(&path, config.number_of_positive_resonances);
        let (element, mass_number) = parser.isotope_name()?;
        let sig_p = read_potential_xs(&path)?;

        let grid = EnergyGrid::linear(config.energy_min, config.energy_max_final, 2)?;
        let curve = CrossSectionCurve::new(
            Reaction::Elastic,
            config.temperature_K,
            grid.energies().to_vec(),
            vec![sig_p; grid.len()],
        )?;

        let writer = CrossSectionFileWriter::new(
            &config.xs_library_dir,
            config.delimiter,
            config.overwrite,
        );
        writer.write(
            &curve,
            &element,
            mass_number,
            "Fictitious resonant scattering XS, values are potential XS",
        )
    }

    // Run parse, extend, evaluate, and splice once, yielding both
    // finished curves.
    fn spliced_curves(
        &self,
        resonance_file_name: &str,
    ) -> Result<(CrossSectionCurve, CrossSectionCurve, String, f64)> {
        let config = &self.config;
        let path = config.xs_library_dir.join(resonance_file_name);

        let parser = ResonanceFileParser::new(&path, config.number_of_positive_resonances);
        let mut dataset = parser.parse()?;

        SyntheticResonanceExtender::new(
            config.synthetic_region_lower_bound,
            config.resolved_region_cutoff,
            config.synthetic_resonance_spacing,
            config.synthetic_gamma_gamma,
        )
        .extend(&mut dataset)?;
        info!("resonance ladder complete: {}", dataset);

        let grid = EnergyGrid::logarithmic(
            config.energy_min,
            config.resolved_region_cutoff,
            config.energy_bin_width,
        )?;
        let evaluator =
            DopplerBroadenedXSEvaluator::new(config.temperature_K, config.interference_scale)?;
        let (capture, elastic) = evaluator.evaluate(&dataset, &grid)?;

        let splicer = SpectrumSplicer::new(
            config.resolved_region_cutoff,
            config.energy_max_final,
            config.energy_bin_width,
        );
        let capture = splicer.splice(capture, config.flat_background_xs)?;
        let elastic = splicer.splice(elastic, dataset.potential_xs_barns)?;

        let element = dataset.element.clone();
        let mass_number = dataset.mass_number;
        Ok((capture, elastic, element, mass_number))
    }

    fn write_table(
        &self,
        curve: &CrossSectionCurve,
        element: &str,
        mass_number: f64,
    ) -> Result<PathBuf> {
        let writer = CrossSectionFileWriter::new(
            &self.config.xs_library_dir,
            self.config.delimiter,
            self.config.overwrite,
        );
        let header = match curve.reaction {
            Reaction::Capture => format!(
                "Doppler Broadened SLBW fictitious capture XS at T={}K",
                self.config.temperature_K
            ),
            Reaction::Elastic => format!(
                "Doppler Broadened SLBW fictitious resonant scattering XS at T={}K",
                self.config.temperature_K
            ),
        };
        writer.write(curve, element, mass_number, &header)
    }
}

// Pull SigP from the first line without parsing the resonance table.
fn read_potential_xs(path: &std::path::Path) -> Result<f64> {
    if !path.exists() {
        return Err(SlbwError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let file = File::open(path).map_err(|source| SlbwError::ReadError {
        path: path.to_path_buf(),
        source,
    })?;
    let first = BufReader::new(file)
        .lines()
        .next()
        .transpose()
        .map_err(|source| SlbwError::ReadError {
            path: path.to_path_buf(),
            source,
        })?
        .unwrap_or_default();
    first
        .split_whitespace()
        .nth(1)
        .and_then(|token| token.parse::<f64>().ok())
        .ok_or_else(|| SlbwError::ParseError {
            line: 1,
            text: first,
            reason: "expected `<junk> <SigP> <units>`".to_string(),
        })
}
