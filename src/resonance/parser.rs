use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::PathBuf;

use tracing::{info, warn};

use crate::error::{Result, SlbwError};
use crate::resonance::record::decode_fixed_width;
use crate::resonance::{IsotopeResonanceDataset, ResonanceRecord};

//=====================================================================
// Parser for resonance parameter files. The expected layout:
//
//   line 1:     <junk> <SigP> <units>
//   lines 2-3:  formatting, skipped
//   remaining:  six fixed-width fields per resonance
//               E0 J GN GG GFA GFB
//
// Bound (negative-energy) resonances precede the positive ones and
// are skipped. Only E0, GN, and GG are retained.
//=====================================================================

pub struct ResonanceFileParser {
    path: PathBuf,
    number_of_positive_resonances: usize,
    isotope_override: Option<(String, f64)>,
}

impl ResonanceFileParser {
    pub fn new<P: Into<PathBuf>>(path: P, number_of_positive_resonances: usize) -> Self {
        Self {
            path: path.into(),
            number_of_positive_resonances,
            isotope_override: None,
        }
    }

    /// Override the element symbol and mass number for files whose
    /// names do not follow the `El-A-...` convention.
    pub fn with_isotope(mut self, element: &str, mass_number: f64) -> Self {
        self.isotope_override = Some((element.to_string(), mass_number));
        self
    }

    pub fn parse(&self) -> Result<IsotopeResonanceDataset> {
        if !self.path.exists() {
            warn!("unable to load resonance parameter file {}", self.path.display());
            return Err(SlbwError::FileNotFound {
                path: self.path.clone(),
            });
        }
        info!("loading resonance parameter file {}", self.path.display());

        let (element, mass_number) = self.isotope_name()?;

        let file = File::open(&self.path).map_err(|source| SlbwError::ReadError {
            path: self.path.clone(),
            source,
        })?;
        let mut lines = BufReader::new(file).lines();
        let mut line_no = 0usize;

        // Line 1 carries the potential scattering cross section in its
        // second field.
        let first = self.next_line(&mut lines, &mut line_no)?.ok_or_else(|| {
            SlbwError::ParseError {
                line: 1,
                text: String::new(),
                reason: "file is empty".to_string(),
            }
        })?;
        let potential_xs_barns = first
            .split_whitespace()
            .nth(1)
            .and_then(|token| token.parse::<f64>().ok())
            .ok_or_else(|| SlbwError::ParseError {
                line: 1,
                text: first.clone(),
                reason: "expected `<junk> <SigP> <units>`".to_string(),
            })?;

        // Two fixed formatting lines follow.
        for _ in 0..2 {
            self.next_line(&mut lines, &mut line_no)?;
        }

        let mut dataset = IsotopeResonanceDataset::new(element, mass_number, potential_xs_barns)?;

        // Skip bound resonances. The sign check consumes the text up
        // to the first decimal point, so the first positive line has
        // to be reassembled from its integer prefix before decoding.
        let first_positive = loop {
            let Some(line) = self.next_line(&mut lines, &mut line_no)? else {
                return Err(SlbwError::InsufficientData {
                    requested: self.number_of_positive_resonances,
                    available: 0,
                });
            };
            let (prefix, rest) = line.split_once('.').ok_or_else(|| SlbwError::ParseError {
                line: line_no,
                text: line.clone(),
                reason: "energy field has no decimal point".to_string(),
            })?;
            let integer_part: f64 =
                prefix.trim().parse().map_err(|_| SlbwError::ParseError {
                    line: line_no,
                    text: line.clone(),
                    reason: "energy field has a non-numeric integer part".to_string(),
                })?;
            if integer_part < 0.0 {
                continue;
            }
            break (format!("{}.{}", integer_part as i64, rest), line_no);
        };

        let record = self.parse_resonance_line(&first_positive.0, first_positive.1)?;
        dataset.append(record)?;

        // The requested count minus the line already consumed.
        while dataset.len() < self.number_of_positive_resonances {
            let Some(line) = self.next_line(&mut lines, &mut line_no)? else {
                return Err(SlbwError::InsufficientData {
                    requested: self.number_of_positive_resonances,
                    available: dataset.len(),
                });
            };
            let record = self.parse_resonance_line(&line, line_no)?;
            dataset.append(record)?;
        }

        Ok(dataset)
    }

    // Pull one line, tracking the 1-based line number for errors.
    fn next_line(
        &self,
        lines: &mut Lines<BufReader<File>>,
        line_no: &mut usize,
    ) -> Result<Option<String>> {
        match lines.next() {
            Some(Ok(line)) => {
                *line_no += 1;
                Ok(Some(line))
            }
            Some(Err(source)) => Err(SlbwError::ReadError {
                path: self.path.clone(),
                source,
            }),
            None => Ok(None),
        }
    }

    // Decode the E0, GN, and GG fields of one resonance line.
    fn parse_resonance_line(&self, line: &str, line_no: usize) -> Result<ResonanceRecord> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(SlbwError::ParseError {
                line: line_no,
                text: line.to_string(),
                reason: format!("expected six fields, found {}", fields.len()),
            });
        }
        let decode = |field: &str| {
            decode_fixed_width(field).map_err(|e| SlbwError::ParseError {
                line: line_no,
                text: line.to_string(),
                reason: e.to_string(),
            })
        };
        let energy = decode(fields[0])?;
        let neutron_width = decode(fields[2])?;
        let radiative_width = decode(fields[3])?;
        ResonanceRecord::new(energy, neutron_width, radiative_width)
    }

    /// Recover the element symbol and mass number, by default from
    /// the `El-A-rest` file name convention.
    pub fn isotope_name(&self) -> Result<(String, f64)> {
        if let Some((element, mass_number)) = &self.isotope_override {
            return Ok((element.clone(), *mass_number));
        }
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut parts = name.splitn(3, '-');
        let element = parts.next().unwrap_or_default().to_string();
        let mass_number = parts
            .next()
            .and_then(|a| a.parse::<f64>().ok())
            .ok_or_else(|| SlbwError::ParseError {
                line: 0,
                text: name.clone(),
                reason: "file name does not follow the El-A-... convention".to_string(),
            })?;
        Ok((element, mass_number))
    }
}
