//! Reading and writing single individuals as text archives.
//!
//! An archive is a JSON document holding one individual under the top-level
//! tag `individual`:
//!
//! ```json
//! {"individual": {"name": 7, "generation": 2.5, "null_fitness": true,
//!                 "representation": {"genome": "2 1 2.5"},
//!                 "meta_data": {}, "update": 100}}
//! ```
//!
//! All functions are synchronous one-shot operations. A failed load never
//! yields a partially built individual.
//!
//! # Example
//!
//! ```rust
//! use symbios_archive::{archive, Individual, Intstring};
//!
//! let ind: Individual<Intstring, f64> = Individual::new(vec![3, -1, 0, 42].into());
//! let text = archive::save_to_string(&ind).unwrap();
//! let back: Individual<Intstring, f64> = archive::load_from_str(&text).unwrap();
//! assert_eq!(back.repr(), ind.repr());
//! assert!(!back.is_evaluated());
//! ```

use crate::error::Result;
use crate::individual::Individual;
use crate::{Fitness, Representation};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// How archives are rendered on write. Reading accepts either form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveOptions {
    /// Indent nested tags, one field per line.
    pub pretty: bool,
}

impl ArchiveOptions {
    pub fn compact() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

#[derive(Serialize)]
#[serde(bound = "")]
struct Envelope<'a, R: Representation, F: Fitness> {
    individual: &'a Individual<R, F>,
}

#[derive(Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
struct OwnedEnvelope<R: Representation, F: Fitness> {
    individual: Individual<R, F>,
}

/// Write `individual` to `out` in compact form.
pub fn save<W, R, F>(out: W, individual: &Individual<R, F>) -> Result<()>
where
    W: Write,
    R: Representation,
    F: Fitness,
{
    save_with(out, individual, &ArchiveOptions::default())
}

pub fn save_with<W, R, F>(
    mut out: W,
    individual: &Individual<R, F>,
    options: &ArchiveOptions,
) -> Result<()>
where
    W: Write,
    R: Representation,
    F: Fitness,
{
    let envelope = Envelope { individual };
    if options.pretty {
        serde_json::to_writer_pretty(&mut out, &envelope)?;
    } else {
        serde_json::to_writer(&mut out, &envelope)?;
    }
    out.flush()?;
    Ok(())
}

pub fn save_to_string<R, F>(individual: &Individual<R, F>) -> Result<String>
where
    R: Representation,
    F: Fitness,
{
    Ok(serde_json::to_string(&Envelope { individual })?)
}

/// Create (or truncate) the file at `path` and write `individual` into it.
pub fn save_path<P, R, F>(
    path: P,
    individual: &Individual<R, F>,
    options: &ArchiveOptions,
) -> Result<()>
where
    P: AsRef<Path>,
    R: Representation,
    F: Fitness,
{
    let path = path.as_ref();
    log::debug!(
        "saving individual {} to {}",
        individual.name(),
        path.display()
    );
    let file = File::create(path)?;
    save_with(BufWriter::new(file), individual, options)
}

/// Parse one individual from `input`. Trailing non-whitespace is an error.
pub fn load<Rd, R, F>(input: Rd) -> Result<Individual<R, F>>
where
    Rd: Read,
    R: Representation,
    F: Fitness,
{
    let envelope: OwnedEnvelope<R, F> = serde_json::from_reader(input)?;
    Ok(envelope.individual)
}

pub fn load_from_str<R, F>(text: &str) -> Result<Individual<R, F>>
where
    R: Representation,
    F: Fitness,
{
    let envelope: OwnedEnvelope<R, F> = serde_json::from_str(text)?;
    Ok(envelope.individual)
}

/// Open `path` and parse one individual from it.
///
/// Fails with [`ArchiveError::Io`](crate::ArchiveError::Io) before any parsing
/// if the file cannot be opened. The file is closed before returning on every path.
pub fn load_path<P, R, F>(path: P) -> Result<Individual<R, F>>
where
    P: AsRef<Path>,
    R: Representation,
    F: Fitness,
{
    let path = path.as_ref();
    let file = File::open(path)?;
    match load(BufReader::new(file)) {
        Ok(individual) => {
            log::debug!(
                "loaded individual {} from {}",
                individual.name(),
                path.display()
            );
            Ok(individual)
        }
        Err(e) => {
            log::warn!("failed to load individual from {}: {e}", path.display());
            Err(e)
        }
    }
}
