use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::Error;
use crate::huffman::Symbol;
use crate::{Arguments, Result};

const RANDOM_TEXT_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Random { length: usize, seed: Option<u64> },
}

impl From<&Arguments> for InputSource {
    fn from(value: &Arguments) -> Self {
        match &value.input_file {
            Some(path) => Self::File(path.clone()),
            None => Self::Random {
                length: value.random_length,
                seed: value.seed,
            },
        }
    }
}

impl InputSource {
    pub fn load(&self) -> Result<Vec<Symbol>> {
        match self {
            Self::File(path) => read_input_file(path),
            Self::Random { length, seed } => {
                let mut rng = match seed {
                    Some(seed) => StdRng::seed_from_u64(*seed),
                    None => StdRng::from_entropy(),
                };
                Ok(generate_random_text(*length, &mut rng))
            }
        }
    }
}

fn read_input_file(file_path: &Path) -> Result<Vec<Symbol>> {
    let path_name = file_path.to_string_lossy().into_owned();
    let file = File::open(file_path)
        .map_err(|e| Error::UnableToOpenInputFileForReading(path_name.clone(), e))?;
    let mut content = Vec::new();
    BufReader::new(file)
        .read_to_end(&mut content)
        .map_err(|e| Error::FailedToReadInputFile(path_name.clone(), e))?;
    log::info!("Read {} bytes from '{}'", content.len(), path_name);
    Ok(content)
}

/// Upper-case Latin letters drawn uniformly.
pub fn generate_random_text<R: Rng>(length: usize, rng: &mut R) -> Vec<Symbol> {
    (0..length)
        .map(|_| RANDOM_TEXT_ALPHABET[rng.gen_range(0..RANDOM_TEXT_ALPHABET.len())])
        .collect()
}
