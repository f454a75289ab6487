use std::{fs, io, path::Path};

use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
    #[error("input is empty, expected a grid size")]
    Empty,
    #[error("token #{position} is not a non-negative integer: '{token}'")]
    NotAnInteger { position: usize, token: String },
    #[error("site list ends with a lone coordinate {0}")]
    UnpairedCoordinate(usize),
}

/// A grid size followed by the sites to open, in input order.
#[derive(Debug, PartialEq, Eq)]
pub struct Script {
    pub size: usize,
    pub sites: Vec<(usize, usize)>,
}

pub fn parse(content: &str) -> Result<Script, InputError> {
    let mut numbers = content
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| {
            token.parse::<usize>().map_err(|_| InputError::NotAnInteger {
                position: position + 1,
                token: token.to_string(),
            })
        });

    let size = numbers.next().ok_or(InputError::Empty)??;
    let mut sites = Vec::new();
    while let Some(row) = numbers.next() {
        let row = row?;
        let col = numbers
            .next()
            .ok_or(InputError::UnpairedCoordinate(row))??;
        sites.push((row, col));
    }

    Ok(Script { size, sites })
}

pub fn read<P: AsRef<Path>>(path: P) -> Result<Script, InputError> {
    parse(&fs::read_to_string(path)?)
}

////////////////////////////////////////////////////////////////////////////////
