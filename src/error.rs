use std::{io, path::PathBuf};

use thiserror::Error;

use crate::parser::ParseError;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("failed to create file {}: {source}", path.display())]
    Create { path: PathBuf, source: io::Error },

    #[error("failed to write to file {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}

pub type Result<T> = std::result::Result<T, Error>;
