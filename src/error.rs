use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FuelError {
    #[error("could not open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not read masses")]
    Read {
        #[source]
        source: io::Error,
    },

    /// A token that is not a whole number. `line` starts at 1.
    #[error("invalid mass {token:?} on line {line}")]
    Parse {
        token: String,
        line: usize,
        #[source]
        source: ParseIntError,
    },
}
