use thiserror::Error;

use crate::cs::graph::Vertex;

/// Errors raised by graph construction, input parsing and the batch driver.
///
/// The search algorithms themselves never fail on a well-formed graph: a
/// missing path or cycle is an ordinary outcome carried by
/// [`Solution`](crate::cs::graph::hamiltonian::Solution).
#[derive(Debug, Error)]
pub enum Error {
    #[error("vertex {0} is not part of the graph")]
    UnknownVertex(Vertex),

    #[error("the {0} algorithm is not supported")]
    Unsupported(&'static str),

    #[error("unknown algorithm `{0}`")]
    UnknownAlgorithm(String),

    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl Error {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        Error::Parse {
            line,
            message: message.into(),
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
