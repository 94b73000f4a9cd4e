use thiserror::Error;

use crate::DestinationId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown destination: {0}")]
    UnknownDestination(DestinationId),
    #[error("Invalid data: {0}")]
    InvalidData(String),
    #[error("Configuration error: {0}")]
    Config(String),
}
