use crate::profile::AdId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Impression count must be positive")]
    InvalidQuantity,

    #[error("Insufficient payment: required {required}, offered {offered}")]
    InsufficientPayment { required: u64, offered: u64 },

    #[error("Ad {0} not found")]
    NotFound(AdId),

    #[error("Ad {0} has no impressions remaining")]
    Exhausted(AdId),

    #[error("Requesting user is not active")]
    InactiveUser,

    #[error("No active ads in the catalogue")]
    NoInventory,

    #[error("Invalid profile: {0}")]
    InvalidProfile(String),
}

pub type Result<T> = std::result::Result<T, Error>;
