#![doc = include_str!("../README.md")]

pub use raws3_core::*;

mod config;
pub use config::*;

mod endpoint;
pub use endpoint::Endpoint;

mod scheme;
pub use scheme::{new_signer, SignatureType};

pub mod aws {
    pub use raws3_aws_v4::*;
}
