pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod matrix;
pub mod sequencer;

pub use error::{Result, TtpseqError};
