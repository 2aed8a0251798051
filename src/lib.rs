//! Incremental MPEG-2 program stream demuxing.
//!
//! [`mp2p::PsDemuxer`] accepts a program stream in chunks framed on pack
//! boundaries, reassembles each pack and reports the elementary stream data it
//! carries, tagged with the `stream_type` announced by the program stream map.

mod context;
mod error;
mod internal;

pub mod mp2p;
pub mod stats;

pub use crate::error::*;
pub use crate::mp2p::{Config, PsDemuxer, PsHandler};
