//! # QRA codes
//!
//! `qracodes` implements Q-ary Repeat-Accumulate (QRA) codes over GF(64) for
//! weak signal digital modes using 64-FSK modulation. It contains a systematic
//! encoder, the channel likelihood estimator for noncoherent detection, and a
//! belief propagation decoder that works with probability distributions over
//! the field.
//!
//! The (12, 63) code in [`codes::qra12_63_64`] is provided. Other QRA codes
//! can be described with a [`code::QraCode`].
//!
//! It can be used as a Rust library or as a CLI tool that allows access from
//! the command line to the encoder and decoder. See [`cli`] for documentation
//! about the usage of the CLI tool.

#![warn(missing_docs)]

pub mod cli;
pub mod code;
pub mod codes;
pub mod decoder;
pub mod encoder;
pub mod gf64;
pub mod metric;
pub mod pd;
