//! `qracodes` CLI application
//!
//! The CLI application is organized in several subcommands. The
//! supported subcommands can be seen by running `qracodes`.
//! See the modules below for examples and more information about
//! how to use each subcommand.
//!
//! Logging is controlled with the `RUST_LOG` environment variable. By default
//! messages of level `info` and above are written to the standard error.

use crate::{code::QraCode, codes::qra12_63_64};
use clap::Parser;
use std::{error::Error, sync::Arc};

pub mod code;
pub mod decode;
pub mod encode;

/// Trait to run a CLI subcommand
pub trait Run {
    /// Run the CLI subcommand
    fn run(&self) -> Result<(), Box<dyn Error>>;
}

/// CLI arguments.
#[derive(Debug, Parser)]
#[command(
    author,
    version,
    name = "qracodes",
    about = "Q-ary RA codes over GF(64)"
)]
pub enum Args {
    /// code subcommand
    Code(code::Args),
    /// decode subcommand
    Decode(decode::Args),
    /// encode subcommand
    Encode(encode::Args),
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        match self {
            Args::Code(x) => x.run(),
            Args::Decode(x) => x.run(),
            Args::Encode(x) => x.run(),
        }
    }
}

fn qra_code() -> Result<Arc<QraCode>, Box<dyn Error>> {
    Ok(Arc::new(qra12_63_64::code()?))
}
