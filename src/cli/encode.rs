//! Encode CLI subcommand.
//!
//! This command encodes messages with the (12, 63) QRA code.
//!
//! # Examples
//!
//! ```shell
//! $ qracodes encode messages.bin codewords.bin
//! ```
//!
//! The input file contains 12 bytes per message, each of them a symbol in
//! `[0, 64)`. The output file contains 63 bytes per codeword.

use crate::{
    cli::{qra_code, Run},
    encoder::Encoder,
    gf64::Gf64,
};
use clap::Parser;
use ndarray::Array1;
use std::{
    error::Error,
    fs::File,
    io::{ErrorKind, Read, Write},
    path::PathBuf,
};
use tracing::info;

/// Encode CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Performs QRA encoding")]
pub struct Args {
    /// input file (messages as one symbol per byte)
    pub input: PathBuf,
    /// output file (codewords as one symbol per byte)
    pub output: PathBuf,
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        let code = qra_code()?;
        let mut input = File::open(&self.input)?;
        let mut output = File::create(&self.output)?;
        let mut message_buf = vec![0; code.k()];
        let mut codeword_buf = vec![0; code.n()];
        let encoder = Encoder::new(code);
        let mut messages = 0;
        loop {
            match input.read_exact(&mut message_buf[..]) {
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => break,
                ret => ret?,
            };
            let message = message_buf
                .iter()
                .map(|&b| Gf64::try_from(b))
                .collect::<Result<Array1<Gf64>, _>>()?;
            let codeword = encoder.encode(&message);
            for (x, y) in codeword.iter().zip(codeword_buf.iter_mut()) {
                *y = u8::from(*x);
            }
            output.write_all(&codeword_buf)?;
            messages += 1;
        }
        info!(messages, "encoding finished");
        Ok(())
    }
}
