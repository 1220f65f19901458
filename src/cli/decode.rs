//! Decode CLI subcommand.
//!
//! This command decodes frames of the (12, 63) QRA code received with a
//! noncoherent 64-FSK demodulator.
//!
//! # Examples
//!
//! ```shell
//! $ qracodes decode --max-iter 50 energies.bin messages.bin
//! ```
//!
//! The input file contains, for each frame, the 63 x 64 tone energies as
//! little-endian `f64`, in row-major order (the 64 tones of the first
//! codeword symbol come first). The output file contains 12 bytes per frame,
//! each of them a decoded symbol. Frames that cannot be decoded are written
//! as 12 bytes with the value `0xff`. Frames are decoded in parallel.

use crate::{
    cli::{qra_code, Run},
    codes::qra12_63_64,
    decoder::{
        batch::decode_batch, Decoder, DecoderOutput, DEFAULT_CONVERGENCE_TOLERANCE,
        DEFAULT_MAX_ITERATIONS,
    },
    gf64::M,
    metric::{es_no_from_eb_no_db, intrinsic_probabilities},
};
use clap::Parser;
use ndarray::Array2;
use std::{
    error::Error,
    fs::File,
    io::{ErrorKind, Read, Write},
    path::PathBuf,
    time::Instant,
};
use tracing::{debug, info, warn};

/// Output byte used for the symbols of erased frames.
pub const ERASURE: u8 = 0xff;

const F64_BYTES: usize = std::mem::size_of::<f64>();

/// Decode CLI arguments.
#[derive(Debug, Parser)]
#[command(about = "Performs QRA decoding")]
pub struct Args {
    /// input file (tone energies as little-endian f64)
    pub input: PathBuf,
    /// output file (decoded messages as one symbol per byte)
    pub output: PathBuf,
    /// Maximum number of iterations
    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iter: usize,
    /// Eb/N0 (dB) used by the channel metric
    #[arg(long, default_value_t = qra12_63_64::METRIC_EBN0_DB)]
    pub metric_ebn0: f64,
    /// Decoder convergence tolerance
    #[arg(long, default_value_t = DEFAULT_CONVERGENCE_TOLERANCE)]
    pub tolerance: f64,
    /// Number of frames decoded in parallel
    #[arg(long, default_value = "256")]
    pub batch_size: usize,
}

// Reads until buf is full or the input ends. Returns the number of bytes read.
fn fill(input: &mut impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(len) => filled += len,
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

fn read_frame(
    input: &mut impl Read,
    buf: &mut [u8],
    n: usize,
) -> Result<Option<Array2<f64>>, Box<dyn Error>> {
    let filled = fill(input, buf)?;
    if filled == 0 {
        return Ok(None);
    }
    if filled < buf.len() {
        warn!(
            bytes = filled,
            frame_bytes = buf.len(),
            "ignoring incomplete frame at end of input"
        );
        return Ok(None);
    }
    let energies = buf
        .chunks_exact(F64_BYTES)
        .map(|b| b.try_into().map(f64::from_le_bytes))
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(Some(Array2::from_shape_vec((n, M), energies)?))
}

impl Run for Args {
    fn run(&self) -> Result<(), Box<dyn Error>> {
        if self.batch_size == 0 {
            return Err("batch size must be positive".into());
        }
        let code = qra_code()?;
        let es_no = es_no_from_eb_no_db(self.metric_ebn0, &code);
        let (k, n) = (code.k(), code.n());
        let decoder = Decoder::new(code).with_convergence_tolerance(self.tolerance);
        let mut input = File::open(&self.input)?;
        let mut output = File::create(&self.output)?;
        let mut frame_buf = vec![0; n * M * F64_BYTES];
        let mut message_buf = vec![0; k];
        let (mut frames, mut decoded) = (0usize, 0usize);
        let start = Instant::now();
        let mut batch = Vec::with_capacity(self.batch_size);
        loop {
            batch.clear();
            while batch.len() < self.batch_size {
                match read_frame(&mut input, &mut frame_buf, n)? {
                    Some(energies) => batch.push(intrinsic_probabilities(&energies, es_no)),
                    None => break,
                }
            }
            if batch.is_empty() {
                break;
            }
            for result in decode_batch(&decoder, &batch, self.max_iter) {
                match result {
                    Ok(DecoderOutput {
                        message,
                        iterations,
                        ..
                    }) => {
                        debug!(frame = frames, iterations, "frame decoded");
                        for (x, y) in message.iter().zip(message_buf.iter_mut()) {
                            *y = u8::from(*x);
                        }
                        decoded += 1;
                    }
                    Err(_) => {
                        debug!(frame = frames, "frame erased");
                        message_buf.fill(ERASURE);
                    }
                }
                output.write_all(&message_buf)?;
                frames += 1;
            }
            if batch.len() < self.batch_size {
                break;
            }
        }
        info!(
            frames,
            decoded,
            erased = frames - decoded,
            elapsed = %humantime::format_duration(start.elapsed()),
            "decoding finished"
        );
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn frame_parsing() {
        let n = 2;
        let values: Vec<f64> = (0..n * M).map(|j| j as f64 * 0.25).collect();
        let mut bytes: Vec<u8> = values.iter().flat_map(|x| x.to_le_bytes()).collect();
        // trailing incomplete frame
        bytes.extend_from_slice(&[0; 5]);
        let mut input = &bytes[..];
        let mut buf = vec![0; n * M * F64_BYTES];
        let frame = read_frame(&mut input, &mut buf, n).unwrap().unwrap();
        assert_eq!(frame.dim(), (n, M));
        assert_eq!(frame[[0, 1]], 0.25);
        assert_eq!(frame[[1, 0]], 16.0);
        assert!(read_frame(&mut input, &mut buf, n).unwrap().is_none());
        assert!(read_frame(&mut input, &mut buf, n).unwrap().is_none());
    }

    // reader returning at most 3 bytes per call
    struct Chunked<'a>(&'a [u8]);

    impl Read for Chunked<'_> {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            let len = buf.len().min(self.0.len()).min(3);
            buf[..len].copy_from_slice(&self.0[..len]);
            self.0 = &self.0[len..];
            Ok(len)
        }
    }

    #[test]
    fn fill_counts_bytes() {
        let bytes: Vec<u8> = (0..20).collect();
        let mut input = Chunked(&bytes);
        let mut buf = [0; 16];
        assert_eq!(fill(&mut input, &mut buf).unwrap(), 16);
        assert_eq!(buf[15], 15);
        // trailing incomplete frame
        assert_eq!(fill(&mut input, &mut buf).unwrap(), 4);
        assert_eq!(&buf[..4], &[16, 17, 18, 19]);
        assert_eq!(fill(&mut input, &mut buf).unwrap(), 0);
    }
}
