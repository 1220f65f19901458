//! Parallel decoding of independent frames.
//!
//! Frames are distributed among the threads of the [`rayon`] global thread
//! pool. Each worker decodes with its own clone of a [`Decoder`], so the
//! message buffers are never shared.

use super::{Decoder, DecoderOutput};
use ndarray::Array2;
use rayon::prelude::*;

/// Decodes a batch of frames in parallel.
///
/// Each element of `frames` contains the intrinsic distributions of a frame,
/// in the format accepted by [`Decoder::decode`]. The results are returned in
/// the same order as the frames, and are the same as those obtained by
/// decoding the frames in sequence with `decoder`.
///
/// # Panics
///
/// This function panics if the shape of any of the frames is not valid for
/// the code of `decoder`.
pub fn decode_batch(
    decoder: &Decoder,
    frames: &[Array2<f64>],
    max_iterations: usize,
) -> Vec<Result<DecoderOutput, DecoderOutput>> {
    frames
        .par_iter()
        .map_init(
            || decoder.clone(),
            |decoder, intrinsic| decoder.decode(intrinsic, max_iterations),
        )
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{
        codes::qra12_63_64,
        encoder::Encoder,
        gf64::{Gf64, M},
        metric::{es_no_from_eb_no_db, intrinsic_probabilities},
    };
    use ndarray::Array1;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;
    use rand_distr::{Distribution, Normal};
    use std::sync::Arc;

    #[test]
    fn batch_matches_sequential() {
        let code = Arc::new(qra12_63_64::code().unwrap());
        let encoder = Encoder::new(Arc::clone(&code));
        let es_no = es_no_from_eb_no_db(qra12_63_64::METRIC_EBN0_DB, &code);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        // a mix of frames that decode and frames that do not
        let frames: Vec<Array2<f64>> = (0..16)
            .map(|j| {
                let message: Array1<Gf64> = (0..code.k())
                    .map(|_| Gf64::try_from(rng.gen_range(0..64u8)).unwrap())
                    .collect();
                let codeword = encoder.encode(&message);
                let normal = Normal::new(0.0, 0.2 + 0.05 * j as f64).unwrap();
                let energies = Array2::from_shape_fn((code.n(), M), |(l, k)| {
                    let amplitude = if usize::from(codeword[l]) == k {
                        1.0
                    } else {
                        0.0
                    };
                    let re: f64 = amplitude + normal.sample(&mut rng);
                    let im: f64 = normal.sample(&mut rng);
                    re * re + im * im
                });
                intrinsic_probabilities(&energies, es_no)
            })
            .collect();

        let decoder = Decoder::new(Arc::clone(&code));
        let batch = decode_batch(&decoder, &frames, 20);
        assert_eq!(batch.len(), frames.len());
        let mut sequential = decoder.clone();
        for (frame, result) in frames.iter().zip(batch.iter()) {
            assert_eq!(&sequential.decode(frame, 20), result);
        }
    }

    #[test]
    fn empty_batch() {
        let code = Arc::new(qra12_63_64::code().unwrap());
        let decoder = Decoder::new(code);
        assert!(decode_batch(&decoder, &[], 10).is_empty());
    }
}
