//! Base58 encoding for coin seeds.
//!
//! [`encode`] treats its input as one big-endian unsigned integer and
//! writes it in base 58. Leading zero bytes carry no value and therefore
//! produce no leading `1` characters; this differs from the Bitcoin
//! convention and is relied upon by every seed file printed so far.
//! [`decode_seed`] compensates by left-padding to the seed width.

use crate::seed::SEED_LEN;

#[derive(Debug, thiserror::Error)]
pub enum Base58Error {
    #[error("seed string encodes a zero value")]
    Empty,

    #[error(transparent)]
    Decode(#[from] bs58::decode::Error),

    #[error("decoded value is {0} bytes wide, a seed holds at most 32")]
    TooWide(usize),
}

/// Encode `bytes` as a base58 string, most significant digit first.
pub fn encode(bytes: &[u8]) -> String {
    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    bs58::encode(&bytes[leading_zeros..]).into_string()
}

/// Decode a base58 string into the minimal big-endian byte string of its
/// value. Leading zero bytes are dropped, mirroring [`encode`].
pub fn decode(encoded: &str) -> Result<Vec<u8>, Base58Error> {
    let mut bytes = bs58::decode(encoded).into_vec()?;
    let leading_zeros = bytes.iter().take_while(|&&b| b == 0).count();
    bytes.drain(..leading_zeros);
    Ok(bytes)
}

/// Decode an encoded seed back to its 32 raw bytes.
pub fn decode_seed(encoded: &str) -> Result<[u8; SEED_LEN], Base58Error> {
    let value = decode(encoded)?;
    if value.is_empty() {
        return Err(Base58Error::Empty);
    }
    if value.len() > SEED_LEN {
        return Err(Base58Error::TooWide(value.len()));
    }

    let mut seed = [0u8; SEED_LEN];
    seed[SEED_LEN - value.len()..].copy_from_slice(&value);
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_encodes_to_empty_string() {
        assert_eq!(encode(b""), "");
    }

    #[test]
    fn leading_zero_bytes_are_not_padded() {
        assert_eq!(encode(&[0, 0, 1]), "2");
        assert_eq!(encode(&[1]), "2");
        assert_eq!(encode(&[0, 0, 0]), "");
    }

    #[test]
    fn known_vectors() {
        assert_eq!(encode(&[57]), "z");
        assert_eq!(encode(&[58]), "21");
        assert_eq!(encode(b"hello world"), "StV1DL6CwTryKyV");
        assert_eq!(encode(&[0xff; 4]), "7YXq9G");
    }

    #[test]
    fn zero_prefix_only_drops_the_padding_digits() {
        let value = [0x3c, 0x01, 0xfe];
        let mut padded = vec![0u8; 3];
        padded.extend_from_slice(&value);
        assert_eq!(encode(&padded), encode(&value));
        assert_eq!(
            format!("111{}", encode(&value)),
            bs58::encode(&padded).into_string()
        );
    }

    #[test]
    fn round_trips_without_leading_zeros() {
        let samples: [&[u8]; 4] = [
            &[1],
            &[0x80, 0x00, 0x00],
            b"coinprint",
            &[0xde, 0xad, 0xbe, 0xef, 0x00, 0x00, 0x01],
        ];
        for sample in samples {
            let encoded = encode(sample);
            assert_eq!(decode(&encoded).expect("decode"), sample, "{encoded}");
        }
    }

    #[test]
    fn decode_seed_restores_leading_zero_bytes() {
        let mut seed = [0x5au8; SEED_LEN];
        seed[0] = 0;
        seed[1] = 0;

        let encoded = encode(&seed);
        assert_eq!(decode_seed(&encoded).expect("decode seed"), seed);
    }

    #[test]
    fn decode_seed_rejects_empty_and_invalid_input() {
        assert!(matches!(decode_seed(""), Err(Base58Error::Empty)));
        assert!(matches!(decode_seed("0OIl"), Err(Base58Error::Decode(_))));
    }

    #[test]
    fn decode_seed_rejects_all_zero_values() {
        let all_ones = "1".repeat(SEED_LEN);
        for zero in ["1", "111", all_ones.as_str()] {
            assert!(matches!(decode_seed(zero), Err(Base58Error::Empty)), "{zero}");
        }
    }

    #[test]
    fn decode_seed_rejects_values_wider_than_a_seed() {
        let encoded = encode(&[0xff; SEED_LEN + 1]);
        assert!(matches!(
            decode_seed(&encoded),
            Err(Base58Error::TooWide(33))
        ));
    }
}
