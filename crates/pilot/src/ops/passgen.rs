//! Password generation from a selectable character pool.

use pilot_common::PilotError;
use rand::seq::SliceRandom;

const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";
const SYMBOLS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Generate a password of `length` characters drawn uniformly from the
/// enabled classes. The router clamps the length and guarantees at least
/// one class, but an empty pool is still an error rather than a panic.
pub fn generate(
    length: usize,
    upper: bool,
    lower: bool,
    digits: bool,
    symbols: bool,
) -> Result<String, PilotError> {
    let mut pool = String::new();
    if upper {
        pool.push_str(UPPER);
    }
    if lower {
        pool.push_str(LOWER);
    }
    if digits {
        pool.push_str(DIGITS);
    }
    if symbols {
        pool.push_str(SYMBOLS);
    }

    if pool.is_empty() {
        return Err(PilotError::Password(
            "No character types selected for password".to_string(),
        ));
    }

    let chars: Vec<char> = pool.chars().collect();
    let mut rng = rand::thread_rng();
    Ok((0..length)
        .map(|_| *chars.choose(&mut rng).expect("pool is non-empty"))
        .collect())
}
