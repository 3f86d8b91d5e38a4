use rand::Rng;

/// Length of generated record identifiers.
pub const ID_LENGTH: usize = 8;

/// URL-safe alphabet: `A-Z`, `a-z`, `0-9`, `_` and `-`.
const URL_ALPHABET: &[u8; 64] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789_-";

/// Produces identifiers for new records.
pub trait IdGenerator: Send + Sync + Clone {
    fn generate(&self) -> String;
}

/// Random fixed-length ids drawn from [`URL_ALPHABET`] with the thread-local CSPRNG.
#[derive(Debug, Clone, Copy)]
pub struct NanoIdGenerator {
    length: usize,
}

impl NanoIdGenerator {
    pub fn new() -> Self {
        Self { length: ID_LENGTH }
    }

    pub fn with_length(length: usize) -> Self {
        Self { length }
    }
}

impl Default for NanoIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for NanoIdGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..self.length)
            .map(|_| char::from(URL_ALPHABET[rng.random_range(0..URL_ALPHABET.len())]))
            .collect()
    }
}

/// Whether `s` only uses characters a [`NanoIdGenerator`] can emit.
pub fn is_url_safe(s: &str) -> bool {
    s.bytes().all(|b| URL_ALPHABET.contains(&b))
}
