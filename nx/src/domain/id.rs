//! Identifier generation
//!
//! Proposal ids are six uppercase base-36 characters drawn from a
//! non-cryptographic RNG. They are only unique within the running process.

use rand::Rng;

const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Length of a generated proposal id
pub const PROPOSAL_ID_LEN: usize = 6;

/// Generate a proposal id that does not collide with any of `taken`
pub fn generate_proposal_id<'a, I>(taken: I) -> String
where
    I: IntoIterator<Item = &'a str> + Clone,
{
    let mut rng = rand::rng();
    loop {
        let id: String = (0..PROPOSAL_ID_LEN)
            .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
            .collect();
        if !taken.clone().into_iter().any(|t| t == id) {
            return id;
        }
        tracing::debug!(%id, "generate_proposal_id: collision, drawing again");
    }
}

/// Random lowercase seed, used to reseed avatar URLs
pub fn random_seed() -> String {
    let mut rng = rand::rng();
    (0..8)
        .map(|_| ALPHABET[rng.random_range(10..ALPHABET.len())].to_ascii_lowercase() as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_proposal_id_format() {
        let id = generate_proposal_id(std::iter::empty::<&str>());
        assert_eq!(id.len(), PROPOSAL_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
    }

    #[test]
    fn test_generate_proposal_id_avoids_taken() {
        let taken: Vec<String> = (0..50).map(|_| generate_proposal_id(std::iter::empty::<&str>())).collect();
        let id = generate_proposal_id(taken.iter().map(String::as_str));
        assert!(!taken.contains(&id));
    }

    #[test]
    fn test_random_seed() {
        let seed = random_seed();
        assert_eq!(seed.len(), 8);
        assert!(seed.chars().all(|c| c.is_ascii_lowercase()));
    }
}
