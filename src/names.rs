//! Random display names
//!
//! Every zone page greets the visitor with a freshly invented creature name
//! such as "Gloomyfin Lanternjaw". Names are built from static word lists:
//! an adjective glued to a noun, followed by a second noun.

use rand::seq::SliceRandom;
use rand::Rng;

static ADJECTIVES: &[&str] = &[
    "Gloomy", "Glowing", "Salty", "Murky", "Inky", "Briny", "Silent", "Drifting",
    "Spiny", "Gentle", "Ghostly", "Velvet", "Coral", "Frosty", "Sleepy", "Rusty",
    "Bubbly", "Shimmer", "Tidal", "Crimson", "Pale", "Wobbly", "Sunken", "Hollow",
    "Lucky", "Brave", "Grumpy", "Swift", "Twisty", "Dusky", "Stormy", "Pearly",
];

static NOUNS: &[&str] = &[
    "fin", "gill", "jaw", "tail", "scale", "snout", "tooth", "whisker",
    "lantern", "kelp", "reef", "shell", "current", "trench", "bubble", "tide",
    "squid", "eel", "ray", "krill", "urchin", "barnacle", "anchor", "wave",
    "drift", "spine", "fathom", "brine", "plankton", "coral", "abyss", "pearl",
];

/// Generate a display name using the thread-local RNG.
pub fn generate_name() -> String {
    generate_name_with(&mut rand::thread_rng())
}

/// Generate a display name from the given RNG.
pub fn generate_name_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let adjective = ADJECTIVES.choose(rng).copied().unwrap_or("Salty");
    let first = NOUNS.choose(rng).copied().unwrap_or("fin");
    let second = NOUNS.choose(rng).copied().unwrap_or("tail");

    format!("{}{} {}", adjective, first, capitalize(second))
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_name_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let name = generate_name_with(&mut rng);
            let words: Vec<&str> = name.split(' ').collect();
            assert_eq!(words.len(), 2, "unexpected name: {}", name);
            for word in words {
                assert!(word.chars().next().unwrap().is_uppercase(), "{}", name);
                assert!(word.chars().all(|c| c.is_ascii_alphabetic()), "{}", name);
            }
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let a = generate_name_with(&mut StdRng::seed_from_u64(7));
        let b = generate_name_with(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_thread_rng_name_is_not_empty() {
        assert!(!generate_name().trim().is_empty());
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("krill"), "Krill");
        assert_eq!(capitalize(""), "");
    }
}
