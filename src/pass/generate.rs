//! Password construction.

use rand::seq::SliceRandom;
use rand::{CryptoRng, Rng};
use thiserror::Error;
use zeroize::Zeroizing;

use super::Password;
use super::charset::{CharacterClass, CharacterPool, ClassKind};

/// One character from each class.
pub const MIN_LENGTH: usize = 4;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(
        "Password length must be at least {minimum} to include all required character types (requested {length})."
    )]
    InvalidLength { length: usize, minimum: usize },

    #[error(
        "Requested password length ({length}) exceeds the number of unique characters available ({capacity})."
    )]
    CapacityExceeded { length: usize, capacity: usize },

    #[error("Character class '{0}' must not be empty.")]
    EmptyCharacterClass(ClassKind),
}

/// Build a password of exactly `length` characters from `pool`.
///
/// The result holds at least one character of every class and never repeats
/// a character. Every pick and the final shuffle draw from `rng`, which must
/// be a cryptographically secure generator.
pub fn build<R>(pool: &CharacterPool, length: usize, rng: &mut R) -> Result<Password, BuildError>
where
    R: Rng + CryptoRng + ?Sized,
{
    if let Some(class) = pool.classes().iter().find(|class| class.is_empty()) {
        return Err(BuildError::EmptyCharacterClass(class.kind()));
    }
    if length < MIN_LENGTH {
        return Err(BuildError::InvalidLength {
            length,
            minimum: MIN_LENGTH,
        });
    }
    let capacity = pool.capacity();
    if length > capacity {
        return Err(BuildError::CapacityExceeded { length, capacity });
    }

    // Doubles as the used set. Wiped on every return path.
    let mut chars: Zeroizing<Vec<char>> = Zeroizing::new(Vec::with_capacity(length));

    // Seed: one of each class, in pool order. Only overlapping classes can
    // leave a class with nothing unused here.
    for class in pool.classes() {
        let c = pick_unused(class, &chars, rng).ok_or(BuildError::CapacityExceeded {
            length,
            capacity: chars.len(),
        })?;
        chars.push(c);
    }
    tracing::debug!(length, capacity, "seed phase complete");

    // Fill: round-robin over the classes. A spent class hands its turn to
    // the next one that still has unused characters.
    let classes = pool.classes();
    let mut step = 0usize;
    while chars.len() < length {
        let start = step % classes.len();
        step += 1;
        let picked = (0..classes.len())
            .map(|offset| &classes[(start + offset) % classes.len()])
            .find_map(|class| pick_unused(class, &chars, rng));
        match picked {
            Some(c) => chars.push(c),
            None => {
                tracing::debug!(step, drawn = chars.len(), "every class exhausted during fill");
                return Err(BuildError::CapacityExceeded {
                    length,
                    capacity: chars.len(),
                });
            }
        }
    }

    chars.shuffle(rng);
    let mut password = String::with_capacity(chars.iter().map(|c| c.len_utf8()).sum());
    password.extend(chars.iter());

    tracing::debug!(length, fill_steps = step, "password built");
    Ok(Password::new(password))
}

/// Uniform pick among the characters of `class` not yet in `used`.
fn pick_unused<R>(class: &CharacterClass, used: &[char], rng: &mut R) -> Option<char>
where
    R: Rng + ?Sized,
{
    let available: Zeroizing<Vec<char>> = Zeroizing::new(
        class
            .chars()
            .iter()
            .copied()
            .filter(|c| !used.contains(c))
            .collect(),
    );
    available.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeSet, HashSet};

    use rand::SeedableRng;
    use rand::rngs::{OsRng, StdRng};

    use super::*;

    fn tiny_pool() -> CharacterPool {
        CharacterPool::new([
            CharacterClass::new(ClassKind::Numbers, "1"),
            CharacterClass::new(ClassKind::Lowercase, "a"),
            CharacterClass::new(ClassKind::Uppercase, "A"),
            CharacterClass::new(ClassKind::Special, "!"),
        ])
    }

    fn class_of(pool: &CharacterPool, c: char) -> Option<ClassKind> {
        pool.classes()
            .iter()
            .find(|class| class.chars().contains(&c))
            .map(CharacterClass::kind)
    }

    fn kinds_in(pool: &CharacterPool, password: &str) -> BTreeSet<ClassKind> {
        password.chars().filter_map(|c| class_of(pool, c)).collect()
    }

    /// One digit, six lowercase letters, one uppercase, one symbol.
    fn lopsided_pool() -> CharacterPool {
        CharacterPool::new([
            CharacterClass::new(ClassKind::Numbers, "1"),
            CharacterClass::new(ClassKind::Lowercase, "abcdef"),
            CharacterClass::new(ClassKind::Uppercase, "A"),
            CharacterClass::new(ClassKind::Special, "!"),
        ])
    }

    #[test]
    fn every_valid_length_holds_invariants() {
        let pool = CharacterPool::standard();
        for length in MIN_LENGTH..=pool.capacity() {
            let password = build(pool, length, &mut OsRng).expect("valid length");
            let s = password.as_str();

            assert_eq!(password.char_count(), length);
            let distinct: HashSet<char> = s.chars().collect();
            assert_eq!(distinct.len(), length, "repeated character at length {length}");
            assert!(s.chars().all(|c| class_of(pool, c).is_some()));
            assert_eq!(kinds_in(pool, s).len(), 4, "missing class at length {length}");
        }
    }

    #[test]
    fn full_capacity_uses_every_character() {
        let pool = CharacterPool::standard();
        let password = build(pool, pool.capacity(), &mut OsRng).unwrap();
        let used: BTreeSet<char> = password.as_str().chars().collect();
        assert_eq!(used, pool.unique_chars());
    }

    #[test]
    fn rejects_lengths_below_class_count() {
        let pool = CharacterPool::standard();
        for length in 0..MIN_LENGTH {
            let err = build(pool, length, &mut OsRng).unwrap_err();
            assert_eq!(
                err,
                BuildError::InvalidLength {
                    length,
                    minimum: MIN_LENGTH
                }
            );
        }
    }

    #[test]
    fn rejects_lengths_beyond_capacity() {
        let pool = CharacterPool::standard();
        for length in [86, 87, 100, 1_000] {
            let err = build(pool, length, &mut OsRng).unwrap_err();
            assert_eq!(
                err,
                BuildError::CapacityExceeded {
                    length,
                    capacity: 85
                }
            );
        }
    }

    #[test]
    fn tiny_pool_fills_exactly_and_no_further() {
        let pool = tiny_pool();
        let password = build(&pool, 4, &mut OsRng).unwrap();
        let chars: BTreeSet<char> = password.as_str().chars().collect();
        assert_eq!(chars, BTreeSet::from(['1', 'a', 'A', '!']));

        let err = build(&pool, 5, &mut OsRng).unwrap_err();
        assert_eq!(
            err,
            BuildError::CapacityExceeded {
                length: 5,
                capacity: 4
            }
        );
    }

    #[test]
    fn spent_class_passes_its_turn_to_the_next() {
        let pool = lopsided_pool();
        assert_eq!(pool.capacity(), 9);
        for length in MIN_LENGTH..=pool.capacity() {
            let password = build(&pool, length, &mut OsRng).expect("within capacity");
            let chars: BTreeSet<char> = password.as_str().chars().collect();
            assert_eq!(chars.len(), length);
            assert_eq!(kinds_in(&pool, password.as_str()).len(), 4);
        }
    }

    #[test]
    fn lopsided_pool_at_capacity_uses_every_character() {
        let pool = lopsided_pool();
        let password = build(&pool, 9, &mut OsRng).unwrap();
        let used: BTreeSet<char> = password.as_str().chars().collect();
        assert_eq!(used, pool.unique_chars());
        assert_eq!(
            build(&pool, 10, &mut OsRng).unwrap_err(),
            BuildError::CapacityExceeded {
                length: 10,
                capacity: 9
            }
        );
    }

    #[test]
    fn overlapping_classes_report_what_was_drawn() {
        // '1' is both a digit and a symbol; drawing it first leaves no symbol.
        let pool = CharacterPool::new([
            CharacterClass::new(ClassKind::Numbers, "12"),
            CharacterClass::new(ClassKind::Lowercase, "a"),
            CharacterClass::new(ClassKind::Uppercase, "A"),
            CharacterClass::new(ClassKind::Special, "1"),
        ]);
        assert_eq!(pool.capacity(), 4);
        let mut rng = StdRng::seed_from_u64(3);
        let mut failures = 0;
        for _ in 0..200 {
            match build(&pool, 4, &mut rng) {
                Ok(password) => assert_eq!(password.char_count(), 4),
                Err(BuildError::CapacityExceeded { length, capacity }) => {
                    failures += 1;
                    assert_eq!(length, 4);
                    assert!(capacity < length, "{capacity} >= {length}");
                }
                Err(other) => panic!("unexpected error: {other}"),
            }
        }
        assert!(failures > 0 && failures < 200);
    }

    #[test]
    fn empty_class_is_reported_before_length_checks() {
        let pool = CharacterPool::new([
            CharacterClass::new(ClassKind::Numbers, "0123"),
            CharacterClass::new(ClassKind::Lowercase, "abcd"),
            CharacterClass::new(ClassKind::Uppercase, "ABCD"),
            CharacterClass::new(ClassKind::Special, ""),
        ]);
        for length in [0, 8, 1_000] {
            assert_eq!(
                build(&pool, length, &mut OsRng).unwrap_err(),
                BuildError::EmptyCharacterClass(ClassKind::Special)
            );
        }
    }

    #[test]
    fn error_messages() {
        let err = BuildError::CapacityExceeded {
            length: 90,
            capacity: 85,
        };
        assert_eq!(
            err.to_string(),
            "Requested password length (90) exceeds the number of unique characters available (85)."
        );
        assert_eq!(
            BuildError::EmptyCharacterClass(ClassKind::Uppercase).to_string(),
            "Character class 'uppercase' must not be empty."
        );
    }

    #[test]
    fn repeated_builds_differ() {
        let pool = CharacterPool::standard();
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut seen = HashSet::new();
        for _ in 0..1_000 {
            let password = build(pool, 10, &mut rng).unwrap();
            assert!(seen.insert(password.as_str().to_owned()));
        }
    }

    #[test]
    fn no_class_dominates_a_position() {
        let pool = CharacterPool::standard();
        let mut rng = StdRng::seed_from_u64(42);
        let runs = 1_000;
        let length = 10;
        let mut counts = vec![[0usize; 4]; length];

        for _ in 0..runs {
            let password = build(pool, length, &mut rng).unwrap();
            for (pos, c) in password.as_str().chars().enumerate() {
                let kind = class_of(pool, c).unwrap();
                counts[pos][kind as usize] += 1;
            }
        }

        // Composition is 3/3/2/2, so each class expects 20-30% per position.
        for (pos, per_class) in counts.iter().enumerate() {
            for (idx, &count) in per_class.iter().enumerate() {
                assert!(
                    count < runs * 45 / 100,
                    "class {:?} holds position {pos} in {count}/{runs} builds",
                    ClassKind::ALL[idx]
                );
                assert!(count > runs * 10 / 100);
            }
        }
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let pool = CharacterPool::standard();
        let a = build(pool, 16, &mut StdRng::seed_from_u64(7)).unwrap();
        let b = build(pool, 16, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(a.as_str(), b.as_str());
    }
}
