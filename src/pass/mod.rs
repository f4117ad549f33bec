//! Password generation and strength rating.

pub mod charset;
mod generate;
mod password;
pub mod strength;

pub use charset::CharacterPool;
pub use generate::{BuildError, MIN_LENGTH, build};
pub use password::Password;
pub use strength::{StrengthLevel, evaluate};
