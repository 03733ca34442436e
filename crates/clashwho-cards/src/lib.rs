//! Card pool provider for ClashWho.
//!
//! Given a topic, this crate returns the cards players pick their secret
//! from. Most topics are dealt in full; Clash Royale is classified into
//! troops, spells, and buildings and dealt as a randomized sample with a
//! fixed category mix (see [`CategoryTargets`]).
//!
//! Randomness is always passed in, so callers decide between the thread
//! RNG in production and a seeded one in tests.

mod assets;
mod catalog;
mod pool;
mod topic;

pub use assets::{CLASH_ROYALE_IMAGE_DIR, card_from_file, card_id_from_file, card_name_from_file};
pub use pool::{CategoryTargets, balanced_pool, build_pool, classify};
pub use topic::{Topic, list_cards};
