//! Classification and balanced sampling of categorized topics.

use clashwho_protocol::{Card, CardType};
use rand::Rng;
use rand::seq::SliceRandom;

use crate::Topic;
use crate::catalog::{CLASH_ROYALE_BUILDINGS, CLASH_ROYALE_SPELLS};

/// Per-category draw targets for a pool of `pool_size` cards.
///
/// Troops get 60% and spells 25%, both truncated; buildings absorb the
/// remainder so the three always sum to `pool_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTargets {
    pub troops: usize,
    pub spells: usize,
    pub buildings: usize,
}

impl CategoryTargets {
    pub fn for_pool_size(pool_size: usize) -> Self {
        let troops = pool_size * 3 / 5;
        let spells = pool_size / 4;
        Self {
            troops,
            spells,
            buildings: pool_size - troops - spells,
        }
    }
}

/// Tags each card with its category by id-set membership.
///
/// Cards in neither the spell nor the building set are troops (this
/// includes the evolved troop variants).
pub fn classify(cards: Vec<Card>) -> Vec<Card> {
    cards
        .into_iter()
        .map(|mut card| {
            let id = card.id.as_str();
            let card_type = if CLASH_ROYALE_SPELLS.contains(&id) {
                CardType::Spell
            } else if CLASH_ROYALE_BUILDINGS.contains(&id) {
                CardType::Building
            } else {
                CardType::Troop
            };
            card.card_type = Some(card_type);
            card
        })
        .collect()
}

/// Draws up to `n` cards from `cards` without replacement.
///
/// When there are `n` or fewer, all of them are returned.
fn pick_random<R: Rng + ?Sized>(mut cards: Vec<Card>, n: usize, rng: &mut R) -> Vec<Card> {
    if cards.len() <= n {
        return cards;
    }
    cards.shuffle(rng);
    cards.truncate(n);
    cards
}

/// Draws a category-balanced pool of at most `pool_size` cards.
///
/// Each category is sampled to its [`CategoryTargets`] share; a category
/// with too few cards contributes everything it has, so the pool can come
/// out shorter than requested. The combined pool is shuffled. Cards with
/// no category count as troops.
pub fn balanced_pool<R: Rng + ?Sized>(
    cards: &[Card],
    pool_size: usize,
    rng: &mut R,
) -> Vec<Card> {
    let targets = CategoryTargets::for_pool_size(pool_size);

    let of_type = |wanted: CardType| -> Vec<Card> {
        cards
            .iter()
            .filter(|c| c.card_type.unwrap_or_default() == wanted)
            .cloned()
            .collect()
    };

    let mut pool = pick_random(of_type(CardType::Troop), targets.troops, rng);
    pool.extend(pick_random(of_type(CardType::Spell), targets.spells, rng));
    pool.extend(pick_random(of_type(CardType::Building), targets.buildings, rng));
    pool.shuffle(rng);

    if pool.len() < pool_size {
        tracing::debug!(
            requested = pool_size,
            dealt = pool.len(),
            "not enough cards to fill pool"
        );
    }
    pool
}

/// Deals the pool for a topic name: balanced for categorized topics, the
/// raw list otherwise, empty for unknown topics.
pub fn build_pool<R: Rng + ?Sized>(topic: &str, pool_size: usize, rng: &mut R) -> Vec<Card> {
    match Topic::parse(topic) {
        Some(t) if t.is_categorized() => balanced_pool(&classify(t.cards()), pool_size, rng),
        Some(t) => t.cards(),
        None => Vec::new(),
    }
}
