//! Topics and their raw card lists.

use std::fmt;

use clashwho_protocol::Card;

use crate::assets::card_from_file;
use crate::catalog::{CELEBRITIES, CLASH_ROYALE_FILES};

/// A known card topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Topic {
    /// Categorized into troops, spells, and buildings; dealt as a
    /// balanced sample.
    ClashRoyale,
    /// Dealt in full.
    Celebrities,
}

impl Topic {
    /// All topics the server knows about.
    pub const ALL: [Topic; 2] = [Topic::ClashRoyale, Topic::Celebrities];

    /// Maps a wire topic name to a topic. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "clash-royale" => Some(Self::ClashRoyale),
            "celebrities" => Some(Self::Celebrities),
            _ => None,
        }
    }

    /// Wire name of the topic.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ClashRoyale => "clash-royale",
            Self::Celebrities => "celebrities",
        }
    }

    /// Whether pools for this topic are drawn with [`balanced_pool`](crate::balanced_pool).
    pub fn is_categorized(self) -> bool {
        matches!(self, Self::ClashRoyale)
    }

    /// Full, unclassified card list for this topic.
    pub fn cards(self) -> Vec<Card> {
        match self {
            Self::ClashRoyale => {
                CLASH_ROYALE_FILES.iter().map(|f| card_from_file(f)).collect()
            }
            Self::Celebrities => CELEBRITIES
                .iter()
                .map(|(id, name)| Card {
                    id: (*id).to_string(),
                    name: (*name).to_string(),
                    image: format!("/images/celebrities/{id}.jpg"),
                    card_type: None,
                    elixir: None,
                    rarity: None,
                    evo: false,
                })
                .collect(),
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the static card set for a topic name.
///
/// An unknown topic is not an error: it simply has no cards.
pub fn list_cards(topic: &str) -> Vec<Card> {
    match Topic::parse(topic) {
        Some(t) => t.cards(),
        None => {
            tracing::debug!(topic, "unknown topic, no cards");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_topic_parse_round_trips_wire_name() {
        for topic in Topic::ALL {
            assert_eq!(Topic::parse(topic.as_str()), Some(topic));
            assert_eq!(topic.to_string(), topic.as_str());
        }
        assert_eq!(Topic::parse("Clash-Royale"), None);
        assert_eq!(Topic::parse(""), None);
    }

    #[test]
    fn test_only_clash_royale_is_categorized() {
        assert!(Topic::ClashRoyale.is_categorized());
        assert!(!Topic::Celebrities.is_categorized());
    }

    #[test]
    fn test_list_cards_unknown_topic_is_empty() {
        assert!(list_cards("pokemon").is_empty());
        assert!(list_cards("").is_empty());
    }

    #[test]
    fn test_card_ids_are_unique_within_each_topic() {
        for topic in Topic::ALL {
            let cards = topic.cards();
            let ids: HashSet<_> = cards.iter().map(|c| c.id.as_str()).collect();
            assert_eq!(ids.len(), cards.len(), "duplicate id in {topic}");
        }
    }

    #[test]
    fn test_celebrities_are_uncategorized() {
        let cards = list_cards("celebrities");
        assert!(!cards.is_empty());
        assert!(cards.iter().all(|c| c.card_type.is_none()));
        assert_eq!(cards[0].image, "/images/celebrities/ada-lovelace.jpg");
    }
}
