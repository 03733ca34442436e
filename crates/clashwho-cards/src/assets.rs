//! Card construction from asset file names.
//!
//! The Clash Royale art lives in one directory of PascalCase PNGs
//! (`MegaKnight.png`), and everything else about a card is derived from the
//! file name. Cosmetic fields the art can't tell us get placeholder values.

use clashwho_protocol::{Card, CardType};

/// Where the client serves the Clash Royale art from.
pub const CLASH_ROYALE_IMAGE_DIR: &str = "/images/clash-royale";

/// `"MegaKnight.png"` → `"mega-knight"`.
pub fn card_id_from_file(file: &str) -> String {
    let stem = file.strip_suffix(".png").unwrap_or(file);
    let mut id = String::with_capacity(stem.len() + 4);
    for ch in stem.chars() {
        if ch.is_ascii_uppercase() {
            if !id.is_empty() {
                id.push('-');
            }
            id.push(ch.to_ascii_lowercase());
        } else {
            id.push(ch);
        }
    }
    id
}

/// `"MegaKnight.png"` → `"Mega Knight"`.
pub fn card_name_from_file(file: &str) -> String {
    let stem = file.strip_suffix(".png").unwrap_or(file);
    let mut name = String::with_capacity(stem.len() + 4);
    for ch in stem.chars() {
        if ch.is_ascii_uppercase() && !name.is_empty() {
            name.push(' ');
        }
        name.push(ch);
    }
    name
}

/// Builds an unclassified Clash Royale card from its art file name.
///
/// Every card starts out as a troop; [`classify`](crate::classify) fixes
/// up spells and buildings.
pub fn card_from_file(file: &str) -> Card {
    Card {
        id: card_id_from_file(file),
        name: card_name_from_file(file),
        image: format!("{CLASH_ROYALE_IMAGE_DIR}/{file}"),
        card_type: Some(CardType::Troop),
        elixir: None,
        rarity: Some("unknown".to_string()),
        evo: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id_from_file() {
        assert_eq!(card_id_from_file("MegaKnight.png"), "mega-knight");
        assert_eq!(card_id_from_file("Knight.png"), "knight");
        assert_eq!(card_id_from_file("XBow.png"), "x-bow");
        assert_eq!(card_id_from_file("TheLog.png"), "the-log");
    }

    #[test]
    fn test_card_name_from_file() {
        assert_eq!(card_name_from_file("MegaKnight.png"), "Mega Knight");
        assert_eq!(card_name_from_file("Knight.png"), "Knight");
        assert_eq!(card_name_from_file("EvoKnight.png"), "Evo Knight");
    }

    #[test]
    fn test_card_from_file_defaults() {
        let card = card_from_file("HogRider.png");
        assert_eq!(card.id, "hog-rider");
        assert_eq!(card.name, "Hog Rider");
        assert_eq!(card.image, "/images/clash-royale/HogRider.png");
        assert_eq!(card.card_type, Some(CardType::Troop));
        assert_eq!(card.elixir, None);
        assert_eq!(card.rarity.as_deref(), Some("unknown"));
        assert!(!card.evo);
    }
}
