//! Draw styles for the asset identifiers carried in snapshots. Built once on
//! first use and read-only afterwards.

use std::collections::HashMap;
use std::sync::OnceLock;

use crawl_core::content::assets;
use macroquad::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AssetStyle {
    pub glyph: &'static str,
    pub color: Color,
}

const UNKNOWN: AssetStyle = AssetStyle { glyph: "?", color: MAGENTA };

pub struct AssetRegistry {
    styles: HashMap<&'static str, AssetStyle>,
}

impl AssetRegistry {
    fn builtin() -> Self {
        let styles = HashMap::from([
            (assets::PLAYER, AssetStyle { glyph: "@", color: SKYBLUE }),
            (assets::GOBLIN, AssetStyle { glyph: "g", color: GREEN }),
            (assets::ORC, AssetStyle { glyph: "O", color: RED }),
            (assets::GOLEM, AssetStyle { glyph: "G", color: LIGHTGRAY }),
            (assets::POTION, AssetStyle { glyph: "!", color: PINK }),
            (assets::ROCK, AssetStyle { glyph: "*", color: BEIGE }),
            (assets::HOLY_GRENADE, AssetStyle { glyph: "+", color: GOLD }),
            (assets::BOMB, AssetStyle { glyph: "b", color: ORANGE }),
            (assets::ROCK_PROJECTILE, AssetStyle { glyph: "o", color: BEIGE }),
            (assets::STAIRS, AssetStyle { glyph: ">", color: YELLOW }),
        ]);
        Self { styles }
    }

    /// Unknown identifiers render as a magenta `?` so they stand out.
    pub fn style(&self, asset: &str) -> AssetStyle {
        self.styles.get(asset).copied().unwrap_or(UNKNOWN)
    }
}

static REGISTRY: OnceLock<AssetRegistry> = OnceLock::new();

pub fn registry() -> &'static AssetRegistry {
    REGISTRY.get_or_init(AssetRegistry::builtin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_core_asset_has_a_style() {
        for asset in [
            assets::PLAYER,
            assets::GOBLIN,
            assets::ORC,
            assets::GOLEM,
            assets::POTION,
            assets::ROCK,
            assets::HOLY_GRENADE,
            assets::BOMB,
            assets::ROCK_PROJECTILE,
            assets::STAIRS,
        ] {
            assert_ne!(registry().style(asset), UNKNOWN, "{asset}");
        }
    }

    #[test]
    fn unknown_asset_gets_the_fallback() {
        assert_eq!(registry().style("dragon"), UNKNOWN);
    }
}
