use crate::types::{EnemyKind, ItemKind};

/// Asset identifiers handed to the presentation layer. The core never loads
/// the resources behind them.
pub mod assets {
    pub const PLAYER: &str = "pocchi";
    pub const GOBLIN: &str = "goblin";
    pub const ORC: &str = "orc";
    pub const GOLEM: &str = "golem";
    pub const POTION: &str = "potion";
    pub const ROCK: &str = "rock";
    pub const HOLY_GRENADE: &str = "holy_grenade";
    pub const BOMB: &str = "bomb";
    pub const ROCK_PROJECTILE: &str = "rock_projectile";
    pub const STAIRS: &str = "stair_image";
}

pub const PLAYER_BASE_HP: i32 = 100;
pub const PLAYER_BASE_ATTACK: i32 = 20;
pub const PLAYER_START_XP_TO_NEXT: u32 = 100;
pub const LEVEL_UP_HP_BONUS: i32 = 20;
pub const LEVEL_UP_ATTACK_BONUS: i32 = 5;
pub const INVENTORY_CAPACITY: usize = 5;

pub const POTION_HEAL: i32 = 40;
pub const BOMB_DAMAGE: i32 = 20;
pub const ROCK_DAMAGE: i32 = 30;
pub const HOLY_GRENADE_DAMAGE: i32 = 9999;
pub const THROW_RANGE: f64 = 4.0;

pub const MELEE_RANGE: f64 = 1.5;
pub const AGGRO_RANGE: f64 = 8.0;
pub const RANGED_MAX_FIRE_DISTANCE: f64 = 6.0;
pub const RANGED_RETREAT_DISTANCE: f64 = 2.0;

pub const DIFFICULTY_GROWTH_PER_BOSS: f64 = 1.05;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnemyStats {
    pub hp: i32,
    pub attack: i32,
    pub points: u32,
}

pub fn base_enemy_stats(kind: EnemyKind) -> EnemyStats {
    match kind {
        EnemyKind::Goblin => EnemyStats { hp: 30, attack: 10, points: 50 },
        EnemyKind::Orc => EnemyStats { hp: 50, attack: 15, points: 100 },
        EnemyKind::GoblinSlinger => EnemyStats { hp: 25, attack: 10, points: 60 },
        EnemyKind::StoneGolem => EnemyStats { hp: 300, attack: 30, points: 1000 },
    }
}

/// Stats for an enemy spawned after `bosses_defeated` boss kills. Each field
/// is multiplied by the growth factor and floored on its own. The boss never
/// grows.
pub fn scaled_enemy_stats(kind: EnemyKind, bosses_defeated: u32) -> EnemyStats {
    let base = base_enemy_stats(kind);
    if kind.is_boss() {
        return base;
    }
    let buff = DIFFICULTY_GROWTH_PER_BOSS.powi(bosses_defeated as i32);
    EnemyStats {
        hp: (f64::from(base.hp) * buff).floor() as i32,
        attack: (f64::from(base.attack) * buff).floor() as i32,
        points: (f64::from(base.points) * buff).floor() as u32,
    }
}

pub fn enemy_name(kind: EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Goblin => "Goblin",
        EnemyKind::Orc => "Orc",
        EnemyKind::GoblinSlinger => "Goblin Slinger",
        EnemyKind::StoneGolem => "Stone Golem",
    }
}

pub fn enemy_asset(kind: EnemyKind) -> &'static str {
    match kind {
        EnemyKind::Goblin | EnemyKind::GoblinSlinger => assets::GOBLIN,
        EnemyKind::Orc => assets::ORC,
        EnemyKind::StoneGolem => assets::GOLEM,
    }
}

pub fn item_name(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Potion => "Potion",
        ItemKind::Rock => "Rock",
        ItemKind::HolyGrenade => "Holy Grenade",
        ItemKind::Bomb => "Bomb",
    }
}

pub fn item_asset(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Potion => assets::POTION,
        ItemKind::Rock => assets::ROCK,
        ItemKind::HolyGrenade => assets::HOLY_GRENADE,
        ItemKind::Bomb => assets::BOMB,
    }
}

/// Damage dealt by a thrown item, `None` for items that cannot be thrown.
pub fn throw_damage(kind: ItemKind) -> Option<i32> {
    match kind {
        ItemKind::Rock => Some(ROCK_DAMAGE),
        ItemKind::HolyGrenade => Some(HOLY_GRENADE_DAMAGE),
        ItemKind::Potion | ItemKind::Bomb => None,
    }
}
