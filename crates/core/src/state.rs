use std::collections::VecDeque;

use serde::Serialize;
use slotmap::SlotMap;

use crate::config::GameConfig;
use crate::content::{self, assets};
use crate::types::*;

/// Passability grid for one floor. Built by the floor generator and only read
/// afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Map {
    pub width: usize,
    pub height: usize,
    pub tiles: Vec<TileKind>,
}

impl Map {
    pub fn filled(width: usize, height: usize, tile: TileKind) -> Self {
        Self { width, height, tiles: vec![tile; width * height] }
    }

    pub fn open(width: usize, height: usize) -> Self {
        Self::filled(width, height, TileKind::Floor)
    }

    /// Builds a map from text rows where `#` is a wall and anything else is floor.
    pub fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let mut map = Self::filled(width, height, TileKind::Wall);
        for (y, row) in rows.iter().enumerate() {
            for (x, glyph) in row.chars().enumerate() {
                if glyph != '#' {
                    map.tiles[y * width + x] = TileKind::Floor;
                }
            }
        }
        map
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        if !self.in_bounds(pos) {
            return TileKind::Wall;
        }
        self.tiles[self.index(pos)]
    }

    pub fn is_walkable(&self, pos: Pos) -> bool {
        self.in_bounds(pos) && self.tiles[self.index(pos)] == TileKind::Floor
    }

    pub fn set_tile(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

/// Canonical step order. Pathfinding ties resolve in this order.
pub const DIRECTIONS: [(i32, i32); 8] =
    [(0, 1), (0, -1), (1, 0), (-1, 0), (1, 1), (1, -1), (-1, 1), (-1, -1)];

/// Square block of tiles anchored at its top-left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Footprint {
    pub origin: Pos,
    pub size: i32,
}

impl Footprint {
    pub fn single(origin: Pos) -> Self {
        Self { origin, size: 1 }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.origin.x
            && pos.x < self.origin.x + self.size
            && pos.y >= self.origin.y
            && pos.y < self.origin.y + self.size
    }

    pub fn cells(self) -> impl Iterator<Item = Pos> {
        let Self { origin, size } = self;
        (0..size).flat_map(move |dx| (0..size).map(move |dy| origin.offset(dx, dy)))
    }

    /// Centre of the block in tile coordinates.
    pub fn center(&self) -> (f64, f64) {
        let half = f64::from(self.size - 1) / 2.0;
        (f64::from(self.origin.x) + half, f64::from(self.origin.y) + half)
    }

    pub fn distance_from_center(&self, pos: Pos) -> f64 {
        let (cx, cy) = self.center();
        (cx - f64::from(pos.x)).hypot(cy - f64::from(pos.y))
    }

    /// True when `pos` lies in the block grown by one tile on every side.
    pub fn touches_ring(&self, pos: Pos) -> bool {
        pos.x >= self.origin.x - 1
            && pos.x < self.origin.x + self.size + 1
            && pos.y >= self.origin.y - 1
            && pos.y < self.origin.y + self.size + 1
    }

    /// Tiles bordering the block. Single tiles list their neighbours in
    /// [`DIRECTIONS`] order, larger blocks in row-major order of the ring.
    pub fn surrounding(&self) -> Vec<Pos> {
        if self.size == 1 {
            return DIRECTIONS.iter().map(|&(dx, dy)| self.origin.offset(dx, dy)).collect();
        }
        let mut ring = Vec::new();
        for dy in -1..=self.size {
            for dx in -1..=self.size {
                let pos = self.origin.offset(dx, dy);
                if !self.contains(pos) {
                    ring.push(pos);
                }
            }
        }
        ring
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    pub level: u32,
    pub xp: u32,
    pub xp_to_next: u32,
    pub inventory: Vec<ItemKind>,
    pub pending_path: VecDeque<Pos>,
    pub pending_target: Option<EntityId>,
    pub pending_throw: Option<usize>,
}

impl Player {
    pub fn new(pos: Pos) -> Self {
        Self {
            pos,
            hp: content::PLAYER_BASE_HP,
            max_hp: content::PLAYER_BASE_HP,
            attack: content::PLAYER_BASE_ATTACK,
            level: 1,
            xp: 0,
            xp_to_next: content::PLAYER_START_XP_TO_NEXT,
            inventory: Vec::with_capacity(content::INVENTORY_CAPACITY),
            pending_path: VecDeque::new(),
            pending_target: None,
            pending_throw: None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn inventory_full(&self) -> bool {
        self.inventory.len() >= content::INVENTORY_CAPACITY
    }

    pub fn clear_pending(&mut self) {
        self.pending_path.clear();
        self.pending_target = None;
    }

    /// Adds experience and applies every level-up it pays for. Returns the
    /// number of levels gained.
    pub fn add_xp(&mut self, amount: u32) -> u32 {
        self.xp += amount;
        let mut gained = 0;
        while self.xp >= self.xp_to_next {
            self.level += 1;
            self.xp -= self.xp_to_next;
            self.xp_to_next = self.xp_to_next * 3 / 2;
            self.max_hp += content::LEVEL_UP_HP_BONUS;
            self.hp = self.max_hp;
            self.attack += content::LEVEL_UP_ATTACK_BONUS;
            gained += 1;
        }
        gained
    }

    /// Heals up to `amount`, capped at max HP. Returns the HP restored.
    pub fn heal(&mut self, amount: i32) -> i32 {
        let before = self.hp;
        self.hp = (self.hp + amount).min(self.max_hp);
        self.hp - before
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    pub kind: EnemyKind,
    pub pos: Pos,
    pub hp: i32,
    pub max_hp: i32,
    pub attack: i32,
    /// Score and XP paid on death, fixed when the floor was generated.
    pub points: u32,
}

impl Enemy {
    pub fn spawn(kind: EnemyKind, pos: Pos, bosses_defeated: u32) -> Self {
        let stats = content::scaled_enemy_stats(kind, bosses_defeated);
        Self { kind, pos, hp: stats.hp, max_hp: stats.hp, attack: stats.attack, points: stats.points }
    }

    pub fn footprint(&self) -> Footprint {
        Footprint { origin: self.pos, size: self.kind.footprint_size() }
    }

    pub fn behavior(&self) -> EnemyBehavior {
        self.kind.behavior()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub kind: ItemKind,
    pub pos: Pos,
}

/// Ranged shot in continuous space, aimed at the tile the player stood on
/// when it was fired.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Projectile {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub target: Pos,
    pub damage: i32,
    pub asset: &'static str,
}

impl Projectile {
    pub fn launch(from: Pos, target: Pos, damage: i32, config: &GameConfig) -> Self {
        let (x, y) = config.tile_center(from.x, from.y);
        let angle = f64::from(target.y - from.y).atan2(f64::from(target.x - from.x));
        Self {
            x,
            y,
            vx: angle.cos() * config.projectile_speed,
            vy: angle.sin() * config.projectile_speed,
            target,
            damage,
            asset: assets::ROCK_PROJECTILE,
        }
    }

    /// Advances one tick. Returns true once the shot has reached its target tile.
    pub fn update(&mut self, config: &GameConfig) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.distance_to_tile(self.target, config) < config.projectile_hit_radius
    }

    pub fn distance_to_tile(&self, tile: Pos, config: &GameConfig) -> f64 {
        let (cx, cy) = config.tile_center(tile.x, tile.y);
        (self.x - cx).hypot(self.y - cy)
    }
}

/// Everything that is replaced when a new floor is generated.
#[derive(Clone, Debug)]
pub struct FloorState {
    pub map: Map,
    // Filled once per floor and never re-inserted into, so slot order is
    // spawn order.
    pub enemies: SlotMap<EntityId, Enemy>,
    pub items: SlotMap<ItemId, Item>,
    pub projectiles: Vec<Projectile>,
    pub stairs: Pos,
    pub stairs_visible: bool,
}

impl FloorState {
    pub fn empty() -> Self {
        Self {
            map: Map::filled(0, 0, TileKind::Wall),
            enemies: SlotMap::with_key(),
            items: SlotMap::with_key(),
            projectiles: Vec::new(),
            stairs: Pos { y: 0, x: 0 },
            stairs_visible: false,
        }
    }

    pub fn enemy_at(&self, pos: Pos) -> Option<EntityId> {
        self.enemies.iter().find(|(_, enemy)| enemy.footprint().contains(pos)).map(|(id, _)| id)
    }

    pub fn item_at(&self, pos: Pos) -> Option<ItemId> {
        self.items.iter().find(|(_, item)| item.pos == pos).map(|(id, _)| id)
    }
}
