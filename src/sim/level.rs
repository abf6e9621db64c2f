//! Brick levels built from a tile grid
//!
//! Level files are whitespace-separated integer grids, one row per line:
//! - `0`: empty
//! - `1`: solid (indestructible) brick
//! - `2..=5`: destructible brick, four color variants
//!
//! The grid is stretched over the level area, so every tile gets
//! `area.x / columns` by `area.y / rows` pixels.

use std::fs;
use std::path::{Path, PathBuf};

use glam::{Vec2, Vec3};

use super::entity::Brick;
use crate::error::LevelError;

/// Bundled levels, selectable from the menu
pub const BUILTIN_LEVELS: [(&str, &str); 4] = [
    ("Standard", include_str!("../../levels/one.lvl")),
    ("A few small gaps", include_str!("../../levels/two.lvl")),
    ("Space invader", include_str!("../../levels/three.lvl")),
    ("Bounce galore", include_str!("../../levels/four.lvl")),
];

/// Highest valid tile code
pub const MAX_TILE: u8 = 5;

/// Brick color for a tile code, `None` for empty/unknown tiles
pub fn tile_color(code: u8) -> Option<Vec3> {
    match code {
        1 => Some(Vec3::new(0.8, 0.8, 0.7)),
        2 => Some(Vec3::new(0.2, 0.6, 1.0)),
        3 => Some(Vec3::new(0.0, 0.7, 0.0)),
        4 => Some(Vec3::new(0.8, 0.8, 0.4)),
        5 => Some(Vec3::new(1.0, 0.5, 0.0)),
        _ => None,
    }
}

/// Parse a level grid. Bad tokens are skipped with a warning, the rest of the
/// row is kept. Blank lines are ignored.
pub fn parse_tiles(text: &str) -> Vec<Vec<u8>> {
    let mut rows = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        let mut row = Vec::new();
        for token in line.split_whitespace() {
            match token.parse::<u8>() {
                Ok(code) if code <= MAX_TILE => row.push(code),
                Ok(code) => {
                    log::warn!("Level line {}: tile code {} out of range, skipped", line_no + 1, code);
                }
                Err(_) => {
                    log::warn!("Level line {}: malformed tile {:?}, skipped", line_no + 1, token);
                }
            }
        }
        if !row.is_empty() {
            rows.push(row);
        }
    }
    rows
}

/// A playable level
#[derive(Debug, Clone)]
pub struct Level {
    pub bricks: Vec<Brick>,
    tiles: Vec<Vec<u8>>,
    area: Vec2,
    /// File this level was read from (reloaded on reset)
    source: Option<PathBuf>,
}

impl Level {
    /// Lay out bricks for an already-parsed grid
    pub fn from_tiles(tiles: Vec<Vec<u8>>, area: Vec2) -> Self {
        let bricks = build_bricks(&tiles, area);
        Self {
            bricks,
            tiles,
            area,
            source: None,
        }
    }

    /// Parse grid text and lay out bricks
    pub fn parse(text: &str, area: Vec2) -> Self {
        Self::from_tiles(parse_tiles(text), area)
    }

    /// Read a level file
    pub fn load(path: impl AsRef<Path>, area: Vec2) -> Result<Self, LevelError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LevelError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let tiles = parse_tiles(&text);
        if tiles.is_empty() {
            return Err(LevelError::Empty {
                path: path.to_path_buf(),
            });
        }
        let mut level = Self::from_tiles(tiles, area);
        level.source = Some(path.to_path_buf());
        log::info!("Loaded level {} ({} bricks)", path.display(), level.bricks.len());
        Ok(level)
    }

    /// One of the bundled levels
    pub fn builtin(index: usize, area: Vec2) -> Result<Self, LevelError> {
        let (_, text) = BUILTIN_LEVELS.get(index).ok_or(LevelError::UnknownLevel {
            index,
            available: BUILTIN_LEVELS.len(),
        })?;
        Ok(Self::parse(text, area))
    }

    /// All bundled levels in menu order
    pub fn all_builtin(area: Vec2) -> Vec<Self> {
        BUILTIN_LEVELS
            .iter()
            .map(|(_, text)| Self::parse(text, area))
            .collect()
    }

    /// Restore every brick. File-backed levels are re-read so edits on disk
    /// show up; a failed read falls back to the tiles already in memory.
    pub fn reset(&mut self) {
        if let Some(path) = self.source.clone() {
            match Self::load(&path, self.area) {
                Ok(level) => {
                    *self = level;
                    return;
                }
                Err(e) => log::warn!("Reload failed, rebuilding from memory: {e}"),
            }
        }
        self.bricks = build_bricks(&self.tiles, self.area);
    }

    /// Every destructible brick is destroyed (solid bricks never count)
    pub fn is_completed(&self) -> bool {
        self.bricks
            .iter()
            .all(|brick| !brick.counts_for_clear() || brick.is_destroyed())
    }

    /// Destructible bricks still standing
    pub fn remaining(&self) -> usize {
        self.bricks
            .iter()
            .filter(|b| b.counts_for_clear() && !b.is_destroyed())
            .count()
    }

    pub fn tiles(&self) -> &[Vec<u8>] {
        &self.tiles
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

fn build_bricks(tiles: &[Vec<u8>], area: Vec2) -> Vec<Brick> {
    let Some(first) = tiles.first() else {
        return Vec::new();
    };
    let unit = Vec2::new(area.x / first.len() as f32, area.y / tiles.len() as f32);

    let mut bricks = Vec::new();
    for (y, row) in tiles.iter().enumerate() {
        for (x, &code) in row.iter().enumerate() {
            let Some(color) = tile_color(code) else {
                continue;
            };
            let position = Vec2::new(unit.x * x as f32, unit.y * y as f32);
            bricks.push(Brick::new(position, unit, color, code == 1));
        }
    }
    bricks
}
