//! Grid & hazard model.
//!
//! Owns where the pits, elevator tiles, fires and coins are. Placement is
//! rolled per level and partly re-rolled on a real-time interval while a level
//! is in progress, so the field keeps shifting under the player.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::types::*;

/// Hazard and collectible placement for the current level.
#[derive(Debug, Clone, PartialEq)]
pub struct Hazards {
    holes: ArrayVec<u8, MAX_HAZARDS>,
    elevator_tiles: ArrayVec<u8, MAX_HAZARDS>,
    fires: ArrayVec<GridPos, MAX_HAZARDS>,
    /// `None` marks a retired (collected) coin; it stays inert until the next level roll.
    coins: [Option<GridPos>; COIN_COUNT],
}

impl Hazards {
    /// An empty field: no hazards and every coin slot retired.
    pub fn empty() -> Self {
        Self {
            holes: ArrayVec::new(),
            elevator_tiles: ArrayVec::new(),
            fires: ArrayVec::new(),
            coins: [None; COIN_COUNT],
        }
    }

    /// Roll a fresh field for `level`: coins in every slot plus the hazards
    /// the level allows.
    pub fn for_level(level: u8, player: GridPos, rng: &mut SimpleRng) -> Self {
        let mut hazards = Self::empty();
        for slot in hazards.coins.iter_mut() {
            *slot = Some(rng.next_cell());
        }
        hazards.reshuffle(level, player, rng);
        hazards
    }

    /// Periodic re-roll. Holes always move; fires move on levels 2 and 3 and
    /// elevator tiles on level 3. Coins are left alone.
    pub fn reshuffle(&mut self, level: u8, player: GridPos, rng: &mut SimpleRng) {
        let player_index = player.index();

        self.holes.clear();
        if level < 3 {
            self.elevator_tiles.clear();
        }
        if level < 2 {
            self.fires.clear();
        }

        let mut tiles: ArrayVec<u8, MAX_HAZARDS> = ArrayVec::new();
        let mut fires: ArrayVec<GridPos, MAX_HAZARDS> = ArrayVec::new();

        for _ in 0..MAX_HAZARDS {
            let mut hole = rng.next_index();
            if Some(hole) == player_index || Some(hole) == SPAWN.index() {
                hole = free_index(HOLE_FALLBACK_INDEX, player_index);
            }
            self.holes.push(hole);

            let tile = if level == FINAL_LEVEL {
                Some(rng.next_index())
            } else {
                None
            };

            if level >= 2 {
                let mut fire = rng.next_cell();
                if fire == player {
                    let preferred = FIRE_FALLBACK.index().unwrap_or(HOLE_FALLBACK_INDEX);
                    fire = GridPos::from_index(free_index(preferred, player_index));
                }
                // Fire and elevator never share a cell: the tile is dropped.
                let tile = tile.filter(|&t| fire.index() != Some(t));
                if let Some(t) = tile {
                    tiles.push(t);
                }
                fires.push(fire);
            } else if let Some(t) = tile {
                tiles.push(t);
            }
        }

        if level == FINAL_LEVEL {
            self.elevator_tiles = tiles;
        }
        if level >= 2 {
            self.fires = fires;
        }

        log::trace!(
            "hazards reshuffled: level={} holes={:?} tiles={:?} fires={}",
            level,
            self.holes.as_slice(),
            self.elevator_tiles.as_slice(),
            self.fires.len()
        );
    }

    pub fn holes(&self) -> &[u8] {
        &self.holes
    }

    pub fn elevator_tiles(&self) -> &[u8] {
        &self.elevator_tiles
    }

    pub fn fires(&self) -> &[GridPos] {
        &self.fires
    }

    pub fn coins(&self) -> &[Option<GridPos>; COIN_COUNT] {
        &self.coins
    }

    pub fn is_hole(&self, pos: GridPos) -> bool {
        pos.index().map_or(false, |i| self.holes.contains(&i))
    }

    pub fn is_elevator(&self, pos: GridPos) -> bool {
        pos.index().map_or(false, |i| self.elevator_tiles.contains(&i))
    }

    pub fn is_fire(&self, pos: GridPos) -> bool {
        pos.in_bounds() && self.fires.contains(&pos)
    }

    /// First live coin slot at `pos`.
    pub fn coin_at(&self, pos: GridPos) -> Option<usize> {
        self.coins.iter().position(|c| *c == Some(pos))
    }

    /// Retire a coin slot. Returns false if it was already retired.
    pub fn retire_coin(&mut self, slot: usize) -> bool {
        match self.coins.get_mut(slot) {
            Some(coin @ Some(_)) => {
                *coin = None;
                true
            }
            _ => false,
        }
    }

    pub fn live_coins(&self) -> usize {
        self.coins.iter().filter(|c| c.is_some()).count()
    }

    /// Replace the hole set (truncated to capacity). Intended for scripted setups.
    pub fn set_holes(&mut self, holes: &[u8]) {
        self.holes = holes.iter().copied().take(MAX_HAZARDS).collect();
    }

    /// Replace the elevator tile set (truncated to capacity).
    pub fn set_elevator_tiles(&mut self, tiles: &[u8]) {
        self.elevator_tiles = tiles.iter().copied().take(MAX_HAZARDS).collect();
    }

    /// Replace the fire set (truncated to capacity).
    pub fn set_fires(&mut self, fires: &[GridPos]) {
        self.fires = fires.iter().copied().take(MAX_HAZARDS).collect();
    }

    /// Place a coin in a slot (`None` retires it).
    pub fn set_coin(&mut self, slot: usize, pos: Option<GridPos>) {
        if let Some(coin) = self.coins.get_mut(slot) {
            *coin = pos;
        }
    }
}

impl Default for Hazards {
    fn default() -> Self {
        Self::empty()
    }
}

/// First cell from `preferred` onwards (wrapping) that is neither the
/// player's cell nor the spawn.
fn free_index(preferred: u8, player: Option<u8>) -> u8 {
    let cells = (GRID_SIZE * GRID_SIZE) as u8;
    (0..cells)
        .map(|k| (preferred + k) % cells)
        .find(|&i| Some(i) != player && Some(i) != SPAWN.index())
        .unwrap_or(preferred)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_one_has_holes_and_coins_only() {
        let mut rng = SimpleRng::new(3);
        let h = Hazards::for_level(1, SPAWN, &mut rng);
        assert_eq!(h.holes().len(), MAX_HAZARDS);
        assert!(h.elevator_tiles().is_empty());
        assert!(h.fires().is_empty());
        assert_eq!(h.live_coins(), COIN_COUNT);
        assert!(h.coins().iter().flatten().all(|c| c.in_bounds()));
    }

    #[test]
    fn test_level_two_adds_fire() {
        let mut rng = SimpleRng::new(3);
        let h = Hazards::for_level(2, SPAWN, &mut rng);
        assert_eq!(h.fires().len(), MAX_HAZARDS);
        assert!(h.elevator_tiles().is_empty());
    }

    #[test]
    fn test_level_three_adds_elevators() {
        let mut rng = SimpleRng::new(3);
        let h = Hazards::for_level(3, SPAWN, &mut rng);
        assert!(!h.elevator_tiles().is_empty());
        for &t in h.elevator_tiles() {
            assert!(!h.fires().iter().any(|f| f.index() == Some(t)));
        }
    }

    #[test]
    fn test_holes_never_land_on_player_or_spawn() {
        let player = GridPos::new(4, 4);
        for seed in 1..200 {
            let mut rng = SimpleRng::new(seed);
            let mut h = Hazards::for_level(1, player, &mut rng);
            h.reshuffle(1, player, &mut rng);
            assert!(!h.is_hole(player), "seed {seed}");
            assert!(!h.is_hole(SPAWN), "seed {seed}");
        }
    }

    #[test]
    fn test_fire_never_lands_on_player() {
        let player = GridPos::new(2, 5);
        for seed in 1..200 {
            let mut rng = SimpleRng::new(seed);
            let h = Hazards::for_level(2, player, &mut rng);
            assert!(!h.is_fire(player), "seed {seed}");
        }
    }

    #[test]
    fn test_hole_fallback_skips_player_on_fallback_cell() {
        let player = GridPos::from_index(HOLE_FALLBACK_INDEX);
        for seed in 1..2000 {
            let mut rng = SimpleRng::new(seed);
            let mut h = Hazards::for_level(1, player, &mut rng);
            h.reshuffle(1, player, &mut rng);
            assert!(!h.is_hole(player), "seed {seed}");
            assert!(!h.is_hole(SPAWN), "seed {seed}");
        }
    }

    #[test]
    fn test_fire_fallback_skips_player_on_fallback_cell() {
        let player = FIRE_FALLBACK;
        for seed in 1..2000 {
            let mut rng = SimpleRng::new(seed);
            let mut h = Hazards::for_level(3, player, &mut rng);
            h.reshuffle(3, player, &mut rng);
            assert!(!h.is_fire(player), "seed {seed}");
            assert!(!h.is_hole(player), "seed {seed}");
            for &t in h.elevator_tiles() {
                assert!(!h.fires().iter().any(|f| f.index() == Some(t)), "seed {seed}");
            }
        }
    }

    #[test]
    fn test_free_index_walks_past_taken_cells() {
        assert_eq!(free_index(37, Some(42)), 37);
        assert_eq!(free_index(37, Some(37)), 38);
        assert_eq!(free_index(89, Some(89)), 91);
        assert_eq!(free_index(99, Some(99)), 0);
    }

    #[test]
    fn test_reshuffle_keeps_coins() {
        let mut rng = SimpleRng::new(11);
        let mut h = Hazards::for_level(2, SPAWN, &mut rng);
        let coins = *h.coins();
        h.reshuffle(2, SPAWN, &mut rng);
        assert_eq!(*h.coins(), coins);
    }

    #[test]
    fn test_retired_coin_is_inert() {
        let mut h = Hazards::empty();
        let pos = GridPos::new(1, 1);
        h.set_coin(2, Some(pos));
        assert_eq!(h.coin_at(pos), Some(2));
        assert!(h.retire_coin(2));
        assert_eq!(h.coin_at(pos), None);
        assert!(!h.retire_coin(2));
    }

    #[test]
    fn test_off_grid_positions_match_nothing() {
        let mut h = Hazards::empty();
        h.set_holes(&[0]);
        h.set_elevator_tiles(&[0]);
        h.set_fires(&[GridPos::new(0, 0)]);
        let off = GridPos::new(-1, 0);
        assert!(!h.is_hole(off));
        assert!(!h.is_elevator(off));
        assert!(!h.is_fire(off));
        assert!(h.is_hole(GridPos::new(0, 0)));
    }

    #[test]
    fn test_setters_truncate_to_capacity() {
        let mut h = Hazards::empty();
        h.set_holes(&[1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(h.holes().len(), MAX_HAZARDS);
    }
}
