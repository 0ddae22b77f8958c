use rand::prelude::*;
use smallvec::SmallVec;

use crate::tile;
use crate::{Board, Coord2, GameError, Result, TileSpawner};

/// Spawner backed by a seeded RNG, so a whole session is reproducible.
///
/// A single RNG drives both draws: the uniform empty-cell pick and the
/// 2-versus-4 value choice.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    rng: SmallRng,
}

impl RandomSpawner {
    pub fn seed_from(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl TileSpawner for RandomSpawner {
    fn spawn(&mut self, board: &mut Board) -> Result<Coord2> {
        let empty: SmallVec<[Coord2; 16]> = board.iter_empty().collect();
        if empty.is_empty() {
            return Err(GameError::BoardFull);
        }

        let coords = empty[self.rng.random_range(0..empty.len())];
        let value = if self.rng.random::<f32>() < tile::BIG_SPAWN_CHANCE {
            tile::SPAWN_BIG
        } else {
            tile::SPAWN_SMALL
        };
        board.set(coords, value);
        log::trace!("spawned {} at {:?}", value, coords);
        Ok(coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn spawn_on_a_full_board_fails() {
        let mut board = Board::from_rows([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let mut spawner = RandomSpawner::seed_from(7);
        assert_eq!(spawner.spawn(&mut board), Err(GameError::BoardFull));
    }

    #[test]
    fn spawn_fills_exactly_one_empty_cell_with_a_two_or_four() {
        let mut board = Board::empty();
        let mut spawner = RandomSpawner::seed_from(7);
        let coords = spawner.spawn(&mut board).unwrap();
        assert_eq!(board.empty_count(), 15);
        let value = board.get(coords);
        assert!(value == tile::SPAWN_SMALL || value == tile::SPAWN_BIG);
    }

    #[test]
    fn same_seed_gives_the_same_spawn_sequence() {
        let mut left = Board::empty();
        let mut right = Board::empty();
        let mut spawner_a = RandomSpawner::seed_from(42);
        let mut spawner_b = RandomSpawner::seed_from(42);
        for _ in 0..10 {
            let a = spawner_a.spawn(&mut left).unwrap();
            let b = spawner_b.spawn(&mut right).unwrap();
            assert_eq!(a, b);
        }
        assert_eq!(left, right);
    }

    #[test]
    fn value_distribution_is_roughly_one_in_ten_fours() {
        let mut spawner = RandomSpawner::seed_from(99);
        let rounds = 2000;
        let mut fours = 0;
        for _ in 0..rounds {
            let mut board = Board::empty();
            let coords = spawner.spawn(&mut board).unwrap();
            if board.get(coords) == tile::SPAWN_BIG {
                fours += 1;
            }
        }
        let ratio = f64::from(fours) / f64::from(rounds);
        assert!(
            (0.05..0.20).contains(&ratio),
            "observed four-ratio {ratio} too far from 0.1"
        );
    }

    #[test]
    fn cell_choice_covers_every_empty_cell() {
        let mut spawner = RandomSpawner::seed_from(5);
        let mut hits: HashMap<_, u32> = HashMap::new();
        for _ in 0..2000 {
            let mut board = Board::empty();
            let coords = spawner.spawn(&mut board).unwrap();
            *hits.entry(coords).or_default() += 1;
        }
        assert_eq!(hits.len(), 16, "some cells were never chosen: {hits:?}");
    }
}
