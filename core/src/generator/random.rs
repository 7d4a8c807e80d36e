use super::*;
use rand::prelude::*;

const MAX_REROLLS: usize = 64;

/// Generation strategy driven by a seeded small RNG, so the same seed and config always
/// produce the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
    layout: StartLayout,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64, layout: StartLayout) -> Self {
        Self { seed, layout }
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use StartLayout::*;

        config.validate()?;

        let layout = match self.layout {
            Unsolved | Scrambled if config.start_probability == 0.0 => {
                log::warn!("Cannot light any cell with zero start probability, fallback to random");
                Random
            }
            layout => layout,
        };

        let mut rng = SmallRng::seed_from_u64(self.seed);
        match layout {
            Random => Board::random(&config, &mut rng),
            Unsolved => reroll_solved(&mut rng, |rng| Board::random(&config, rng)),
            Scrambled => reroll_solved(&mut rng, |rng| scramble(&config, rng)),
        }
    }
}

/// Draws boards until one has a lit cell, giving up after `MAX_REROLLS` tries.
fn reroll_solved(
    rng: &mut SmallRng,
    mut draw: impl FnMut(&mut SmallRng) -> Result<Board>,
) -> Result<Board> {
    let mut board = draw(rng)?;
    for attempt in 1..MAX_REROLLS {
        if !board.has_won() {
            break;
        }
        log::debug!("Generated board already solved, reroll {}", attempt);
        board = draw(rng)?;
    }
    if board.has_won() {
        log::warn!("Could not generate an unsolved board after {} tries", MAX_REROLLS);
    }
    Ok(board)
}

/// Presses randomly chosen cells on a dark board, so the result can always be solved.
fn scramble(config: &GameConfig, rng: &mut SmallRng) -> Result<Board> {
    let presses = Board::random(config, rng)?;
    let (rows, cols) = presses.dimensions();
    let mut board = Board::unlit(rows, cols)?;
    for row in 0..rows {
        for col in 0..cols {
            if presses[(row, col)] {
                board = board.toggle_around((row as isize, col as isize));
            }
        }
    }
    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, layout: StartLayout, config: GameConfig) -> Board {
        RandomBoardGenerator::new(seed, layout).generate(config).unwrap()
    }

    #[test]
    fn same_seed_same_board() {
        let config = GameConfig::new(6, 4, 0.5).unwrap();

        for layout in [StartLayout::Random, StartLayout::Unsolved, StartLayout::Scrambled] {
            assert_eq!(generate(42, layout, config), generate(42, layout, config));
        }
    }

    #[test]
    fn zero_probability_falls_back_to_dark_board() {
        let config = GameConfig::new(3, 3, 0.0).unwrap();

        for layout in [StartLayout::Random, StartLayout::Unsolved, StartLayout::Scrambled] {
            assert!(generate(9, layout, config).has_won());
        }
    }

    #[test]
    fn full_probability_random_lights_everything() {
        let config = GameConfig::new(3, 5, 1.0).unwrap();

        assert_eq!(generate(9, StartLayout::Random, config).lit_count(), 15);
    }

    #[test]
    fn full_probability_scramble_presses_every_cell() {
        // pressing every cell of a 1x3 strip flips the ends twice and the middle three times
        let config = GameConfig::new(1, 3, 1.0).unwrap();

        assert_eq!(generate(0, StartLayout::Scrambled, config), ".O.".parse().unwrap());
    }

    #[test]
    fn unsolved_layout_is_never_dark() {
        // a lone cell stays dark half of the time, so plain random would hit it quickly
        let config = GameConfig::new(1, 1, 0.5).unwrap();

        for seed in 0..32 {
            assert!(!generate(seed, StartLayout::Unsolved, config).has_won());
        }
    }

    #[test]
    fn scrambled_layout_is_never_dark() {
        // some press combinations cancel out on a 5x5 board
        let config = GameConfig::default();

        for seed in 0..2000 {
            let board = generate(seed, StartLayout::Scrambled, config);
            assert!(!board.has_won(), "seed {} scrambled to a dark board", seed);
        }
    }

    #[test]
    fn generator_rejects_invalid_config() {
        let generator = RandomBoardGenerator::new(0, StartLayout::Random);

        assert_eq!(
            generator.generate(GameConfig::new_unchecked(3, 0, 0.2)),
            Err(GameError::InvalidDimension)
        );
    }
}
