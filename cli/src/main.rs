use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use lights_out_core::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

mod logging;

/// Play Lights Out in the terminal: turn every light off.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = GameConfig::DEFAULT_ROWS)]
    rows: Ix,
    #[arg(long, default_value_t = GameConfig::DEFAULT_COLS)]
    cols: Ix,
    /// Chance any cell is lit at the start of a game
    #[arg(long, default_value_t = GameConfig::DEFAULT_START_PROBABILITY)]
    chance: f64,
    #[arg(long, value_enum, default_value_t = LayoutArg::Unsolved)]
    layout: LayoutArg,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    /// Print the game state as JSON after every move
    #[arg(long)]
    json: bool,
    #[command(flatten)]
    verbose: Verbosity<WarnLevel>,
}

#[derive(ValueEnum, Copy, Clone, Debug)]
enum LayoutArg {
    Random,
    Unsolved,
    Scrambled,
}

impl From<LayoutArg> for StartLayout {
    fn from(layout: LayoutArg) -> Self {
        match layout {
            LayoutArg::Random => StartLayout::Random,
            LayoutArg::Unsolved => StartLayout::Unsolved,
            LayoutArg::Scrambled => StartLayout::Scrambled,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
enum Command {
    Activate(Pos),
    NewGame,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Result<Option<Self>> {
        Ok(match line.trim() {
            "" => None,
            "n" | "new" => Some(Self::NewGame),
            "q" | "quit" => Some(Self::Quit),
            key => Some(Self::Activate(parse_coord(key)?)),
        })
    }
}

/// Deals boards from a session RNG so one seed reproduces every game of the session.
struct Session {
    config: GameConfig,
    layout: StartLayout,
    rng: SmallRng,
    json: bool,
}

impl Session {
    fn deal(&mut self) -> Result<PlayEngine> {
        let seed = self.rng.random();
        log::debug!("dealing new board with seed {}", seed);
        PlayEngine::generate(RandomBoardGenerator::new(seed, self.layout), self.config)
    }

    fn render(&self, engine: &PlayEngine, out: &mut impl Write) -> anyhow::Result<()> {
        if self.json {
            writeln!(out, "{}", serde_json::to_string(engine)?)?;
        }
        if engine.is_won() {
            writeln!(out, "You Win! ({} moves)", engine.moves())?;
            writeln!(out, "n: new game, q: quit")?;
        } else {
            writeln!(out, "{}", engine.board())?;
            writeln!(out, "move {}, enter `row col` to toggle", engine.moves())?;
        }
        Ok(())
    }

    /// Feeds input lines to the engine until `q` or end of input.
    fn play(&mut self, input: impl BufRead, out: &mut impl Write) -> anyhow::Result<()> {
        let mut engine = self.deal()?;
        self.render(&engine, out)?;

        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(err) => {
                    log::warn!("{}: {:?}", err, line.trim());
                    continue;
                }
            };

            match command {
                Command::Quit => break,
                Command::NewGame => engine = self.deal()?,
                Command::Activate(coords) => {
                    if !engine.activate(coords).has_update() {
                        continue;
                    }
                }
            }
            self.render(&engine, out)?;
        }
        out.flush()?;
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose.log_level_filter());

    let config =
        GameConfig::new(cli.rows, cli.cols, cli.chance).context("invalid game configuration")?;
    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("session seed {}", seed);

    let mut session = Session {
        config,
        layout: cli.layout.into(),
        rng: SmallRng::seed_from_u64(seed),
        json: cli.json,
    };
    session.play(io::stdin().lock(), &mut io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(config: GameConfig, layout: StartLayout, json: bool) -> Session {
        Session {
            config,
            layout,
            rng: SmallRng::seed_from_u64(3),
            json,
        }
    }

    fn play(session: &mut Session, input: &str) -> String {
        let mut out = Vec::new();
        session.play(input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse("  "), Ok(None));
        assert_eq!(Command::parse("q"), Ok(Some(Command::Quit)));
        assert_eq!(Command::parse("new"), Ok(Some(Command::NewGame)));
        assert_eq!(Command::parse("1 2"), Ok(Some(Command::Activate((1, 2)))));
        assert_eq!(Command::parse("0-4"), Ok(Some(Command::Activate((0, 4)))));
        assert_eq!(Command::parse("toggle"), Err(GameError::InvalidCoords));
    }

    #[test]
    fn single_cell_game_is_won_in_one_move() {
        let config = GameConfig::new(1, 1, 1.0).unwrap();
        let mut session = session(config, StartLayout::Random, false);

        let out = play(&mut session, "0 0\n0 0\nq\n");

        assert_eq!(out, "O\nmove 0, enter `row col` to toggle\nYou Win! (1 moves)\nn: new game, q: quit\n");
    }

    #[test]
    fn bad_and_off_grid_input_does_not_redraw() {
        let config = GameConfig::new(2, 2, 1.0).unwrap();
        let mut session = session(config, StartLayout::Random, false);

        let out = play(&mut session, "hello\n9 9\n\n");

        assert_eq!(out, "OO\nOO\nmove 0, enter `row col` to toggle\n");
    }

    #[test]
    fn new_game_deals_fresh_board() {
        let config = GameConfig::new(1, 2, 1.0).unwrap();
        let mut session = session(config, StartLayout::Random, false);

        let out = play(&mut session, "0 0\nn\n");

        assert_eq!(
            out,
            "OO\nmove 0, enter `row col` to toggle\n\
             You Win! (1 moves)\nn: new game, q: quit\n\
             OO\nmove 0, enter `row col` to toggle\n"
        );
    }

    #[test]
    fn json_output_reports_engine_state() {
        let config = GameConfig::new(1, 1, 1.0).unwrap();
        let mut session = session(config, StartLayout::Random, true);

        let out = play(&mut session, "0 0\n");
        let snapshots: Vec<serde_json::Value> = out
            .lines()
            .filter(|line| line.starts_with('{'))
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0]["state"], "Playing");
        assert_eq!(snapshots[1]["state"], "Won");
        assert_eq!(snapshots[1]["moves"], 1);
    }
}
