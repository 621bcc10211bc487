use rand::Rng;

use crate::{
    draw::Console,
    proc::{ Field, MAX_SIZE },
    Result,
};

pub static BANNER: [&str; 7] = [
    "Game of Life",
    "------------",
    "Controls during the game:",
    "r - reset",
    "q - quit",
    "any other key - next generation",
    "",
];

pub const SIZE_PROMPT: &str = "Enter the side of the square board (positive number): ";
pub const PROBABILITY_PROMPT: &str = "Enter the chance of a cell starting alive (1-100): ";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Stage {
    CollectingSize,
    CollectingProbability { size: usize },
    Running { size: usize, probability: u32 },
    Quit,
}

/// Prompts for the board parameters, then steps the board one generation per key press.
pub struct App<C, R> {
    console: C,
    rng: R,
}

/// Accepts a positive board side no larger than `MAX_SIZE`.
pub fn parse_size(s: &str) -> Option<usize> {
    s.trim().parse::<u16>().ok().filter(|n| *n > 0).map(usize::from)
}

/// Accepts a percentage in `1..=100`.
pub fn parse_probability(s: &str) -> Option<u32> {
    s.trim().parse::<u32>().ok().filter(|p| (1..=100).contains(p))
}

impl<C: Console, R: Rng> App<C, R> {

    #[inline]
    pub fn new(console: C, rng: R) -> Self {
        App {
            console,
            rng,
        }
    }

    /// Runs until `q` is pressed or input runs out.
    pub fn run(&mut self) -> Result<()> {
        let mut stage = Stage::CollectingSize;
        loop {
            stage = match stage {
                Stage::CollectingSize => {
                    self.banner()?;
                    match self.collect(SIZE_PROMPT, parse_size)? {
                        Some(size) => Stage::CollectingProbability { size },
                        None => Stage::Quit,
                    }
                },
                Stage::CollectingProbability { size } => {
                    match self.collect(PROBABILITY_PROMPT, parse_probability)? {
                        Some(probability) => Stage::Running { size, probability },
                        None => Stage::Quit,
                    }
                },
                Stage::Running { size, probability } => self.play(size, probability)?,
                Stage::Quit => return Ok(()),
            }
        }
    }

    fn banner(&mut self) -> Result<()> {
        self.console.clear_screen()?;
        for l in BANNER {
            self.console.render_line(l)?;
        }
        Ok(())
    }

    fn collect<T>(&mut self, prompt: &str, parse: fn(&str) -> Option<T>) -> Result<Option<T>> {
        loop {
            self.console.render_line(prompt)?;
            match self.console.read_line()? {
                Some(l) => if let Some(v) = parse(&l) {
                    return Ok(Some(v))
                },
                None => return Ok(None),
            }
        }
    }

    fn play(&mut self, size: usize, probability: u32) -> Result<Stage> {
        // A board that cannot be allocated is treated like a bad size.
        let mut field = match Field::with_rng(size, probability, &mut self.rng) {
            Ok(f) => f,
            Err(_) => return Ok(Stage::CollectingSize),
        };
        self.show(&field)?;

        // The first press only starts the run.
        if self.console.read_key()?.is_none() {
            return Ok(Stage::Quit)
        }

        loop {
            field.tick();
            self.show(&field)?;
            match self.console.read_key()? {
                Some('r' | 'R') => return Ok(Stage::CollectingSize),
                Some('q' | 'Q') | None => return Ok(Stage::Quit),
                Some(_) => {},
            }
        }
    }

    fn show(&mut self, field: &Field) -> Result<()> {
        self.console.clear_screen()?;
        for l in field.lines() {
            self.console.render_line(&l)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::{ rngs::StdRng, SeedableRng };

    use super::*;
    use crate::draw::scripted::Scripted;

    fn run(lines: &[&str], keys: &str) -> Scripted {
        let mut a = App::new(Scripted::new(lines, keys), StdRng::seed_from_u64(42));
        a.run().unwrap();
        a.console
    }

    #[test]
    fn sizes() {
        assert_eq!(parse_size("12"), Some(12));
        assert_eq!(parse_size(" 3 "), Some(3));
        assert_eq!(parse_size("0"), None);
        assert_eq!(parse_size("-4"), None);
        assert_eq!(parse_size("four"), None);
        assert_eq!(parse_size(""), None);
        assert_eq!(parse_size("2.5"), None);
        assert_eq!(parse_size("65535"), Some(MAX_SIZE));
        assert_eq!(parse_size("65536"), None);
        assert_eq!(parse_size("18446744073709551615"), None);
    }

    #[test]
    fn probabilities() {
        assert_eq!(parse_probability("1"), Some(1));
        assert_eq!(parse_probability("100"), Some(100));
        assert_eq!(parse_probability("55\r"), Some(55));
        assert_eq!(parse_probability("0"), None);
        assert_eq!(parse_probability("101"), None);
        assert_eq!(parse_probability("-1"), None);
        assert_eq!(parse_probability("x"), None);
    }

    #[test]
    fn full_board_one_generation_then_quit() {
        let c = run(&["3", "100"], "xq");

        assert_eq!(c.screen(), ["---", "X X", "   ", "X X", "---"]);
        // Banner, seeded board, one generation.
        assert_eq!(c.clears, 3);
        assert_eq!(c.count("XXX"), 3);
        assert!(c.keys.is_empty());
    }

    #[test]
    fn banner_comes_first() {
        let c = run(&["1", "1"], "aq");
        assert_eq!(c.output[0], crate::draw::scripted::CLEAR_MARK);
        assert_eq!(&c.output[1..=BANNER.len()], &BANNER[..]);
        assert_eq!(c.output[BANNER.len() + 1], SIZE_PROMPT);
    }

    #[test]
    fn invalid_input_reprompts() {
        let c = run(&["abc", "0", "-3", "", "4", "0", "101", "x", "50"], "aq");

        assert_eq!(c.count(SIZE_PROMPT), 5);
        assert_eq!(c.count(PROBABILITY_PROMPT), 4);
        assert_eq!(c.count(BANNER[0]), 1);
        assert_eq!(c.screen().len(), 6);
    }

    #[test]
    fn oversized_board_asks_for_the_size_again() {
        let c = run(&["18446744073709551615", "70000", "3", "100"], "");

        assert_eq!(c.count(SIZE_PROMPT), 3);
        assert_eq!(c.count(PROBABILITY_PROMPT), 1);
        assert_eq!(c.screen(), ["---", "XXX", "XXX", "XXX", "---"]);
    }

    #[test]
    fn first_key_is_not_inspected() {
        let c = run(&["2", "100"], "qq");
        // Seeded board plus one generation.
        assert_eq!(c.count("--"), 4);
    }

    #[test]
    fn reset_starts_over() {
        let c = run(&["2", "100", "3", "100"], "zRzQ");

        assert_eq!(c.count(BANNER[0]), 2);
        assert_eq!(c.count(SIZE_PROMPT), 2);
        assert_eq!(c.count(PROBABILITY_PROMPT), 2);
        // A full 2x2 board is a block and stays put.
        assert_eq!(c.count("XX"), 4);
        assert_eq!(c.screen(), ["---", "X X", "   ", "X X", "---"]);
    }

    #[test]
    fn other_keys_keep_stepping() {
        let c = run(&["3", "100"], "a1 \n\0q");
        // Seeded board plus five generations.
        assert_eq!(c.count("---"), 12);
        assert!(c.keys.is_empty());
    }

    #[test]
    fn quit_stops_prompting() {
        let c = run(&["2", "100", "5", "5"], "xq");
        assert_eq!(c.count(SIZE_PROMPT), 1);
        assert_eq!(c.lines.len(), 2);
        assert_eq!(c.output.last().map(String::as_str), Some("--"));
    }

    #[test]
    fn exhausted_input_ends_the_game() {
        let c = run(&[], "");
        assert_eq!(c.count(SIZE_PROMPT), 1);

        let c = run(&["4"], "");
        assert_eq!(c.count(PROBABILITY_PROMPT), 1);

        let c = run(&["4", "100"], "");
        assert_eq!(c.screen(), ["----", "XXXX", "XXXX", "XXXX", "XXXX", "----"]);

        let c = run(&["4", "100"], "k");
        assert_eq!(c.screen(), ["----", "X  X", "    ", "    ", "X  X", "----"]);
    }
}
