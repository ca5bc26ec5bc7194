//! Game progress: the hidden number, attempts and guess history.

use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::difficulty::Difficulty;

/// Directional feedback for a single guess.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    TooLow,
    TooHigh,
    Correct,
}

impl Outcome {
    pub fn hint(self) -> &'static str {
        match self {
            Outcome::TooLow => "Too low!",
            Outcome::TooHigh => "Too high!",
            Outcome::Correct => "Correct! You win!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: i64,
    pub outcome: Outcome,
}

/// Where the game stands. `Won` and `Lost` are terminal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { attempts: u32 },
    Lost { secret: i64 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GuessError {
    #[error("not a valid number: {0:?}")]
    InvalidInput(String),

    #[error("the game is already over")]
    GameOver,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    difficulty: Difficulty,
    secret: i64,
    attempts_used: u32,
    history: Vec<GuessRecord>,
    is_over: bool,
}

impl GameState {
    /// Starts a game with a secret drawn from the thread RNG.
    pub fn new(difficulty: Difficulty) -> Self {
        Self::new_with_rng(difficulty, &mut rand::thread_rng())
    }

    pub fn new_with_rng<R: Rng>(difficulty: Difficulty, rng: &mut R) -> Self {
        let secret = rng.gen_range(difficulty.min()..=difficulty.max());
        tracing::debug!("Drew secret for {} game", difficulty);
        Self::with_secret(difficulty, secret)
    }

    pub(crate) fn with_secret(difficulty: Difficulty, secret: i64) -> Self {
        debug_assert!((difficulty.min()..=difficulty.max()).contains(&secret));

        Self {
            difficulty,
            secret,
            attempts_used: 0,
            history: Vec::new(),
            is_over: false,
        }
    }

    /// Parses and scores one guess.
    ///
    /// Unparseable input and guesses after the game ended are rejected
    /// without touching the state. Every accepted guess consumes an attempt
    /// and is appended to the history, including guesses outside the range.
    pub fn submit_guess(&mut self, raw: &str) -> Result<Outcome, GuessError> {
        if self.is_over {
            return Err(GuessError::GameOver);
        }

        let guess: i64 = raw
            .trim()
            .parse()
            .map_err(|_| GuessError::InvalidInput(raw.to_string()))?;

        self.attempts_used += 1;

        let outcome = match guess.cmp(&self.secret) {
            std::cmp::Ordering::Less => Outcome::TooLow,
            std::cmp::Ordering::Greater => Outcome::TooHigh,
            std::cmp::Ordering::Equal => Outcome::Correct,
        };

        self.history.push(GuessRecord { guess, outcome });

        if outcome == Outcome::Correct || self.attempts_used == self.difficulty.max_attempts() {
            self.is_over = true;
        }

        Ok(outcome)
    }

    pub fn status(&self) -> GameStatus {
        match self.history.last() {
            Some(last) if last.outcome == Outcome::Correct => GameStatus::Won {
                attempts: self.attempts_used,
            },
            _ if self.is_over => GameStatus::Lost {
                secret: self.secret,
            },
            _ => GameStatus::InProgress,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn attempts_used(&self) -> u32 {
        self.attempts_used
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.difficulty.max_attempts() - self.attempts_used
    }

    pub fn history(&self) -> &[GuessRecord] {
        &self.history
    }

    pub fn is_over(&self) -> bool {
        self.is_over
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn test_secret_always_in_range() {
        let mut rng = StdRng::seed_from_u64(7);

        for difficulty in Difficulty::ALL {
            for _ in 0..10_000 {
                let game = GameState::new_with_rng(difficulty, &mut rng);
                assert!(game.secret >= difficulty.min());
                assert!(game.secret <= difficulty.max());
            }
        }
    }

    #[test]
    fn test_new_game_starts_fresh() {
        let game = GameState::new(Difficulty::Hard);

        assert_eq!(game.attempts_used(), 0);
        assert_eq!(game.attempts_remaining(), 5);
        assert!(game.history().is_empty());
        assert!(!game.is_over());
        assert_eq!(game.status(), GameStatus::InProgress);
    }

    #[test]
    fn test_invalid_input_leaves_state_untouched() {
        let mut game = GameState::with_secret(Difficulty::Medium, 42);
        game.submit_guess("10").unwrap();

        for raw in ["", "abc", "4.2", "12a", "--3", "   "] {
            let err = game.submit_guess(raw).unwrap_err();
            assert_eq!(err, GuessError::InvalidInput(raw.to_string()));
            assert_eq!(game.attempts_used(), 1);
            assert_eq!(game.history().len(), 1);
        }
    }

    #[test]
    fn test_input_is_trimmed_and_signed() {
        let mut game = GameState::with_secret(Difficulty::Medium, 42);

        assert_eq!(game.submit_guess("  42\n"), Ok(Outcome::Correct));

        let mut game = GameState::with_secret(Difficulty::Medium, 42);
        assert_eq!(game.submit_guess("-5"), Ok(Outcome::TooLow));
        assert_eq!(game.submit_guess("+500"), Ok(Outcome::TooHigh));
        assert_eq!(game.attempts_used(), 2);
    }

    #[test]
    fn test_over_only_when_budget_exhausted() {
        for difficulty in Difficulty::ALL {
            let mut game = GameState::with_secret(difficulty, difficulty.max());

            for attempt in 1..=difficulty.max_attempts() {
                assert!(!game.is_over());
                assert_eq!(game.submit_guess("0"), Ok(Outcome::TooLow));
                assert_eq!(game.attempts_used(), attempt);
                assert_eq!(game.history().len() as u32, attempt);
                assert_eq!(game.is_over(), attempt == difficulty.max_attempts());
            }
        }
    }

    #[test]
    fn test_correct_guess_ends_game_early() {
        let mut game = GameState::with_secret(Difficulty::Easy, 20);

        assert_eq!(game.submit_guess("20"), Ok(Outcome::Correct));
        assert!(game.is_over());
        assert_eq!(game.attempts_remaining(), 9);
        assert_eq!(game.status(), GameStatus::Won { attempts: 1 });
    }

    #[test]
    fn test_correct_on_last_attempt_is_a_win() {
        let mut game = GameState::with_secret(Difficulty::Hard, 150);
        for _ in 0..4 {
            game.submit_guess("1").unwrap();
        }

        assert_eq!(game.submit_guess("150"), Ok(Outcome::Correct));
        assert_eq!(game.status(), GameStatus::Won { attempts: 5 });
    }

    #[test]
    fn test_medium_scenario() {
        let mut game = GameState::with_secret(Difficulty::Medium, 42);

        let outcomes: Vec<Outcome> = ["50", "25", "42"]
            .iter()
            .map(|g| game.submit_guess(g).unwrap())
            .collect();

        assert_eq!(outcomes, vec![Outcome::TooHigh, Outcome::TooLow, Outcome::Correct]);
        assert_eq!(game.attempts_used(), 3);
        assert_eq!(
            game.history(),
            &[
                GuessRecord { guess: 50, outcome: Outcome::TooHigh },
                GuessRecord { guess: 25, outcome: Outcome::TooLow },
                GuessRecord { guess: 42, outcome: Outcome::Correct },
            ]
        );
    }

    #[test]
    fn test_easy_scenario_out_of_attempts() {
        let mut game = GameState::with_secret(Difficulty::Easy, 7);

        for guess in [1, 2, 3, 4, 5, 6, 8, 9, 10, 11] {
            assert_ne!(game.submit_guess(&guess.to_string()), Ok(Outcome::Correct));
        }

        assert!(game.is_over());
        assert_eq!(game.status(), GameStatus::Lost { secret: 7 });
        assert_eq!(game.submit_guess("7"), Err(GuessError::GameOver));
        assert_eq!(game.attempts_used(), 10);
        assert_eq!(game.history().len(), 10);
    }

    #[test]
    fn test_state_serializes() {
        let mut game = GameState::with_secret(Difficulty::Medium, 42);
        game.submit_guess("50").unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: GameState = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.difficulty(), Difficulty::Medium);
        assert_eq!(restored.history(), game.history());
        assert_eq!(restored.attempts_used(), 1);
    }
}
