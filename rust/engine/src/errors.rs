use thiserror::Error;

use crate::cards::CardType;
use crate::player::Seat;

/// Broad class of a [`GameError`].
///
/// None of them is recoverable: a failed setup aborts before any game exists,
/// and a failed turn ends the run.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum ErrorKind {
    /// Bad card sources or player counts, raised while building.
    Configuration,
    /// A strategy or caller broke the turn protocol.
    Protocol,
    /// The deck or hands are corrupt.
    Invariant,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("No card source supplied for category {0}")]
    MissingCategory(CardType),
    #[error("More than one card source supplied for category {0}")]
    DuplicateCategory(CardType),
    #[error("Category {0} has no cards")]
    EmptyCategory(CardType),
    #[error("Category {0} contains an empty card name")]
    EmptyCardName(CardType),
    #[error("No cards left to deal once the solution is drawn")]
    EmptyPool,
    #[error("At least one player is required")]
    NoPlayers,
    #[error("More players ({requested}) than characters ({available})")]
    TooManyPlayers { requested: usize, available: usize },
    #[error("Not enough cards ({cards}) for {players} players")]
    NotEnoughCards { players: usize, cards: usize },

    #[error("Card '{card}' is a {actual}, expected a {expected}")]
    CategoryMismatch {
        card: String,
        expected: CardType,
        actual: CardType,
    },
    #[error("Responder already set on guess from turn {turn}")]
    ResponderAlreadySet { turn: u32 },
    #[error("Guess from turn {turn} has no responder")]
    NoResponder { turn: u32 },
    #[error("Player {0} is already ready")]
    PlayerAlreadyReady(Seat),
    #[error("Player {0} already has a character")]
    CharacterAlreadySet(Seat),
    #[error("Player {0} needs a character and at least one card before getting ready")]
    PlayerIncomplete(Seat),
    #[error("Player {actual} sits at seat {expected}")]
    SeatMismatch { expected: Seat, actual: Seat },
    #[error("Game already set up")]
    AlreadySetup,
    #[error("Game not ready yet")]
    NotReady,
    #[error("Game already finished")]
    GameFinished,
    #[error("Game aborted after a failed turn")]
    GameAborted,
    #[error("Player {seat} tried to change turns on guess (expected {expected}, got {actual})")]
    TurnMismatch { seat: Seat, expected: u32, actual: u32 },
    #[error("Player {seat} made a guess on behalf of {guesser}")]
    GuesserMismatch { seat: Seat, guesser: Seat },
    #[error("Player {seat} revealed '{card}', which is not a matching card in their hand")]
    InvalidReveal { seat: Seat, card: String },
    #[error("Player {seat} could not decide: {reason}")]
    Strategy { seat: Seat, reason: String },
    #[error("Player {0} left the game")]
    Withdrawn(Seat),

    #[error("Guess on turn {turn} matches no cards nor the solution")]
    UnmatchedGuess { turn: u32 },
}

impl GameError {
    pub fn kind(&self) -> ErrorKind {
        use GameError::*;
        match self {
            MissingCategory(_)
            | DuplicateCategory(_)
            | EmptyCategory(_)
            | EmptyCardName(_)
            | EmptyPool
            | NoPlayers
            | TooManyPlayers { .. }
            | NotEnoughCards { .. } => ErrorKind::Configuration,
            UnmatchedGuess { .. } => ErrorKind::Invariant,
            _ => ErrorKind::Protocol,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_taxonomy() {
        assert_eq!(
            GameError::TooManyPlayers {
                requested: 6,
                available: 5
            }
            .kind(),
            ErrorKind::Configuration
        );
        assert_eq!(GameError::AlreadySetup.kind(), ErrorKind::Protocol);
        assert_eq!(
            GameError::ResponderAlreadySet { turn: 0 }.kind(),
            ErrorKind::Protocol
        );
        assert_eq!(GameError::Withdrawn(Seat(0)).kind(), ErrorKind::Protocol);
        assert_eq!(
            GameError::UnmatchedGuess { turn: 3 }.kind(),
            ErrorKind::Invariant
        );
    }

    #[test]
    fn messages_name_the_offender() {
        let e = GameError::TurnMismatch {
            seat: Seat(2),
            expected: 4,
            actual: 5,
        };
        assert_eq!(
            e.to_string(),
            "Player P2 tried to change turns on guess (expected 4, got 5)"
        );
        assert_eq!(
            GameError::Withdrawn(Seat(0)).to_string(),
            "Player P0 left the game"
        );
    }
}
