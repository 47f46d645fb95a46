//! Interactive strategy driven by a person at the terminal.

use std::io::{self, BufRead, Write};

use whodunit_engine::cards::{Card, CardType};
use whodunit_engine::errors::GameError;
use whodunit_engine::guess::Guess;
use whodunit_engine::player::{GuessContext, Player, PlayerCore, Seat};

use crate::formatters::category_title;
use crate::io_utils::read_stdin_line;
use crate::ui::menu_index;

/// Whoever answers the prompts for a [`HumanPlayer`].
pub trait Operator {
    /// Index into `options` of the chosen entry.
    fn choose(&mut self, prompt: &str, options: &[String]) -> io::Result<usize>;

    fn notify(&mut self, message: &str) -> io::Result<()>;
}

/// Numbered menus over a line-oriented input stream.
///
/// Invalid entries re-prompt; end of input is an
/// [`io::ErrorKind::UnexpectedEof`] error.
pub struct ConsoleOperator<'a, W: Write> {
    input: &'a mut dyn BufRead,
    output: W,
}

impl<'a, W: Write> ConsoleOperator<'a, W> {
    pub fn new(input: &'a mut dyn BufRead, output: W) -> Self {
        Self { input, output }
    }
}

impl<W: Write> Operator for ConsoleOperator<'_, W> {
    fn choose(&mut self, prompt: &str, options: &[String]) -> io::Result<usize> {
        loop {
            writeln!(self.output, "\n\t{}", prompt)?;
            for (i, option) in options.iter().enumerate() {
                writeln!(self.output, "\t\t{}- {}", menu_index(i), option)?;
            }
            write!(self.output, "\n\t\tSelect your option: ")?;
            self.output.flush()?;

            let Some(line) = read_stdin_line(&mut *self.input) else {
                writeln!(self.output)?;
                return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
            };
            match line.parse::<usize>() {
                Ok(n) if (1..=options.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(self.output, "\t\t-- Bad option, try again!")?,
            }
        }
    }

    fn notify(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }
}

const ACTIONS: [&str; 2] = ["List cards", "Make a guess"];

/// A seat whose decisions come from an [`Operator`].
pub struct HumanPlayer<'a> {
    core: PlayerCore,
    operator: Box<dyn Operator + 'a>,
}

impl<'a> HumanPlayer<'a> {
    pub fn new(seat: Seat, operator: impl Operator + 'a) -> Self {
        Self {
            core: PlayerCore::new(seat),
            operator: Box::new(operator),
        }
    }

    /// End of input means the operator walked away; any other I/O failure
    /// is a strategy error.
    fn strategy_error(&self, e: io::Error) -> GameError {
        match e.kind() {
            io::ErrorKind::UnexpectedEof => GameError::Withdrawn(self.core.seat()),
            _ => GameError::Strategy {
                seat: self.core.seat(),
                reason: e.to_string(),
            },
        }
    }

    /// `O` for owned cards, `S -> 'P2'` for cards shown by another seat.
    fn marker(&self, card: &Card) -> String {
        if self.core.owns(card) {
            "O".into()
        } else if let Some(seat) = self.core.seen_cards().get(card) {
            format!("S -> '{}'", seat)
        } else {
            String::new()
        }
    }

    fn labels(&self, cards: &[&Card]) -> Vec<String> {
        let width = cards.iter().map(|c| c.name().len()).max().unwrap_or(0);
        cards
            .iter()
            .map(|c| {
                format!("{:<width$}  {}", c.name(), self.marker(c), width = width)
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    fn sorted(cards: &[Card], kind: CardType) -> Vec<&Card> {
        let mut of_kind: Vec<&Card> = cards.iter().filter(|c| c.kind() == kind).collect();
        of_kind.sort();
        of_kind
    }

    fn card_listing(&self, cards: &[Card]) -> String {
        let mut text = String::from("\t\tO - means you own this card\n\t\tS - means you have seen this card\n");
        for kind in [CardType::Weapon, CardType::Location, CardType::Character] {
            text.push_str(&format!("\n\t\t{}:\n", category_title(kind)));
            for (i, label) in self.labels(&Self::sorted(cards, kind)).iter().enumerate() {
                text.push_str(&format!("\t\t\t{}- {}\n", menu_index(i), label));
            }
        }
        text
    }

    fn select(&mut self, cards: &[Card], kind: CardType) -> io::Result<Card> {
        let options = Self::sorted(cards, kind);
        let labels = self.labels(&options);
        let i = self
            .operator
            .choose(&format!("Select a {}:", kind), &labels)?;
        let card = options[i].clone();
        self.operator
            .notify(&format!("\t\tSelected card: {}", card))?;
        Ok(card)
    }

    fn decide_guess(&mut self, ctx: &GuessContext<'_>) -> io::Result<[Card; 3]> {
        let actions: Vec<String> = ACTIONS.iter().map(|s| s.to_string()).collect();
        self.operator
            .notify(&format!("\n'{}' should make a guess:", self.core.name()))?;
        loop {
            match self.operator.choose("What will you do?", &actions)? {
                0 => {
                    let listing = self.card_listing(ctx.cards);
                    self.operator.notify(&listing)?;
                }
                _ => {
                    let weapon = self.select(ctx.cards, CardType::Weapon)?;
                    let location = self.select(ctx.cards, CardType::Location)?;
                    let character = self.select(ctx.cards, CardType::Character)?;
                    return Ok([character, location, weapon]);
                }
            }
        }
    }

    fn decide_reveal(&mut self, guess: &Guess) -> io::Result<Option<Card>> {
        let mut matched: Vec<Card> = self.core.matched_cards(guess).into_iter().cloned().collect();
        matched.sort();
        self.operator
            .notify(&format!("\n'{}' must show a card:", self.core.name()))?;
        let card = match matched.len() {
            0 => return Ok(None),
            1 => matched.swap_remove(0),
            _ => {
                let labels: Vec<String> = matched.iter().map(|c| c.name().to_string()).collect();
                let i = self.operator.choose("Select matched card:", &labels)?;
                matched.swap_remove(i)
            }
        };
        self.operator
            .notify(&format!("\t\tSelected matched card: {}", card))?;
        Ok(Some(card))
    }
}

impl Player for HumanPlayer<'_> {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn strategy(&self) -> &'static str {
        "human"
    }

    fn make_guess(&mut self, ctx: &GuessContext<'_>) -> Result<Guess, GameError> {
        let [character, location, weapon] =
            self.decide_guess(ctx).map_err(|e| self.strategy_error(e))?;
        Guess::new(ctx.turn, self.core.seat(), character, location, weapon)
    }

    fn show_matched_card(&mut self, guess: &Guess) -> Result<Card, GameError> {
        match self.decide_reveal(guess) {
            Ok(Some(card)) => Ok(card),
            Ok(None) => Err(GameError::Strategy {
                seat: self.core.seat(),
                reason: format!("no card matches {}", guess),
            }),
            Err(e) => Err(self.strategy_error(e)),
        }
    }

    fn read_matched_card(&mut self, guess: &Guess, card: &Card) -> Result<(), GameError> {
        self.core.record_seen(guess, card)?;
        let responder = guess
            .responder()
            .map(|s| s.to_string())
            .unwrap_or_default();
        let message = format!(
            "\n'{}' matched with '{}' guess:\n\t'{}' was shown",
            responder,
            self.core.name(),
            card
        );
        self.operator
            .notify(&message)
            .map_err(|e| self.strategy_error(e))
    }
}
