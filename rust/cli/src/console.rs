//! Terminal presentation of a running game.

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use whodunit_engine::cards::Card;
use whodunit_engine::events::{EventHandler, TracingEventHandler};
use whodunit_engine::game::PlayerInfo;
use whodunit_engine::guess::Guess;
use whodunit_engine::player::{Player, Seat};

use crate::ui::SEPARATOR;

/// One output stream shared by the event printer and the interactive
/// player, so prompts and game narration interleave in order.
#[derive(Clone)]
pub struct SharedWriter<'a>(Rc<RefCell<&'a mut dyn Write>>);

impl<'a> SharedWriter<'a> {
    pub fn new(out: &'a mut dyn Write) -> Self {
        Self(Rc::new(RefCell::new(out)))
    }
}

impl Write for SharedWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.0.borrow_mut().flush()
    }
}

/// Narrates public game events.
///
/// Revealed cards are never printed; only who answered. Every notification is
/// also forwarded to [`TracingEventHandler`]. The first write failure is kept
/// and reported by [`ConsoleEventHandler::take_error`].
pub struct ConsoleEventHandler<W: Write> {
    out: W,
    roster: Vec<PlayerInfo>,
    trace: TracingEventHandler,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleEventHandler<W> {
    pub fn new(out: W, roster: Vec<PlayerInfo>) -> Self {
        Self {
            out,
            roster,
            trace: TracingEventHandler,
            error: None,
        }
    }

    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    fn name(&self, seat: Seat) -> String {
        self.roster
            .get(seat.index())
            .map(|p| p.name.clone())
            .unwrap_or_else(|| seat.to_string())
    }

    fn emit(&mut self, lines: &[String]) {
        if self.error.is_some() {
            return;
        }
        for line in lines {
            if let Err(e) = writeln!(self.out, "{}", line) {
                self.error = Some(e);
                return;
            }
        }
    }
}

impl<W: Write> EventHandler for ConsoleEventHandler<W> {
    fn on_game_start(&mut self) {
        self.trace.on_game_start();
        self.emit(&["Whodunit!".into()]);
    }

    fn on_game_end(&mut self, turn: u32) {
        self.trace.on_game_end(turn);
        self.emit(&[String::new(), "Game over".into()]);
    }

    fn on_player_selected(&mut self, player: &dyn Player) {
        self.trace.on_player_selected(player);
    }

    fn on_new_turn(&mut self, turn: u32) {
        self.trace.on_new_turn(turn);
        self.emit(&[format!("Turn {}:", turn + 1)]);
    }

    fn on_turn_end(&mut self, turn: u32) {
        self.trace.on_turn_end(turn);
        self.emit(&[SEPARATOR.into()]);
    }

    fn on_guess_made(&mut self, guess: &Guess) {
        self.trace.on_guess_made(guess);
        let line = format!(
            "\tPlayer '{}' made a guess: {}",
            self.name(guess.guesser()),
            guess
        );
        self.emit(&[line]);
    }

    fn on_guess_matched(&mut self, guess: &Guess, shown: Option<&Card>) {
        self.trace.on_guess_matched(guess, shown);
        let guesser = self.name(guess.guesser());
        let line = match guess.responder() {
            Some(r) if r != guess.guesser() => format!(
                "\tPlayer '{}' answered guess by Player '{}'",
                self.name(r),
                guesser
            ),
            _ => format!("\tPlayer '{}' guess answered by itself", guesser),
        };
        self.emit(&[line]);
    }

    fn on_guess_is_solution(&mut self, guess: &Guess) {
        self.trace.on_guess_is_solution(guess);
        let lines = [
            SEPARATOR.to_string(),
            SEPARATOR.to_string(),
            format!("Case solved: at turn {}", guess.turn() + 1),
            format!(
                "Player '{}' cracked the case: {}",
                self.name(guess.guesser()),
                guess
            ),
        ];
        self.emit(&lines);
    }
}
