//! Interactive menu shell
//!
//! Thin front end over the queue, the reserve and the generator: prints the
//! state block, reads numeric commands from stdin and keeps the queue topped
//! up after every removal.

use crate::error::{InventoryError, Side};
use crate::exchange::{self, ReservePolicy};
use crate::generator::PieceGenerator;
use crate::piece::Piece;
use crate::queue::PieceQueue;
use crate::reserve::PieceReserve;
use crate::settings::Settings;
use crossterm::style::Stylize;
use std::io::{self, BufRead, Write};

/// Menu commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play,
    Reserve,
    UseReserved,
    SwapSingle,
    SwapBlock,
    Exit,
}

impl Command {
    /// Parse a menu line
    pub fn parse(input: &str) -> Option<Command> {
        match input.trim() {
            "1" => Some(Command::Play),
            "2" => Some(Command::Reserve),
            "3" => Some(Command::UseReserved),
            "4" => Some(Command::SwapSingle),
            "5" => Some(Command::SwapBlock),
            "0" => Some(Command::Exit),
            _ => None,
        }
    }
}

/// Counters for the farewell summary
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionStats {
    pub played: u64,
    pub reserved: u64,
}

/// The interactive session: owns both containers, the generator and the
/// id counter
pub struct Shell {
    queue: PieceQueue,
    reserve: PieceReserve,
    generator: PieceGenerator,
    next_id: u64,
    block_len: usize,
    reserve_policy: ReservePolicy,
    stats: SessionStats,
}

impl Shell {
    /// Create a shell with the queue pre-filled to capacity
    pub fn new(settings: &Settings, generator: PieceGenerator) -> Self {
        let mut shell = Self {
            queue: PieceQueue::new(settings.inventory.queue_capacity),
            reserve: PieceReserve::new(settings.inventory.reserve_capacity),
            generator,
            next_id: 0,
            block_len: settings.exchange.block_len,
            reserve_policy: settings.exchange.reserve_policy,
            stats: SessionStats::default(),
        };
        shell.top_up();
        shell
    }

    /// Fill the queue back to capacity with freshly generated pieces.
    ///
    /// The shell owns the id counter; the generator never increments it.
    fn top_up(&mut self) {
        while !self.queue.is_full() {
            let piece = self.generator.next(self.next_id);
            self.next_id += 1;
            if let Err(err) = self.queue.enqueue(piece) {
                tracing::error!(%err, "refill rejected by a non-full queue");
                break;
            }
        }
    }

    /// Run the interactive loop until the user exits or stdin closes
    pub fn run(&mut self) -> io::Result<SessionStats> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        loop {
            self.print_state();
            self.print_menu();
            io::stdout().flush()?;

            let Some(line) = lines.next() else {
                break;
            };
            let line = line?;
            let Some(command) = Command::parse(&line) else {
                if !line.trim().is_empty() {
                    println!("\n❌ Unknown option: {}", line.trim());
                }
                continue;
            };
            tracing::debug!(?command, "dispatching");
            if command == Command::Exit {
                break;
            }
            self.dispatch(command);
        }

        Ok(self.stats)
    }

    fn dispatch(&mut self, command: Command) {
        match command {
            Command::Play => self.play(),
            Command::Reserve => self.bank(),
            Command::UseReserved => self.use_reserved(),
            Command::SwapSingle => self.swap_single(),
            Command::SwapBlock => self.swap_block(),
            Command::Exit => {}
        }
    }

    /// Play the front piece and refill the queue
    fn play(&mut self) {
        match self.queue.dequeue() {
            Ok(piece) => {
                println!("\n🎮 Played {}", styled(piece));
                tracing::info!(%piece, "played");
                self.stats.played += 1;
                self.top_up();
            }
            Err(err) => {
                tracing::warn!(%err, "play rejected");
                println!("\n⚠️ The queue is empty!");
            }
        }
    }

    /// Move the front piece into the reserve and refill the queue
    fn bank(&mut self) {
        if self.reserve.is_full() {
            // Reject before touching the queue
            tracing::warn!("reserve full, bank rejected");
            println!("\n⚠️ The reserve is full, nothing moved.");
            return;
        }
        let piece = match self.queue.peek_front() {
            Ok(piece) => piece,
            Err(err) => {
                tracing::warn!(%err, "bank rejected");
                println!("\n⚠️ The queue is empty!");
                return;
            }
        };
        if let Err(err) = self.reserve.push(piece) {
            tracing::error!(%err, "push rejected by a non-full reserve");
            return;
        }
        // Same piece that was just peeked
        let _ = self.queue.dequeue();
        println!("\n📦 Reserved {}", styled(piece));
        tracing::info!(%piece, "reserved");
        self.stats.reserved += 1;
        self.top_up();
    }

    /// Take the top piece back from the reserve
    fn use_reserved(&mut self) {
        match self.reserve.pop() {
            Ok(piece) => {
                println!("\n🧩 Used reserved {}", styled(piece));
                tracing::info!(%piece, "used from reserve");
            }
            Err(err) => {
                tracing::warn!(%err, "use rejected");
                println!("\n⚠️ No reserved piece available.");
            }
        }
    }

    fn swap_single(&mut self) {
        match exchange::swap_front_top(&mut self.queue, &mut self.reserve) {
            Ok(()) => {
                println!("\n🔄 Swapped the queue front with the reserve top.");
                tracing::info!("front/top swap done");
            }
            Err(err) => self.report_swap(err),
        }
    }

    fn swap_block(&mut self) {
        match exchange::swap_block(
            &mut self.queue,
            &mut self.reserve,
            self.block_len,
            self.reserve_policy,
        ) {
            Ok(()) => {
                println!(
                    "\n🔁 Swapped the first {} queued pieces with the reserve.",
                    self.block_len
                );
                tracing::info!(block_len = self.block_len, "block swap done");
            }
            Err(err) => self.report_swap(err),
        }
    }

    fn report_swap(&self, err: InventoryError) {
        tracing::warn!(%err, "swap rejected");
        match err {
            InventoryError::InsufficientPieces { side: Side::Queue } => {
                println!("\n⚠️ Not enough pieces in the queue to swap.");
            }
            InventoryError::InsufficientPieces { side: Side::Reserve } => {
                println!("\n⚠️ Not enough pieces in the reserve to swap.");
            }
            other => println!("\n⚠️ Swap failed: {}", other),
        }
    }

    fn print_state(&self) {
        println!("\n===== CURRENT STATE =====");
        print!("Next pieces:\t");
        self.print_row(self.queue.iter());
        print!("Reserve (top -> base): ");
        self.print_row(self.reserve.iter());
        println!("=========================");
    }

    fn print_row(&self, pieces: impl Iterator<Item = Piece>) {
        let mut any = false;
        for piece in pieces {
            print!("{} ", styled(piece));
            any = true;
        }
        if !any {
            print!("(empty)");
        }
        println!();
    }

    fn print_menu(&self) {
        println!("\nOptions:");
        println!("1 - Play the piece at the front of the queue");
        println!("2 - Send the front piece to the reserve");
        println!("3 - Use a reserved piece");
        println!("4 - Swap the queue front with the reserve top");
        println!(
            "5 - Swap the first {} queued pieces with the reserve",
            self.block_len
        );
        println!("0 - Exit");
        print!("Choice: ");
    }
}

/// Render a piece with its category color
fn styled(piece: Piece) -> impl std::fmt::Display {
    piece.to_string().with(piece.kind.color())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell() -> Shell {
        Shell::new(&Settings::default(), PieceGenerator::with_seed(9))
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse("1"), Some(Command::Play));
        assert_eq!(Command::parse(" 5 "), Some(Command::SwapBlock));
        assert_eq!(Command::parse("0"), Some(Command::Exit));
        assert_eq!(Command::parse("6"), None);
        assert_eq!(Command::parse("play"), None);
        assert_eq!(Command::parse(""), None);
    }

    #[test]
    fn test_queue_starts_full() {
        let shell = shell();
        assert!(shell.queue.is_full());
        assert!(shell.reserve.is_empty());
        assert_eq!(shell.next_id, 5);
    }

    #[test]
    fn test_play_keeps_queue_full() {
        let mut shell = shell();
        shell.dispatch(Command::Play);

        assert!(shell.queue.is_full());
        assert_eq!(shell.stats.played, 1);
        // The front moved on and a fresh piece arrived at the back
        assert_eq!(shell.queue.peek_front().unwrap().id, 1);
        assert_eq!(shell.queue.peek_at(4).unwrap().id, 5);
    }

    #[test]
    fn test_bank_moves_front_to_reserve_top() {
        let mut shell = shell();
        let front = shell.queue.peek_front().unwrap();

        shell.dispatch(Command::Reserve);

        assert_eq!(shell.reserve.peek_top().unwrap(), front);
        assert!(shell.queue.is_full());
        assert_eq!(shell.stats.reserved, 1);
    }

    #[test]
    fn test_bank_on_full_reserve_leaves_queue_alone() {
        let mut shell = shell();
        for _ in 0..3 {
            shell.dispatch(Command::Reserve);
        }
        assert!(shell.reserve.is_full());
        let front_before = shell.queue.peek_front().unwrap();
        let id_before = shell.next_id;

        shell.dispatch(Command::Reserve);

        assert_eq!(shell.queue.peek_front().unwrap(), front_before);
        assert_eq!(shell.next_id, id_before);
        assert_eq!(shell.stats.reserved, 3);
    }

    #[test]
    fn test_use_reserved_pops_in_lifo_order() {
        let mut shell = shell();
        shell.dispatch(Command::Reserve);
        shell.dispatch(Command::Reserve);
        let top = shell.reserve.peek_top().unwrap();

        shell.dispatch(Command::UseReserved);
        assert_eq!(shell.reserve.len(), 1);
        assert_ne!(shell.reserve.peek_top().unwrap(), top);
    }

    #[test]
    fn test_swap_commands_preserve_sizes() {
        let mut shell = shell();
        for _ in 0..3 {
            shell.dispatch(Command::Reserve);
        }
        shell.dispatch(Command::SwapSingle);
        assert!(shell.queue.is_full());
        assert!(shell.reserve.is_full());

        shell.dispatch(Command::SwapBlock);
        assert!(shell.queue.is_full());
        assert!(shell.reserve.is_full());
    }
}
