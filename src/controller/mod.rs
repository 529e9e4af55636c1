//! The game-state controller.
//!
//! `GameController` owns the session, the RNG, and the reversion timer.
//! It exposes the two player actions (`select_card`, `restart`), the two
//! ways of delivering time (`tick`, `fire_reversion`), and a read-only
//! snapshot.
//!
//! ```
//! use memory_match::controller::GameController;
//! use memory_match::core::GameStatus;
//!
//! let mut game = GameController::builder().seed(42).build().unwrap();
//! let first = game.session().cards[0].id;
//! game.select_card(first);
//!
//! let snapshot = game.snapshot();
//! assert_eq!(snapshot.selection.as_slice(), &[first]);
//! assert_eq!(snapshot.status, GameStatus::Playing);
//! ```

mod builder;
mod game;

pub use builder::GameControllerBuilder;
pub use game::{GameController, SelectOutcome};
