//! Command engine: the single entry point for a console shell.
//!
//! ## Flow
//!
//! ```text
//! input line --Command::parse--> Command --DeliveryEngine::execute--> Outcome
//!                                                                    |
//!                                               render::outcome <----+
//! ```
//!
//! The engine owns the catalog and the order queue and never performs I/O.
//! Rejected commands are logged at `warn` through `tracing` and returned to
//! the caller unchanged.
//!
//! ## Example
//!
//! ```
//! use foodie_express::engine::{render, Command, DeliveryEngine};
//!
//! let mut engine = DeliveryEngine::new();
//! let outcome = engine.execute(Command::parse("add Soda 1.50").unwrap()).unwrap();
//! assert_eq!(render::outcome(&outcome), "Food item \"Soda\" added successfully with ID 1!");
//! ```

pub mod command;
pub mod dispatch;
pub mod render;

pub use command::Command;
pub use dispatch::{DeliveryEngine, Outcome, PendingOrder};
