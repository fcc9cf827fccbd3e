//! Client library for the MyRadio station management API.
//!
//! # Layers
//!
//! * [`api`] - requests, responses and the requesters that fulfil them,
//!   including an in-memory mock for tests
//! * [`protocol`] - typed domain structures and the endpoints returning them
//! * [`session`] - the entry point, tying a requester to the endpoints
//!
//! Supporting modules: [`key`] finds API keys on disk, [`config`] holds the
//! server URL and user agent, [`util`] parses MyRadio's time formats, and
//! [`error`] defines the error type shared by all of them.
//!
//! # Example
//!
//! ```rust,no_run
//! use myradio::Session;
//!
//! # async fn print_teams() -> myradio::Result<()> {
//! let session = Session::from_key_file()?;
//! for team in session.get_current_teams().await? {
//!     println!("{}", team.name);
//! }
//! # Ok(())
//! # }
//! ```
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate log;

pub mod api;
pub mod config;
pub mod error;
pub mod key;
pub mod protocol;
pub mod session;
pub mod util;

pub use error::{Error, Result};
pub use session::Session;
