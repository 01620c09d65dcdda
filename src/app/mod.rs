//! Application layer: sessions, the launcher service and shell commands.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   Command    ┌──────────────────────────────┐
//! │ shell (main) │ ───────────▶ │ Launcher                     │
//! │              │ ◀─────────── │  ├─ SessionStore (registry)  │
//! └──────────────┘   lines      │  └─ Storage (user records)   │
//!        │                      └──────────────────────────────┘
//!        └── owns Option<Session>, passed into every call
//! ```

pub mod command;
pub mod launcher;
pub mod session;

pub use command::{execute, Command};
pub use launcher::{Launcher, LoginOutcome};
pub use session::Session;
