//! # State Module
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │  Session                                     │
//! │  ┌──────────────┐  ┌──────────────────────┐  │
//! │  │ QuoteState   │  │ AppConfig            │  │
//! │  │ (the quote)  │  │ rate, VAT, out dir   │  │
//! │  └──────────────┘  └──────────────────────┘  │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! Single-threaded: the session is owned by the command loop and borrowed
//! mutably by one command at a time, so no locking is involved.

mod config;
mod session;

pub use config::AppConfig;
pub use session::Session;
