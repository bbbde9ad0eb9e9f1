//! # UI Module
//!
//! Terminal screens for FitLazy and the router that switches between them.
//!
//! ## Components
//!
//! - [`App`] - router: the mounted [`Screen`](app::Screen), the collected
//!   profile, the active theme
//! - [`home`] / [`catalog`] - per-screen state
//! - [`input`] - key bindings
//! - [`mod@render`] - drawing functions
//!
//! ## Flow
//!
//! ```text
//! ┌────────────┐ completed ┌────────┐  [C]   ┌─────────┐
//! │ Onboarding │──────────▶│  Home  │───────▶│ Catalog │
//! └────────────┘           └────────┘◀───────└─────────┘
//!                                      [Esc]
//! ```
//!
//! ## Layout
//!
//! Every screen shares a three-row frame:
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │  FitLazy  ·  <screen title>                     │
//! ├─────────────────────────────────────────────────┤
//! │                                                 │
//! │                 screen body                     │
//! │                                                 │
//! ├─────────────────────────────────────────────────┤
//! │ key hints / status                              │
//! └─────────────────────────────────────────────────┘
//! ```

pub mod app;
pub mod catalog;
pub mod config;
pub mod home;
pub mod input;
pub mod render;
pub mod theme;

pub use app::App;
pub use render::render;
