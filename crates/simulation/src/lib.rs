//! Simulation driver for the travel-problem simulator.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Session                           │
//! │                                                          │
//! │  display refresh ──► FrameClock ──► dt (≤ max_delta)     │
//! │                                        │                 │
//! │                                        ▼                 │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │  SimulationRunner::advance(dt)                     │  │
//! │  │    motion::advance × 2 → EventDetector → history   │  │
//! │  └────────────────────────┬───────────────────────────┘  │
//! │                           │                              │
//! │                           ▼                              │
//! │            Frame (read-only) ──► Renderer                │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! [`SimulationRunner`] is usable on its own: tests drive it by calling
//! `advance` with synthetic deltas, independent of any display timing.

mod clock;
mod runner;
mod session;
mod view;

pub use clock::{ClockConfig, FrameClock};
pub use runner::SimulationRunner;
pub use session::Session;
pub use view::{ChartView, ChartWindow, Frame, NullRenderer, Renderer};
