//! Model-View-Intent primitives for editing surfaces.
//!
//! ```text
//! host event ──→ Intent ──→ Reducer ──→ State ──→ form view
//!      ↑                                            │
//!      └────────────────────────────────────────────┘
//! ```
//!
//! Reducers own every state transition. Side effects (handing a record
//! to an updater, closing the surface) stay outside them.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
