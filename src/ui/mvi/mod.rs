//! Model-View-Intent (MVI) primitives for the form UI.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything the view needs to draw the form
//! - **Intent**: a control event, a validation result or a submission outcome
//! - **Reducer**: the only place state changes

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
