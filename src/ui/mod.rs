//! egui rendering.  Everything here reads [`crate::state::AppState`] and
//! calls back into it when a control changes; no computation happens here.

pub mod charts;
pub mod format;
pub mod panels;
