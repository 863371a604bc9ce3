//! Interactive job market dashboard.
//!
//! The [`data`] module holds the pure load → filter → aggregate → estimate
//! pipeline; [`app`], [`state`] and [`ui`] are the egui front end that reruns
//! it on every input change.

pub mod app;
pub mod color;
pub mod config;
pub mod data;
pub mod state;
pub mod ui;
