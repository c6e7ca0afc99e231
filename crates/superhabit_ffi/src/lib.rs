//! Flutter bridge for the SuperHabit core.

pub mod api;
