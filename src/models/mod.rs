//! This module contains models that predict the opponent's next throw.

pub mod markov;
pub mod model;
pub mod state;
