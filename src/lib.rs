pub mod error;
pub mod models;
pub mod rules;
pub mod session;

pub use error::{Error, Result};
pub use models::markov::Predictor;
pub use models::model::Model;
pub use models::state::{OutcomeState, StateKey};
pub use rules::{judge, Move, Outcome};
