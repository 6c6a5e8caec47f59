pub mod closeness;
pub mod composer;
pub mod job;
pub mod reminder;
pub mod schedule;

pub use crate::domain::model::{EvaluatedGame, Game, RunReport};
pub use crate::domain::ports::{GameFetcher, Notifier, SecretStore};
pub use crate::utils::error::Result;
