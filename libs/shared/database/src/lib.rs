pub mod fixtures;

pub use fixtures::{Fixture, FixtureError, FixtureStore};
