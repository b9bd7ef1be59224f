//! Command handler layer.
//!
//! One command today: `generate.rs` runs the locate → extract → derive →
//! serialize pipeline. CLI inputs are resolved in `main`; handlers stay
//! thin and delegate business logic to `services/*`.

pub mod generate;
