//! Calculator form: raw text inputs and the state around the engine

mod input;
mod state;

pub use input::FormInput;
pub use state::CalculatorForm;
