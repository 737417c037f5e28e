mod parameters;

pub use parameters::{ParameterStore, SharedRegistry, init_parameter_registry};
