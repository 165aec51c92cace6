// scalargrad-core/src/nn/mod.rs
// Neural network building blocks composed from graph operations.

pub mod init;
pub mod layers;
pub mod losses;
pub mod module;

pub use init::UniformInit;
pub use layers::{Layer, Mlp, MlpOutput, Neuron};
pub use losses::{mean_squared_error, squared_error, sum_squared_error, Reduction};
pub use module::Module;
