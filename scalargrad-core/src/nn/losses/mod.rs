pub mod mse;

pub use mse::{mean_squared_error, squared_error, sum_squared_error, Reduction};
