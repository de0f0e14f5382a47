// calculator-api - Stateless HTTP calculator, greeting and echo service
// Author: kelexine (https://github.com/kelexine)

pub mod calculator;
pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod server;
pub mod utils;
