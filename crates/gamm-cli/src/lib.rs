//! Command line frontend that prints the pool messages an account would send.

pub mod cli;
mod pool_file;
mod run;

pub use {
    pool_file::PoolFile,
    run::{run, start},
};
