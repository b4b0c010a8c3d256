pub mod config;
pub mod control;
pub mod error;
pub mod logging;
pub mod materialize;
pub mod path_model;
pub mod pipeline;
pub mod scheduler;
pub mod selection;
pub mod tree;
