//! Integration test modules

mod bundled_catalog;
mod config_flow;
mod selection_flow;
