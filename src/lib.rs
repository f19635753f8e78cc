pub mod a_funcs;
pub mod config;
pub mod graph;
pub mod initializer;
pub mod layout;
pub mod scene;
pub mod selection;
pub mod session;
