pub mod action;
pub mod color;
pub mod error;
pub mod mirror;
pub mod overlay;
pub mod press;
pub mod registry;
pub mod score;
pub mod settings;
// cmd is a binary module (declared in main.rs); the library stays
// host-agnostic so simulators and real controllers share it.
