//! Headless controller and CLI support for the Ecosim simulation.

pub mod app;
