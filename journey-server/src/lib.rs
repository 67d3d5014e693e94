//! London journey planner server.
//!
//! A web application that answers: "how do I get from this station to
//! that one?" Station names are resolved and journeys planned through the
//! TfL Unified API; this crate only orchestrates and reshapes.

pub mod config;
pub mod domain;
pub mod explain;
pub mod logging;
pub mod planner;
pub mod tfl;
pub mod web;
