//! Campus: a terminal LMS dashboard.
//!
//! Screens for courses, students, analytics and a course player, all driven
//! by the synchronous filtering engine in [`listing`].

pub mod app;
pub mod config;
pub mod core;
pub mod data;
pub mod domain;
pub mod input;
pub mod listing;
pub mod logging;
pub mod modules;
pub mod ui;
