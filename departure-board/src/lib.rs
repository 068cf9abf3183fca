//! Next-departure board server.
//!
//! Shows the next few trains from a station in one direction, read from a
//! static JSON timetable, with markers for whether each one can be reached
//! on foot or by bike.

pub mod board;
pub mod config;
pub mod domain;
pub mod schedule;
pub mod web;
