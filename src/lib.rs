//! Session-local interaction state for the Huddle meeting client.
//!
//! Five independent state machines own the ephemeral interaction state of a
//! meeting view: breakout assignment ([`breakout`]), whiteboard undo history
//! ([`whiteboard`]), idle detection ([`activity`]), push-to-talk ([`ptt`]),
//! and keyboard shortcuts ([`shortcuts`]). The [`session`] module composes
//! them for a host UI; rendering and transport live outside this crate.

pub mod activity;
pub mod app;
pub mod breakout;
pub mod cli;
pub mod config;
pub mod global;
pub mod input;
pub mod participant;
pub mod ptt;
pub mod session;
pub mod shortcuts;
pub mod whiteboard;
