//! Trip planner server.
//!
//! A web application that answers: "I have these dates and these
//! destinations in mind, what should I see each day?"
//!
//! The scheduling engine lives in [`planner`]; it reads places and reviews
//! from a [`catalog`] snapshot and is exposed over HTTP by [`web`].

pub mod catalog;
pub mod config;
pub mod domain;
pub mod planner;
pub mod web;
