//! Trip cost server.
//!
//! A web service that answers: "What will it cost my party to travel
//! between these two cities by bus or train, and does it fit my budget?"

pub mod budget;
pub mod config;
pub mod costs;
pub mod directions;
pub mod domain;
pub mod fares;
pub mod seed;
pub mod telemetry;
pub mod web;
