//! Metro proxy server.
//!
//! A thin HTTP service in front of the WMATA Rail API that reshapes station
//! lists, station hours, arrival predictions and line routes into the
//! simple JSON a client app wants.

pub mod config;
pub mod domain;
pub mod shape;
pub mod web;
pub mod wmata;
