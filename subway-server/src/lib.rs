//! Subway station resource server.
//!
//! A web application exposing a small JSON API over subway station
//! records: create, list, look up, and delete.

pub mod config;
pub mod domain;
pub mod stations;
pub mod web;
