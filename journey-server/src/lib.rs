//! Journey cost estimator.
//!
//! Lets a user pick a region, a city, some landmarks and a way of getting
//! around, then prices the result: entrance fees plus a flat transport
//! fare, in rupees.

pub mod client;
pub mod config;
pub mod domain;
pub mod estimate;
pub mod pricing;
pub mod selection;
pub mod web;
