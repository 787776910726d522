//! API data models
//!
//! This module contains data structures for the tone analysis API.

pub mod tone;
