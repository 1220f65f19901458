//! Q-ary RA code definitions.
//!
//! This module contains the tables of specific Q-ary RA codes.

pub mod qra12_63_64;
