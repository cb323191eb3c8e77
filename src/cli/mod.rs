//! Terminal front end for the converter

pub mod convert;
pub mod currencies;
pub mod rates;
pub mod setup;
pub mod ui;
