//! Registers an installed CJK font as the wine system-link fallback for
//! common Western font families.

#[macro_use]
extern crate log;

#[macro_use]
pub mod localization;

pub mod app;
pub mod cli;
pub mod fonts;
pub mod linker;
pub mod registry;
