// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod calendar;
mod error;
mod policy;
mod types;

#[cfg(test)]
mod tests;

pub use calendar::{
    DaysOf, ISO_DATE_FORMAT, MonthDay, SeasonalWindow, days_of, format_iso_date,
    inclusive_day_count, is_in_seasonal_window, parse_iso_date, range_intersects_seasonal_window,
    ranges_overlap,
};
pub use error::DomainError;
pub use policy::{
    DEFAULT_MAX_AGENTS_OFF_PER_DAY, DEFAULT_MAX_DAYS_PER_AGENT, DEFAULT_MAX_PICKS_PER_AGENT,
    DEFAULT_SEASONAL_CAP, Policy,
};
pub use types::{Agent, DateRange, Pick, Roster};
