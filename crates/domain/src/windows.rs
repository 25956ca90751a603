//! Fixed query windows for the Hawaii dataset
//!
//! The dataset ends on 2017-08-23; the canned endpoints filter against
//! windows anchored to that date. Bounds are inclusive on both ends
//! and compared as strings, matching how the store filters TEXT date
//! columns.

use std::fmt;

/// An inclusive `[start, end]` date range, both bounds `YYYY-MM-DD`
///
/// ```
/// use domain::DateWindow;
///
/// let window = DateWindow::new("2016-08-23", "2017-08-23");
/// assert!(window.contains("2017-01-15"));
/// assert!(!window.contains("2017-08-24"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: &'static str,
    pub end: &'static str,
}

impl DateWindow {
    #[must_use]
    pub const fn new(start: &'static str, end: &'static str) -> Self {
        Self { start, end }
    }

    /// Whether `date` falls inside the window, by string comparison
    #[must_use]
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start && date <= self.end
    }
}

impl fmt::Display for DateWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Window for the precipitation endpoint.
///
/// Both bounds are the dataset's final date, so only 2017-08-23 itself
/// is covered. This reproduces the upstream service's filter verbatim;
/// the surrounding docs there claim a 12-month window, but the query
/// never did that, and changing it would change the API's output.
pub const PRECIPITATION_WINDOW: DateWindow = DateWindow::new("2017-08-23", "2017-08-23");

/// Most-active station, whose readings the tobs endpoint serves
pub const TOBS_STATION: &str = "USC00519281";

/// One-year window for the tobs endpoint
pub const TOBS_WINDOW: DateWindow = DateWindow::new("2016-08-23", "2017-08-23");
