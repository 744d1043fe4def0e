//! # jantari-calendar
//!
//! Pure conversion between the Gregorian calendar and the Solar Hijri
//! (Shamsi) calendar used for academic-year and billing-month bookkeeping.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["NaiveDate (Gregorian)"] -->|"gregorian_to_shamsi()"| B["ShamsiDate"]
//!     B -->|"shamsi_to_gregorian()"| A
//!     C["(year, month)"] -->|"month_range()"| D["GregorianRange"]
//!     C -->|"days_in_month()"| E["31 / 30 / 29"]
//!     B -->|"period_range()"| D
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use jantari_calendar::{gregorian_to_shamsi, month_range, parse_gregorian};
//!
//! // Exact conversion
//! let nowruz = parse_gregorian("2025-03-21")?;
//! let shamsi = gregorian_to_shamsi(nowruz); // 1404-01-01
//!
//! // Billing-month date range (fixed boundary table)
//! let hamal = month_range(1404, 1)?; // 2025-03-21..2025-04-20
//! ```
//!
//! Two conversion modes coexist on purpose. The `convert` module is the
//! leap-cycle-aware algorithm and round-trips exactly; the `range` module
//! is the fixed Gregorian-cutoff table that billing and attendance queries
//! have always been filtered by. They disagree by a day around some leap
//! years — callers pick the mode, the crate does not paper over the
//! difference.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `date` | Shamsi date value type |
//! | `month` | Month table, names, and month lengths |
//! | `leap` | Arithmetic leap-year cycle |
//! | `convert` | Exact Gregorian <-> Shamsi conversion |
//! | `range` | Fixed boundary table month/year ranges |
//! | `period` | Trailing billing periods |
//! | `today` | Current Shamsi date/year (clock access) |
//! | `error` | Error types |

mod convert;
mod date;
mod error;
mod leap;
mod month;
mod period;
mod range;
mod today;

pub use convert::{gregorian_to_shamsi, parse_gregorian, shamsi_to_gregorian};
pub use date::ShamsiDate;
pub use error::CalendarError;
pub use leap::is_leap_year;
pub use month::{MonthInfo, SHAMSI_MONTHS, days_in_month, month_label, month_name};
pub use period::{Period, period_range};
pub use range::{GregorianRange, approximate_date, month_of, month_range, year_range};
pub use today::{current_shamsi_date, current_shamsi_year, shamsi_year_of};
