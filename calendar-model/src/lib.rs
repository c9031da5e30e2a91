//! Date model for a calendar grid widget.
//!
//! The model owns the displayed month and the selection state, and answers
//! per-cell questions for a 7 column x 6 row grid of days. It never draws
//! anything; a presentation layer queries it once per visible cell.
//!
//! The model is single-threaded by construction. It holds no locks, so
//! sharing one instance across threads needs external synchronization.

pub mod domain;

pub use domain::calendar::{default_week_labels, format_month, MonthGrid, FALLBACK_DATE_FORMAT};
pub use domain::date_model::DateModel;
pub use domain::selection::{date_range, days_inclusive, SequenceDates};
