//! Sequence ranges and inclusive date ranges used by the selection logic.

use chrono::{Duration, NaiveDate};
use shared::SequencePosition;

/// Endpoints of a sequence selection.
///
/// Either empty, open (start only) or closed (start and end, with `start <= end`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SequenceDates {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl SequenceDates {
    /// A range with only its start picked
    pub fn open(start: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// A complete range, normalized so start <= end
    pub fn closed(a: NaiveDate, b: NaiveDate) -> Self {
        let (start, end) = ordered(a, b);
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn start(&self) -> Option<NaiveDate> {
        self.start
    }

    pub fn end(&self) -> Option<NaiveDate> {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start.is_none()
    }

    pub fn is_open(&self) -> bool {
        self.start.is_some() && self.end.is_none()
    }

    pub fn is_closed(&self) -> bool {
        self.end.is_some()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            (Some(start), None) => start == date,
            _ => false,
        }
    }

    /// Whether any day of `[from, to]` is part of the sequence
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        let (from, to) = ordered(from, to);
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= to && from <= end,
            (Some(start), None) => from <= start && start <= to,
            _ => false,
        }
    }

    /// Where `date` sits in the range when drawn as one shape
    pub fn position(&self, date: NaiveDate) -> SequencePosition {
        match (self.start, self.end) {
            (Some(start), Some(_)) if date == start => SequencePosition::Left,
            (Some(_), Some(end)) if date == end => SequencePosition::Right,
            _ => SequencePosition::Middle,
        }
    }

    /// Number of days covered (inclusive), zero when empty
    pub fn length(&self) -> u32 {
        match (self.start, self.end) {
            (Some(start), Some(end)) => days_inclusive(start, end),
            (Some(_), None) => 1,
            _ => 0,
        }
    }

    /// Every selected date, in order
    pub fn dates(&self) -> Vec<NaiveDate> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => date_range(start, end).collect(),
            (Some(start), None) => vec![start],
            _ => Vec::new(),
        }
    }
}

fn ordered(a: NaiveDate, b: NaiveDate) -> (NaiveDate, NaiveDate) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Number of days from `a` to `b` counting both ends, in either order
pub fn days_inclusive(a: NaiveDate, b: NaiveDate) -> u32 {
    let (start, end) = ordered(a, b);
    u32::try_from((end - start).num_days() + 1).unwrap_or(u32::MAX)
}

/// Every date from `a` to `b` inclusive, ascending regardless of argument order
pub fn date_range(a: NaiveDate, b: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let (start, end) = ordered(a, b);
    (0..=(end - start).num_days()).map(move |i| start + Duration::days(i))
}
