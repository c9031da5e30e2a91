use log::{debug, info};
use shared::{GridIndex, SelectionKind, SelectionPreview};

use crate::ui::state::calendar_state::{CalendarView, IgnoreReason, SelectionEvent, TapOutcome};

impl CalendarView {
    /// Handle a tap on any grid cell. Header taps are ignored.
    pub fn tap_index<F>(&mut self, index: GridIndex, should_select: F) -> TapOutcome
    where
        F: FnOnce(&SelectionPreview) -> bool,
    {
        match index {
            GridIndex::Header(_) => TapOutcome::Ignored {
                reason: IgnoreReason::HeaderCell,
            },
            GridIndex::Day(position) => self.tap(position, should_select),
        }
    }

    /// Handle a tap on the day cell at `position`.
    ///
    /// `should_select` sees what the tap would select before anything changes;
    /// returning `false` discards the tap and leaves the model untouched.
    pub fn tap<F>(&mut self, position: usize, should_select: F) -> TapOutcome
    where
        F: FnOnce(&SelectionPreview) -> bool,
    {
        if let Some(reason) = self.ignore_reason(position) {
            debug!("📅 Ignoring tap at {}: {:?}", position, reason);
            return TapOutcome::Ignored { reason };
        }

        let preview = self.model.preview(position);
        if !should_select(&preview) {
            info!("📅 Host declined selection of {} (to {:?})", preview.date, preview.to_date);
            return TapOutcome::Rejected { preview };
        }

        if self.model.tap_clears(position) {
            self.model.select_at(position);
            info!("📅 Cleared sequence starting {}", preview.date);
            return TapOutcome::Cleared {
                index: GridIndex::Day(position),
                date: preview.date,
            };
        }

        let selection = self.model.select_at(position);
        info!(
            "📅 Selected {} (to {:?}, {} day(s))",
            selection.date, selection.to_date, selection.length
        );
        TapOutcome::Selected {
            event: SelectionEvent {
                index: GridIndex::Day(position),
                selection,
            },
        }
    }

    fn ignore_reason(&self, position: usize) -> Option<IgnoreReason> {
        if self.config.hide_other_month && self.model.is_other_month(position) {
            return Some(IgnoreReason::HiddenOtherMonth);
        }
        if self.model.selection_kind() == SelectionKind::None {
            return Some(IgnoreReason::SelectionDisabled);
        }
        let single_or_multiple = matches!(
            self.model.selection_kind(),
            SelectionKind::Single | SelectionKind::Multiple
        );
        if single_or_multiple && self.config.disable_past_date_selection && self.model.is_past(position) {
            return Some(IgnoreReason::PastDate);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CalendarConfig;
    use chrono::NaiveDate;
    use shared::{SelectionMode, SequenceStyle, Style};

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn view(mode: SelectionMode) -> CalendarView {
        let config = CalendarConfig {
            selection_mode: mode,
            ..CalendarConfig::default()
        };
        CalendarView::new(config, march(1))
    }

    fn position(view: &CalendarView, date: NaiveDate) -> usize {
        view.model().position_of(date).unwrap()
    }

    #[test]
    fn test_single_tap_selects() {
        let mut view = view(SelectionMode::Single(Style::Circle));
        let outcome = view.tap(14, |_| true);
        assert_eq!(
            outcome,
            TapOutcome::Selected {
                event: SelectionEvent {
                    index: GridIndex::Day(14),
                    selection: SelectionPreview {
                        date: march(10),
                        to_date: None,
                        length: 1,
                    },
                },
            }
        );
        assert!(view.model().is_selected(14));
    }

    #[test]
    fn test_sequence_tap_reports_range_and_length() {
        let mut view = view(SelectionMode::Sequence(SequenceStyle::SemicircleEdge));
        let fifth = position(&view, march(5));
        let third = position(&view, march(3));
        view.tap(fifth, |_| true);

        let mut seen = None;
        let outcome = view.tap(third, |preview| {
            seen = Some(*preview);
            true
        });
        let expected = SelectionPreview {
            date: march(3),
            to_date: Some(march(5)),
            length: 3,
        };
        assert_eq!(seen, Some(expected));
        assert!(matches!(outcome, TapOutcome::Selected { event } if event.selection == expected));
    }

    #[test]
    fn test_rejecting_predicate_leaves_model_untouched() {
        let mut view = view(SelectionMode::Sequence(SequenceStyle::Line));
        view.tap(position(&view, march(5)), |_| true);
        let before = view.model().sequence_dates();

        let outcome = view.tap(position(&view, march(9)), |_| false);
        assert!(matches!(outcome, TapOutcome::Rejected { preview } if preview.length == 5));
        assert_eq!(view.model().sequence_dates(), before);
    }

    #[test]
    fn test_taps_ignored_in_none_mode() {
        let mut view = view(SelectionMode::None);
        assert_eq!(
            view.tap(10, |_| true),
            TapOutcome::Ignored {
                reason: IgnoreReason::SelectionDisabled
            }
        );
    }

    #[test]
    fn test_hidden_other_month_taps_ignored() {
        let config = CalendarConfig {
            hide_other_month: true,
            ..CalendarConfig::default()
        };
        let mut view = CalendarView::new(config, march(1));
        assert_eq!(
            view.tap(0, |_| true),
            TapOutcome::Ignored {
                reason: IgnoreReason::HiddenOtherMonth
            }
        );
        assert!(matches!(view.tap(5, |_| true), TapOutcome::Selected { .. }));
    }

    #[test]
    fn test_past_dates_rejected_when_disabled() {
        let config = CalendarConfig {
            disable_past_date_selection: true,
            ..CalendarConfig::default()
        };
        let mut view = CalendarView::new(config, march(10));
        assert_eq!(
            view.tap(position(&view, march(9)), |_| true),
            TapOutcome::Ignored {
                reason: IgnoreReason::PastDate
            }
        );
        assert!(matches!(
            view.tap(position(&view, march(10)), |_| true),
            TapOutcome::Selected { .. }
        ));
    }

    #[test]
    fn test_sequence_taps_reach_predicate_on_past_dates() {
        let config = CalendarConfig {
            selection_mode: SelectionMode::Sequence(SequenceStyle::Background),
            disable_past_date_selection: true,
            ..CalendarConfig::default()
        };
        let mut view = CalendarView::new(config, march(10));
        view.tap(position(&view, march(10)), |_| true);

        let mut asked = false;
        let outcome = view.tap(position(&view, march(5)), |_| {
            asked = true;
            true
        });
        assert!(asked);
        let expected = SelectionPreview {
            date: march(5),
            to_date: Some(march(10)),
            length: 6,
        };
        assert!(matches!(outcome, TapOutcome::Selected { event } if event.selection == expected));
        assert_eq!(view.model().selected_dates().len(), 6);
    }

    #[test]
    fn test_repicking_sequence_start_reports_clear() {
        let mut view = view(SelectionMode::Sequence(SequenceStyle::Circle));
        let fifth = position(&view, march(5));
        view.tap(fifth, |_| true);
        assert_eq!(
            view.tap(fifth, |_| true),
            TapOutcome::Cleared {
                index: GridIndex::Day(fifth),
                date: march(5),
            }
        );
        assert!(view.model().sequence_dates().is_empty());
        assert!(!view.model().is_selected(fifth));
    }

    #[test]
    fn test_header_taps_ignored() {
        let mut view = view(SelectionMode::Single(Style::Circle));
        assert_eq!(
            view.tap_index(GridIndex::Header(3), |_| true),
            TapOutcome::Ignored {
                reason: IgnoreReason::HeaderCell
            }
        );
        assert!(matches!(
            view.tap_index(GridIndex::day(2, 0), |_| true),
            TapOutcome::Selected { .. }
        ));
    }

    #[test]
    fn test_tap_outcome_serializes_to_json() {
        let mut view = view(SelectionMode::Single(Style::Circle));
        let outcome = view.tap(14, |_| true);
        let json = serde_json::to_value(outcome).unwrap();
        assert_eq!(json["outcome"], "selected");
        assert_eq!(json["event"]["date"], "2024-03-10");
        assert_eq!(json["event"]["length"], 1);
    }
}
