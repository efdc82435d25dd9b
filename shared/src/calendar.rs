//! Year calendar model shared by the semester and timeline views.
//!
//! A `YearCalendar` holds one `MonthColumn` per month and one `DayCell` per
//! day of that month. Views only decide how to lay the cells out.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::dates::{self, date_key_for, days_in_month, parse_date_key};
use crate::{CalendarError, Holiday, LeaveEntry, LeaveType};

/// Longest month, i.e. the column count of a timeline row
pub const TIMELINE_COLUMNS: u32 = 31;

/// Color used for leaves whose type is not in the category list
const UNKNOWN_LEAVE_COLOR: &str = "#607d8b";

/// Leave decoration resolved for a single day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveMark {
    pub leave_type: String,
    pub label: String,
    pub color: String,
    pub half_day: bool,
    pub note: Option<String>,
}

impl LeaveMark {
    /// Days of absence this mark counts for
    pub fn weight(&self) -> f64 {
        if self.half_day {
            0.5
        } else {
            1.0
        }
    }
}

/// Date-keyed index of holidays and leaves for quick lookup while rendering.
/// Several leaves may share a date (two half days, for instance); all are kept
/// in the order the provider sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CalendarLookup {
    holidays: HashMap<String, String>,
    leaves: HashMap<String, Vec<LeaveMark>>,
}

impl CalendarLookup {
    pub fn new(holidays: &[Holiday], leaves: &[LeaveEntry], types: &[LeaveType]) -> Self {
        let holidays = holidays
            .iter()
            .map(|h| (normalize_key(&h.date), h.name.clone()))
            .collect();

        let mut by_date: HashMap<String, Vec<LeaveMark>> = HashMap::new();
        for entry in leaves {
            let mark = match types.iter().find(|t| t.id == entry.leave_type) {
                Some(leave_type) => LeaveMark {
                    leave_type: leave_type.id.clone(),
                    label: leave_type.label.clone(),
                    color: leave_type.color.clone(),
                    half_day: entry.half_day,
                    note: entry.note.clone(),
                },
                None => LeaveMark {
                    leave_type: entry.leave_type.clone(),
                    label: entry.leave_type.clone(),
                    color: UNKNOWN_LEAVE_COLOR.to_string(),
                    half_day: entry.half_day,
                    note: entry.note.clone(),
                },
            };
            by_date.entry(normalize_key(&entry.date)).or_default().push(mark);
        }

        Self {
            holidays,
            leaves: by_date,
        }
    }

    pub fn holiday(&self, key: &str) -> Option<&str> {
        self.holidays.get(key).map(String::as_str)
    }

    pub fn leaves(&self, key: &str) -> &[LeaveMark] {
        self.leaves.get(key).map(Vec::as_slice).unwrap_or_default()
    }
}

/// Providers sometimes send full timestamps; index by the date part only
fn normalize_key(raw: &str) -> String {
    let date_part = raw.split('T').next().unwrap_or(raw);
    match parse_date_key(date_part) {
        Ok(date) => date_key_for(date),
        Err(_) => date_part.to_string(),
    }
}

/// One rendered day
#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub key: String,
    pub day: u32,
    pub weekday: Weekday,
    pub is_weekend: bool,
    pub is_today: bool,
    pub holiday: Option<String>,
    pub leaves: Vec<LeaveMark>,
}

impl DayCell {
    /// Days of absence recorded on this date
    pub fn leave_weight(&self) -> f64 {
        self.leaves.iter().map(LeaveMark::weight).sum()
    }

    /// Labels of every leave on this date, joined for compact display
    pub fn leave_label(&self) -> Option<String> {
        if self.leaves.is_empty() {
            return None;
        }
        let labels: Vec<&str> = self.leaves.iter().map(|l| l.label.as_str()).collect();
        Some(labels.join(" / "))
    }

    /// Space-separated CSS classes for the cell
    pub fn css_class(&self) -> String {
        let mut classes = vec!["day-cell"];
        if self.is_weekend {
            classes.push("weekend");
        }
        if self.holiday.is_some() {
            classes.push("holiday");
        }
        if self.is_today {
            classes.push("today");
        }
        if !self.leaves.is_empty() {
            classes.push("leave");
            if self.leave_weight() < 1.0 {
                classes.push("half-day");
            }
        }
        classes.join(" ")
    }

    /// Inline style carrying the leave colors, if any. Two leaves on one day
    /// split the cell diagonally.
    pub fn style(&self) -> Option<String> {
        match self.leaves.as_slice() {
            [] => None,
            [leave] if leave.half_day => Some(format!(
                "background: linear-gradient(135deg, {} 50%, transparent 50%);",
                leave.color
            )),
            [leave] => Some(format!("background-color: {};", leave.color)),
            [first, second, ..] => Some(format!(
                "background: linear-gradient(135deg, {} 50%, {} 50%);",
                first.color, second.color
            )),
        }
    }

    /// Holiday and leave lines shown in the day detail dialog
    pub fn details(&self) -> String {
        let mut lines = Vec::new();
        if let Some(holiday) = &self.holiday {
            lines.push(format!("Holiday: {}", holiday));
        }
        for leave in &self.leaves {
            let portion = if leave.half_day { " (half day)" } else { "" };
            lines.push(format!("{}{}", leave.label, portion));
            if let Some(note) = &leave.note {
                lines.push(note.clone());
            }
        }
        if lines.is_empty() {
            let idle = if self.is_weekend { "Weekend" } else { "No leave recorded" };
            lines.push(idle.to_string());
        }
        lines.join("\n")
    }

    /// Hover text: long date followed by the details
    pub fn tooltip(&self) -> String {
        format!("{}\n{}", dates::format_date_long(self.date), self.details())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthColumn {
    pub month: u32,
    pub days: Vec<DayCell>,
}

impl MonthColumn {
    pub fn name(&self) -> &'static str {
        dates::month_name(self.month)
    }
}

/// Cell of the horizontal timeline; short months are padded to 31 columns
#[derive(Debug, Clone, PartialEq)]
pub enum TimelineCell {
    Day(DayCell),
    Padding,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineRow {
    pub month: u32,
    pub cells: Vec<TimelineCell>,
}

/// All months of one year, with holidays and leaves resolved
#[derive(Debug, Clone, PartialEq)]
pub struct YearCalendar {
    pub year: i32,
    pub months: Vec<MonthColumn>,
}

impl YearCalendar {
    pub fn build(
        year: i32,
        today: Option<NaiveDate>,
        lookup: &CalendarLookup,
    ) -> Result<Self, CalendarError> {
        let mut months = Vec::with_capacity(12);

        for month in 1..=12 {
            let count = days_in_month(year, month)?;
            let mut days = Vec::with_capacity(count as usize);

            for day in 1..=count {
                let date = NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or(CalendarError::InvalidDate { year, month, day })?;
                let key = date_key_for(date);

                days.push(DayCell {
                    date,
                    day,
                    weekday: date.weekday(),
                    is_weekend: dates::is_weekend(date),
                    is_today: today == Some(date),
                    holiday: lookup.holiday(&key).map(str::to_string),
                    leaves: lookup.leaves(&key).to_vec(),
                    key,
                });
            }

            months.push(MonthColumn { month, days });
        }

        Ok(Self { year, months })
    }

    /// January to June, then July to December
    pub fn semesters(&self) -> [&[MonthColumn]; 2] {
        let split = self.months.len().min(6);
        let (first, second) = self.months.split_at(split);
        [first, second]
    }

    pub fn timeline_rows(&self) -> Vec<TimelineRow> {
        self.months
            .iter()
            .map(|column| {
                let mut cells: Vec<TimelineCell> =
                    column.days.iter().cloned().map(TimelineCell::Day).collect();
                cells.resize(TIMELINE_COLUMNS as usize, TimelineCell::Padding);
                TimelineRow {
                    month: column.month,
                    cells,
                }
            })
            .collect()
    }

    pub fn day_count(&self) -> usize {
        self.months.iter().map(|m| m.days.len()).sum()
    }

    pub fn find_day(&self, key: &str) -> Option<&DayCell> {
        self.months
            .iter()
            .flat_map(|m| m.days.iter())
            .find(|cell| cell.key == key)
    }

    /// Days of leave per category, in the order of `types`. Leaves with
    /// unknown categories are appended after the known ones.
    pub fn leave_totals(&self, types: &[LeaveType]) -> Vec<(String, f64)> {
        let mut totals: Vec<(String, f64)> =
            types.iter().map(|t| (t.id.clone(), 0.0)).collect();

        for mark in self.months.iter().flat_map(|m| m.days.iter()).flat_map(|d| d.leaves.iter()) {
            match totals.iter_mut().find(|(id, _)| *id == mark.leave_type) {
                Some((_, total)) => *total += mark.weight(),
                None => totals.push((mark.leave_type.clone(), mark.weight())),
            }
        }

        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::default_leave_types;

    fn sample_lookup() -> CalendarLookup {
        let holidays = vec![
            Holiday { date: "2024-01-01".to_string(), name: "New Year's Day".to_string() },
            Holiday { date: "2024-07-14T00:00:00Z".to_string(), name: "Bastille Day".to_string() },
        ];
        let leaves = vec![
            LeaveEntry { date: "2024-02-29".to_string(), leave_type: "paid".to_string(), half_day: false, note: None },
            LeaveEntry { date: "2024-03-01".to_string(), leave_type: "paid".to_string(), half_day: true, note: None },
            LeaveEntry {
                date: "2024-05-02".to_string(),
                leave_type: "sick".to_string(),
                half_day: false,
                note: Some("Flu".to_string()),
            },
            LeaveEntry { date: "2024-06-03".to_string(), leave_type: "sabbatical".to_string(), half_day: false, note: None },
        ];
        CalendarLookup::new(&holidays, &leaves, &default_leave_types())
    }

    #[test]
    fn test_month_lengths_match_calendar() {
        let leap = YearCalendar::build(2024, None, &CalendarLookup::default()).unwrap();
        let lengths: Vec<usize> = leap.months.iter().map(|m| m.days.len()).collect();
        assert_eq!(lengths, vec![31, 29, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31]);
        assert_eq!(leap.day_count(), 366);

        let common = YearCalendar::build(2023, None, &CalendarLookup::default()).unwrap();
        assert_eq!(common.months[1].days.len(), 28);
        assert_eq!(common.day_count(), 365);
    }

    #[test]
    fn test_day_cells_are_consecutive() {
        let calendar = YearCalendar::build(2025, None, &CalendarLookup::default()).unwrap();
        let march = &calendar.months[2];
        assert_eq!(march.name(), "March");
        assert_eq!(march.days[0].key, "2025-03-01");
        assert_eq!(march.days[30].key, "2025-03-31");
        assert!(march.days.iter().enumerate().all(|(i, d)| d.day == i as u32 + 1));

        // 2025-03-01 is a Saturday
        assert_eq!(march.days[0].weekday, Weekday::Sat);
        assert!(march.days[0].is_weekend);
        assert!(!march.days[2].is_weekend);
    }

    #[test]
    fn test_lookup_decorates_cells() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 2);
        let calendar = YearCalendar::build(2024, today, &sample_lookup()).unwrap();

        let new_year = calendar.find_day("2024-01-01").unwrap();
        assert_eq!(new_year.holiday.as_deref(), Some("New Year's Day"));
        assert_eq!(new_year.css_class(), "day-cell holiday");

        // Timestamped holiday dates are indexed by their date part
        assert!(calendar.find_day("2024-07-14").unwrap().holiday.is_some());

        let half = calendar.find_day("2024-03-01").unwrap();
        assert_eq!(half.css_class(), "day-cell leave half-day");
        assert!(half.style().unwrap().contains("linear-gradient"));

        let sick = calendar.find_day("2024-05-02").unwrap();
        assert!(sick.is_today);
        assert_eq!(sick.css_class(), "day-cell today leave");
        assert_eq!(sick.style().unwrap(), "background-color: #f44336;");
        assert_eq!(sick.tooltip(), "Thursday, May 2, 2024\nSick leave\nFlu");

        let unknown = &calendar.find_day("2024-06-03").unwrap().leaves[0];
        assert_eq!(unknown.label, "sabbatical");
        assert_eq!(unknown.color, UNKNOWN_LEAVE_COLOR);

        let idle = calendar.find_day("2024-04-10").unwrap();
        assert_eq!(idle.style(), None);
        assert_eq!(idle.details(), "No leave recorded");
        assert_eq!(calendar.find_day("2024-04-13").unwrap().details(), "Weekend");
        assert_eq!(new_year.details(), "Holiday: New Year's Day");
    }

    #[test]
    fn test_semesters_split_year() {
        let calendar = YearCalendar::build(2025, None, &CalendarLookup::default()).unwrap();
        let [first, second] = calendar.semesters();
        assert_eq!(first.len(), 6);
        assert_eq!(second.len(), 6);
        assert_eq!(first[0].month, 1);
        assert_eq!(second[0].month, 7);
        assert_eq!(second[5].month, 12);
    }

    #[test]
    fn test_timeline_rows_are_padded() {
        let calendar = YearCalendar::build(2023, None, &CalendarLookup::default()).unwrap();
        let rows = calendar.timeline_rows();
        assert_eq!(rows.len(), 12);
        assert!(rows.iter().all(|r| r.cells.len() == TIMELINE_COLUMNS as usize));

        let february = &rows[1];
        let day_cells = february.cells.iter().filter(|c| matches!(c, TimelineCell::Day(_))).count();
        assert_eq!(day_cells, 28);
        assert_eq!(february.cells[28], TimelineCell::Padding);
        assert_eq!(february.cells[30], TimelineCell::Padding);
        assert!(matches!(rows[0].cells[30], TimelineCell::Day(_)));
    }

    #[test]
    fn test_leave_totals() {
        let calendar = YearCalendar::build(2024, None, &sample_lookup()).unwrap();
        let totals = calendar.leave_totals(&default_leave_types());

        assert_eq!(totals[0], ("paid".to_string(), 1.5));
        assert_eq!(totals[1], ("sick".to_string(), 1.0));
        assert_eq!(totals[2], ("unpaid".to_string(), 0.0));
        assert_eq!(totals.last().unwrap(), &("sabbatical".to_string(), 1.0));
        assert_eq!(totals.len(), 7);
    }

    #[test]
    fn test_two_half_days_on_one_date_are_both_kept() {
        let leaves = vec![
            LeaveEntry { date: "2024-03-04".to_string(), leave_type: "paid".to_string(), half_day: true, note: None },
            LeaveEntry {
                date: "2024-03-04T12:00:00Z".to_string(),
                leave_type: "sick".to_string(),
                half_day: true,
                note: Some("Dentist".to_string()),
            },
        ];
        let lookup = CalendarLookup::new(&[], &leaves, &default_leave_types());
        assert_eq!(lookup.leaves("2024-03-04").len(), 2);
        assert!(lookup.leaves("2024-03-05").is_empty());

        let calendar = YearCalendar::build(2024, None, &lookup).unwrap();
        let cell = calendar.find_day("2024-03-04").unwrap();
        assert_eq!(cell.leave_weight(), 1.0);
        assert_eq!(cell.css_class(), "day-cell leave");
        assert_eq!(
            cell.style().unwrap(),
            "background: linear-gradient(135deg, #4caf50 50%, #f44336 50%);"
        );
        assert_eq!(cell.leave_label().as_deref(), Some("Paid leave / Sick leave"));
        assert_eq!(cell.details(), "Paid leave (half day)\nSick leave (half day)\nDentist");

        let totals = calendar.leave_totals(&default_leave_types());
        assert_eq!(totals[0], ("paid".to_string(), 0.5));
        assert_eq!(totals[1], ("sick".to_string(), 0.5));
        let sum: f64 = totals.iter().map(|(_, days)| days).sum();
        assert_eq!(sum, 1.0);
    }

    #[test]
    fn test_unrepresentable_year_is_an_error() {
        assert!(YearCalendar::build(i32::MAX, None, &CalendarLookup::default()).is_err());
    }
}
