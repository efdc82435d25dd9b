use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub mod calendar;
pub mod dates;
pub mod dialog;
mod error;

pub use calendar::{CalendarLookup, DayCell, LeaveMark, MonthColumn, TimelineCell, TimelineRow, YearCalendar};
pub use dialog::{DialogIcon, DialogKind, DialogOptions, DialogPalette};
pub use error::CalendarError;

/// Light/dark display mode, persisted across sessions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Value written to the `data-theme` attribute and to local storage
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Label for the toggle button; names the mode a click switches to
    pub fn toggle_label(self) -> &'static str {
        match self {
            Theme::Light => "🌙 Dark mode",
            Theme::Dark => "☀️ Light mode",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CalendarError::UnknownTheme(other.to_string())),
        }
    }
}

/// Width of the main content container. Persisted as a boolean ("full width on?")
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutWidth {
    #[default]
    Boxed,
    Full,
}

impl LayoutWidth {
    pub fn is_full(self) -> bool {
        self == LayoutWidth::Full
    }

    pub fn toggled(self) -> Self {
        match self {
            LayoutWidth::Boxed => LayoutWidth::Full,
            LayoutWidth::Full => LayoutWidth::Boxed,
        }
    }

    /// CSS class of the main container
    pub fn container_class(self) -> &'static str {
        match self {
            LayoutWidth::Boxed => "container",
            LayoutWidth::Full => "container-fluid",
        }
    }

    pub fn toggle_label(self) -> &'static str {
        match self {
            LayoutWidth::Boxed => "⇔ Full width",
            LayoutWidth::Full => "⇥ Fixed width",
        }
    }
}

impl From<bool> for LayoutWidth {
    fn from(full: bool) -> Self {
        if full {
            LayoutWidth::Full
        } else {
            LayoutWidth::Boxed
        }
    }
}

impl From<LayoutWidth> for bool {
    fn from(width: LayoutWidth) -> Self {
        width.is_full()
    }
}

/// Which year rendering is active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Semester,
    Timeline,
}

impl CalendarView {
    pub fn all() -> [CalendarView; 2] {
        [CalendarView::Semester, CalendarView::Timeline]
    }

    pub fn label(self) -> &'static str {
        match self {
            CalendarView::Semester => "Semester",
            CalendarView::Timeline => "Timeline",
        }
    }
}

/// Sub-pixel rounding slack when comparing rendered widths
pub const SCROLL_TOLERANCE_PX: f64 = 1.0;

/// Rendered widths of a scroll container and of its content
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollMetrics {
    pub content_width: f64,
    pub container_width: f64,
}

impl ScrollMetrics {
    pub fn new(content_width: f64, container_width: f64) -> Self {
        Self { content_width, container_width }
    }

    /// Whether the content is wider than its container, i.e. a horizontal
    /// scrollbar is showing. A container that has not been laid out yet
    /// (zero width) never overflows.
    pub fn overflows(&self) -> bool {
        if self.container_width <= 0.0 {
            return false;
        }
        self.content_width - self.container_width > SCROLL_TOLERANCE_PX
    }
}

/// A labeled, colored category of absence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveType {
    pub id: String,
    pub label: String,
    /// CSS color used for cells and the legend
    pub color: String,
}

impl LeaveType {
    pub fn new(id: &str, label: &str, color: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            color: color.to_string(),
        }
    }
}

/// Default category list used when the provider does not send its own
pub fn default_leave_types() -> Vec<LeaveType> {
    vec![
        LeaveType::new("paid", "Paid leave", "#4caf50"),
        LeaveType::new("sick", "Sick leave", "#f44336"),
        LeaveType::new("unpaid", "Unpaid leave", "#9e9e9e"),
        LeaveType::new("family", "Family event", "#ff9800"),
        LeaveType::new("training", "Training", "#3f51b5"),
        LeaveType::new("remote", "Remote work", "#00bcd4"),
    ]
}

/// One day (or half day) of absence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveEntry {
    /// Date key in YYYY-MM-DD format
    pub date: String,
    /// Id of a `LeaveType`
    pub leave_type: String,
    #[serde(default)]
    pub half_day: bool,
    #[serde(default)]
    pub note: Option<String>,
}

/// Public holiday supplied by the holiday-data provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    /// Date key in YYYY-MM-DD format
    pub date: String,
    pub name: String,
}

/// Response of `GET /calendar/{year}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearDataResponse {
    pub year: i32,
    #[serde(default)]
    pub holidays: Vec<Holiday>,
    #[serde(default)]
    pub leaves: Vec<LeaveEntry>,
    /// Provider-specific categories; the default list is used when empty
    #[serde(default)]
    pub leave_types: Vec<LeaveType>,
}

impl YearDataResponse {
    /// Empty data for a year, used when the provider is unreachable
    pub fn empty(year: i32) -> Self {
        Self {
            year,
            holidays: Vec::new(),
            leaves: Vec::new(),
            leave_types: Vec::new(),
        }
    }

    pub fn effective_leave_types(&self) -> Vec<LeaveType> {
        if self.leave_types.is_empty() {
            default_leave_types()
        } else {
            self.leave_types.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_toggle_and_labels() {
        assert_eq!(Theme::default(), Theme::Light);
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.toggle_label(), "🌙 Dark mode");
        assert_eq!(Theme::Dark.toggle_label(), "☀️ Light mode");
    }

    #[test]
    fn test_theme_parsing_and_serde() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!(" Light ".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!(
            "sepia".parse::<Theme>(),
            Err(CalendarError::UnknownTheme("sepia".to_string()))
        );

        assert_eq!(serde_json::to_string(&Theme::Dark).unwrap(), "\"dark\"");
        let parsed: Theme = serde_json::from_str("\"light\"").unwrap();
        assert_eq!(parsed, Theme::Light);
    }

    #[test]
    fn test_layout_width() {
        assert_eq!(LayoutWidth::from(false), LayoutWidth::Boxed);
        assert_eq!(LayoutWidth::from(true), LayoutWidth::Full);
        assert_eq!(LayoutWidth::Boxed.container_class(), "container");
        assert_eq!(LayoutWidth::Full.container_class(), "container-fluid");
        assert!(bool::from(LayoutWidth::Boxed.toggled()));
        assert_eq!(LayoutWidth::Full.toggle_label(), "⇥ Fixed width");
    }

    #[test]
    fn test_calendar_view_serialization() {
        let stored = serde_json::to_string(&CalendarView::Timeline).unwrap();
        assert_eq!(stored, "\"timeline\"");
        assert_eq!(serde_json::from_str::<CalendarView>("\"semester\"").unwrap(), CalendarView::Semester);
        assert!(serde_json::from_str::<CalendarView>("\"month\"").is_err());
        assert_eq!(CalendarView::default(), CalendarView::Semester);
    }

    #[test]
    fn test_scroll_metrics() {
        assert!(ScrollMetrics::new(1200.0, 800.0).overflows());
        assert!(!ScrollMetrics::new(800.0, 800.0).overflows());

        // Sub-pixel differences are rounding noise
        assert!(!ScrollMetrics::new(800.6, 800.0).overflows());

        // Not laid out yet
        assert!(!ScrollMetrics::new(500.0, 0.0).overflows());
    }

    #[test]
    fn test_default_leave_types() {
        let types = default_leave_types();
        assert_eq!(types.len(), 6);
        assert_eq!(types[0].id, "paid");
        assert_eq!(types[1].label, "Sick leave");
        assert!(types.iter().all(|t| t.color.starts_with('#')));
    }

    #[test]
    fn test_year_data_defaults() {
        let data: YearDataResponse = serde_json::from_str(r#"{"year": 2025}"#).unwrap();
        assert_eq!(data, YearDataResponse::empty(2025));
        assert_eq!(data.effective_leave_types(), default_leave_types());

        let with_leave: YearDataResponse = serde_json::from_str(
            r#"{"year": 2025, "leaves": [{"date": "2025-03-03", "leave_type": "paid"}]}"#,
        )
        .unwrap();
        assert!(!with_leave.leaves[0].half_day);
        assert_eq!(with_leave.leaves[0].note, None);
    }
}
