use crate::services::logging::LogLevel;

/// Runtime configuration for the calendar frontend
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Base URL of the holiday/leave provider, without trailing slash
    pub api_base_url: String,
    pub theme_key: String,
    pub full_width_key: String,
    pub view_key: String,
    /// How often the timeline re-checks whether it needs a scrollbar
    pub scroll_check_interval_ms: u32,
    pub toast_timer_ms: u32,
    pub log_level: LogLevel,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: "/api".to_string(),
            theme_key: "theme".to_string(),
            full_width_key: "fullWidth".to_string(),
            view_key: "calendarView".to_string(),
            scroll_check_interval_ms: 500,
            toast_timer_ms: shared::dialog::DEFAULT_TOAST_TIMER_MS,
            log_level: LogLevel::Info,
        }
    }
}

impl AppConfig {
    /// Defaults, overridden by `data-api-base` and `data-log-level` on the
    /// `<html>` element when the host page sets them
    pub fn from_document() -> Self {
        let mut config = Self::default();

        let root = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element());

        if let Some(root) = root {
            if let Some(base) = root.get_attribute("data-api-base") {
                config = config.with_api_base_url(&base);
            }
            if let Some(level) = root.get_attribute("data-log-level") {
                if let Some(level) = LogLevel::parse(&level) {
                    config.log_level = level;
                }
            }
        }

        config
    }

    pub fn with_api_base_url(mut self, base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        if !trimmed.is_empty() {
            self.api_base_url = trimmed.to_string();
        }
        self
    }
}
