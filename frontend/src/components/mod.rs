pub mod dialog_host;
pub mod full_width_toggle;
pub mod header;
pub mod legend;
pub mod semester_view;
pub mod theme_toggle;
pub mod timeline_view;

pub use dialog_host::DialogProvider;
pub use header::Header;
pub use legend::Legend;
pub use semester_view::SemesterView;
pub use timeline_view::TimelineView;
