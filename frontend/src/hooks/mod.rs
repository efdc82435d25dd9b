pub mod use_dialogs;
pub mod use_full_width;
pub mod use_scrollbar_check;
pub mod use_theme;
pub mod use_year_data;

pub use use_dialogs::use_dialogs;
pub use use_full_width::use_full_width;
pub use use_scrollbar_check::use_scrollbar_check;
pub use use_theme::use_theme;
pub use use_year_data::use_year_data;
