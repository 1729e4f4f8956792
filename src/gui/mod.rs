pub mod app;
pub mod catalogue_modal;
pub mod error_banner;
pub mod error_modal;
pub mod message_overlay;
pub mod name_input;
pub mod results_panel;
pub mod settings;
pub mod theme;
pub mod top_bar;

pub use app::SaynameApp;
