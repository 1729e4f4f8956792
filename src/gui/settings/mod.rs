mod modal;

pub use modal::SettingsModal;
