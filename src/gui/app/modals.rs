use crate::gui::{
    catalogue_modal::CatalogueModal,
    error_modal::ErrorModal,
    settings::SettingsModal,
};

pub struct Modals {
    pub settings: SettingsModal,
    pub catalogue: CatalogueModal,
    pub error: ErrorModal,
}

impl Default for Modals {
    fn default() -> Self {
        Self {
            settings: SettingsModal::new(),
            catalogue: CatalogueModal::new(),
            error: ErrorModal::new(),
        }
    }
}
