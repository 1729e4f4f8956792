mod modals;

use std::{
    fs,
    sync::Arc,
    time::Instant,
};

use eframe::egui;
use modals::Modals;
use rand::Rng;
use tracing::{
    debug,
    error,
    info,
    warn,
};

use super::{
    error_banner::error_banner,
    message_overlay::MessageOverlay,
    name_input::{
        InputAction,
        NameInputPanel,
    },
    results_panel::results_panel,
    theme::{
        set_theme,
        Theme,
    },
    top_bar::{
        TopBar,
        TopBarAction,
    },
};
use crate::{
    core::{
        config::{
            CatalogueView,
            HEALTH_CHECK_INTERVAL,
        },
        http::HttpTransport,
        input::NameInput,
        orchestrator::Completion,
        rotation::{
            ExampleCursor,
            RotationMode,
        },
        tasks::{
            RotationTimer,
            TaskManager,
            TaskResult,
        },
        view::{
            DisplayOptions,
            ResultView,
        },
        Catalogue,
        ExampleEntry,
        Orchestrator,
        SaynameError,
        Settings,
        UiState,
    },
    persistence::save_settings,
};

/// System fonts tried in order as fallbacks for scripts the bundled egui
/// fonts do not cover.
const FALLBACK_FONTS: &[(&str, &str)] = &[
    ("noto_sans_cjk", "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc"),
    ("noto_sans_cjk", "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc"),
    ("noto_sans_devanagari", "/usr/share/fonts/truetype/noto/NotoSansDevanagari-Regular.ttf"),
    ("noto_sans_bengali", "/usr/share/fonts/truetype/noto/NotoSansBengali-Regular.ttf"),
    ("noto_sans_arabic", "/usr/share/fonts/truetype/noto/NotoSansArabic-Regular.ttf"),
    ("noto_sans_thai", "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf"),
    ("ms_yahei", "C:\\Windows\\Fonts\\msyh.ttc"),
    ("nirmala", "C:\\Windows\\Fonts\\Nirmala.ttf"),
    ("arial_unicode", "/Library/Fonts/Arial Unicode.ttf"),
];

const ANALYSING_MESSAGE: &str = "Analysing name...";

pub struct SaynameApp {
    // Configuration
    pub settings: Settings,
    pub catalogue: Catalogue,

    // Analysis
    input: NameInput,
    orchestrator: Orchestrator,

    // Examples
    cursor: ExampleCursor,
    rotation: Option<RotationTimer>,

    // External Services
    service_healthy: Option<bool>,
    last_health_check: Option<Instant>,

    // UI State
    pub theme: Theme,
    pub message_overlay: MessageOverlay,
    modals: Modals,

    task_manager: TaskManager,
}

impl SaynameApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        catalogue: Catalogue,
    ) -> Result<Self, SaynameError> {
        let transport = HttpTransport::from_api_base(&settings.api_base)?;
        info!("Analysis endpoint: {}", transport.endpoints().analyse);

        let ctx = cc.egui_ctx.clone();
        let task_manager =
            TaskManager::new(Arc::new(transport), Arc::new(move || ctx.request_repaint()))?;

        let mut app = Self {
            settings,
            catalogue,

            input: NameInput::new(),
            orchestrator: Orchestrator::new(),

            cursor: ExampleCursor::default(),
            rotation: None,

            service_healthy: None,
            last_health_check: None,

            theme: Theme::ceremony(),
            message_overlay: MessageOverlay::new(),
            modals: Modals::default(),

            task_manager,
        };

        let len = suggestion_pool(&app.catalogue, app.settings.catalogue_view).len();
        if len > 0 {
            app.cursor = ExampleCursor::starting_at(rand::rng().random_range(0..len));
        }

        app.setup_fonts(cc);
        set_theme(&cc.egui_ctx, &app.theme);
        apply_dark_mode(&cc.egui_ctx, app.settings.dark_mode);
        app.restart_rotation();

        Ok(app)
    }

    fn setup_fonts(&self, cc: &eframe::CreationContext<'_>) {
        let mut fonts = egui::FontDefinitions::default();
        let mut loaded: Vec<&str> = Vec::new();

        for (name, path) in FALLBACK_FONTS {
            if loaded.contains(name) {
                continue;
            }
            let Ok(bytes) = fs::read(path) else {
                continue;
            };

            debug!("Loaded fallback font {} from {}", name, path);
            fonts.font_data.insert((*name).to_owned(), Arc::new(egui::FontData::from_owned(bytes)));
            for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                fonts.families.entry(family).or_default().push((*name).to_owned());
            }
            loaded.push(*name);
        }

        if loaded.is_empty() {
            warn!("No fallback fonts found; some scripts may not render");
        }

        cc.egui_ctx.set_fonts(fonts);
    }

    fn advance_suggestion(&mut self) {
        let len = suggestion_pool(&self.catalogue, self.settings.catalogue_view).len();
        self.cursor.advance(len);
    }

    fn restart_rotation(&mut self) {
        if self.rotation.take().is_some_and(|timer| timer.is_running()) {
            debug!("Stopped example rotation");
        }
        self.rotation =
            self.settings.rotation.period().map(|period| self.task_manager.start_rotation(period));
    }

    fn submit(&mut self) {
        if !self.input.can_submit(self.orchestrator.is_loading()) {
            return;
        }

        match self.orchestrator.begin(self.input.text()) {
            Ok((id, request)) => {
                let handle = self.task_manager.analyse(id, request);
                self.orchestrator.track(handle);
                self.message_overlay.set_message(ANALYSING_MESSAGE);
            }
            Err(e) => debug!("Submission rejected: {}", e),
        }
    }

    fn handle_task_result(&mut self, result: TaskResult) {
        debug!(task = result.task_type(), "Task result received");

        match result {
            TaskResult::Analysis { id, outcome } => {
                let completion = self.orchestrator.complete(id, outcome);
                if completion == Completion::Applied
                    && self.settings.rotation == RotationMode::PerAnalysis
                {
                    self.advance_suggestion();
                }
                if !self.orchestrator.is_loading() {
                    self.message_overlay.clear_message();
                }
            }
            TaskResult::ServiceHealth(healthy) => {
                if self.service_healthy != Some(healthy) {
                    info!("Analysis service {}", if healthy { "reachable" } else { "unreachable" });
                }
                self.service_healthy = Some(healthy);
            }
            TaskResult::RotateExample => self.advance_suggestion(),
        }
    }

    fn update_service_status(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let should_check = match self.last_health_check {
            None => true,
            Some(last_check) => now.duration_since(last_check) >= HEALTH_CHECK_INTERVAL,
        };

        if should_check {
            self.task_manager.check_health();
            self.last_health_check = Some(now);
        }

        ctx.request_repaint_after(HEALTH_CHECK_INTERVAL);
    }

    /// Keeps the persisted preference in step with the top bar theme switch.
    fn sync_dark_mode(&mut self, ctx: &egui::Context) {
        let dark_mode = ctx.style().visuals.dark_mode;
        if dark_mode != self.settings.dark_mode {
            self.settings.dark_mode = dark_mode;
            self.persist_settings();
        }
    }

    fn apply_settings(&mut self, ctx: &egui::Context, settings: Settings) {
        let transport = match HttpTransport::from_api_base(&settings.api_base) {
            Ok(transport) => transport,
            Err(e) => {
                error!("Rejected settings: {}", e);
                self.modals.error.show_error(
                    "Settings Error",
                    "The new settings could not be applied. Previous settings remain in effect.",
                    Some(e.to_string()),
                );
                return;
            }
        };

        info!("Analysis endpoint: {}", transport.endpoints().analyse);
        self.task_manager.set_transport(Arc::new(transport));

        if settings.catalogue_view != self.settings.catalogue_view {
            self.cursor = ExampleCursor::default();
        }
        self.settings = settings;
        self.restart_rotation();

        apply_dark_mode(ctx, self.settings.dark_mode);

        self.service_healthy = None;
        self.last_health_check = None;

        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Err(e) = save_settings(&self.settings) {
            error!("Failed to save settings: {}", e);
        }
    }

    fn show_main_panel(&mut self, ctx: &egui::Context) {
        let busy = self.orchestrator.is_loading();
        let options = DisplayOptions { show_confidence: self.settings.show_confidence };

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(16.0);
                    ui.label(self.theme.heading(ctx, "Name Pronunciation Analyser").size(28.0));
                    ui.label(
                        self.theme.caption(ctx, "Discover how names are pronounced across languages"),
                    );
                });
                ui.add_space(16.0);

                let suggestions = suggestion_pool(&self.catalogue, self.settings.catalogue_view);
                let suggestion = match self.settings.rotation {
                    RotationMode::Off => None,
                    _ => self.cursor.current(&suggestions).copied(),
                };

                let action =
                    NameInputPanel::show(ui, &self.theme, &mut self.input, busy, suggestion);

                match action {
                    Some(InputAction::Submit) => self.submit(),
                    Some(InputAction::Clear) => {
                        self.orchestrator.clear();
                        self.input.set_text("");
                    }
                    None => {}
                }

                ui.add_space(16.0);

                if let UiState::Failed(message) = self.orchestrator.state() {
                    error_banner(ui, &self.theme, message);
                    ui.add_space(16.0);
                }

                if let Some(view) =
                    ResultView::for_state(self.orchestrator.state(), &self.catalogue, options)
                {
                    results_panel(ui, &self.theme, &view);
                }
            });
        });
    }
}

/// Entries the "Try:" suggestion cycles through.
fn suggestion_pool(catalogue: &Catalogue, view: CatalogueView) -> Vec<&ExampleEntry> {
    match view {
        CatalogueView::Full => catalogue.entries().iter().collect(),
        CatalogueView::Featured => catalogue.featured().collect(),
    }
}

fn apply_dark_mode(ctx: &egui::Context, dark_mode: bool) {
    ctx.set_theme(if dark_mode { egui::Theme::Dark } else { egui::Theme::Light });
}

impl eframe::App for SaynameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let task_results = self.task_manager.poll_results();

        for result in task_results {
            self.handle_task_result(result);
        }

        self.update_service_status(ctx);

        if let Some(action) = TopBar::show(ctx, &self.theme, self.service_healthy) {
            match action {
                TopBarAction::OpenSettings => {
                    self.modals.settings.open_settings(self.settings.clone());
                }
                TopBarAction::OpenCatalogue => {
                    self.modals.catalogue.open_modal(self.settings.catalogue_view);
                }
                TopBarAction::CheckService => {
                    self.last_health_check = None;
                }
            }
        }

        self.sync_dark_mode(ctx);
        self.show_main_panel(ctx);
        self.message_overlay.show(ctx, &self.theme);

        let busy = self.orchestrator.is_loading();
        if let Some(name) = self.modals.catalogue.show(ctx, &self.theme, &self.catalogue, busy) {
            self.input.pick_example(&name);
        }

        if let Some(settings) = self.modals.settings.show(ctx) {
            self.apply_settings(ctx, settings);
        }

        self.modals.error.show(ctx, &self.theme);
    }
}
