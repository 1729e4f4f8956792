use eframe::egui;
use sayname::{
    gui::SaynameApp,
    persistence::{
        load_catalogue,
        load_settings,
    },
};
use tracing::info;
use tracing_subscriber::{
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

fn main() -> eframe::Result {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "sayname=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting sayname {}", env!("CARGO_PKG_VERSION"));

    let settings = load_settings();
    let catalogue = load_catalogue();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([760.0, 900.0])
            .with_min_inner_size([420.0, 520.0])
            .with_title("Name Pronunciation Analyser"),
        ..Default::default()
    };

    eframe::run_native(
        "Name Pronunciation Analyser",
        options,
        Box::new(|cc| Ok(Box::new(SaynameApp::new(cc, settings, catalogue)?))),
    )
}
