use eframe::egui::{
    self,
    epaint::Shadow,
    style::{
        Selection,
        WidgetVisuals,
        Widgets,
    },
    Color32,
    RichText,
    Stroke,
    Visuals,
};

#[derive(Clone)]
pub struct Theme {
    dark: Palette,
    light: Palette,
}

impl Default for Theme {
    fn default() -> Self {
        Self::ceremony()
    }
}

impl Theme {
    pub fn ceremony() -> Self {
        Theme { dark: Palette::gown(), light: Palette::parchment() }
    }

    fn palette(&self, ctx: &egui::Context) -> &Palette {
        if ctx.style().visuals.dark_mode {
            &self.dark
        } else {
            &self.light
        }
    }

    pub fn heading(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).accent).strong()
    }

    pub fn caption(&self, ctx: &egui::Context, content: &str) -> RichText {
        RichText::new(content).color(self.palette(ctx).muted).small()
    }

    pub fn error(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).error
    }

    pub fn success(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).success
    }

    pub fn muted(&self, ctx: &egui::Context) -> Color32 {
        self.palette(ctx).muted
    }

    /// Fill for the tinted boxes behind IPA, respelling and guidance.
    pub fn panel(&self, ctx: &egui::Context, tint: Tint) -> Color32 {
        let palette = self.palette(ctx);
        let tint = match tint {
            Tint::Neutral => palette.surface,
            Tint::Blue => palette.blue,
            Tint::Green => palette.success,
            Tint::Purple => palette.accent,
        };
        blend_colors(palette.surface, tint, 0.12)
    }
}

#[derive(Clone, Copy)]
pub enum Tint {
    Neutral,
    Blue,
    Green,
    Purple,
}

#[derive(Clone)]
struct Palette {
    background: Color32,
    surface: Color32,
    raised: Color32,
    border: Color32,
    foreground: Color32,
    muted: Color32,
    accent: Color32,
    blue: Color32,
    success: Color32,
    warning: Color32,
    error: Color32,
}

impl Palette {
    fn gown() -> Self {
        Self {
            background: Color32::from_rgb(18, 20, 28),
            surface: Color32::from_rgb(28, 31, 42),
            raised: Color32::from_rgb(42, 46, 60),
            border: Color32::from_rgb(60, 64, 82),
            foreground: Color32::from_rgb(232, 232, 236),
            muted: Color32::from_rgb(150, 154, 170),
            accent: Color32::from_rgb(189, 147, 249),
            blue: Color32::from_rgb(97, 175, 239),
            success: Color32::from_rgb(86, 209, 123),
            warning: Color32::from_rgb(255, 184, 108),
            error: Color32::from_rgb(255, 110, 110),
        }
    }

    fn parchment() -> Self {
        Self {
            background: Color32::from_rgb(246, 246, 244),
            surface: Color32::from_rgb(255, 255, 255),
            raised: Color32::from_rgb(236, 236, 234),
            border: Color32::from_rgb(214, 214, 210),
            foreground: Color32::from_rgb(20, 20, 20),
            muted: Color32::from_rgb(110, 110, 118),
            accent: Color32::from_rgb(120, 80, 200),
            blue: Color32::from_rgb(40, 110, 200),
            success: Color32::from_rgb(40, 150, 80),
            warning: Color32::from_rgb(200, 120, 40),
            error: Color32::from_rgb(190, 40, 40),
        }
    }
}

pub fn set_theme(ctx: &egui::Context, theme: &Theme) {
    set_theme_variant(ctx, &theme.dark, true);
    set_theme_variant(ctx, &theme.light, false);
}

pub fn blend_colors(color_a: Color32, color_b: Color32, t: f32) -> Color32 {
    let blend_channel = |a: u8, b: u8| ((1.0 - t) * (a as f32) + t * (b as f32)).round() as u8;
    Color32::from_rgba_unmultiplied(
        blend_channel(color_a.r(), color_b.r()),
        blend_channel(color_a.g(), color_b.g()),
        blend_channel(color_a.b(), color_b.b()),
        blend_channel(color_a.a(), color_b.a()),
    )
}

fn widget(default: WidgetVisuals, fill: Color32, stroke: Color32, text: Color32) -> WidgetVisuals {
    WidgetVisuals {
        bg_fill: fill,
        weak_bg_fill: fill,
        bg_stroke: Stroke { color: stroke, ..default.bg_stroke },
        fg_stroke: Stroke { color: text, ..default.fg_stroke },
        ..default
    }
}

fn set_theme_variant(ctx: &egui::Context, palette: &Palette, is_dark: bool) {
    let (default, variant) = match is_dark {
        true => (Visuals::dark(), egui::Theme::Dark),
        false => (Visuals::light(), egui::Theme::Light),
    };
    let hover = blend_colors(palette.raised, palette.accent, 0.25);

    ctx.set_visuals_of(
        variant,
        Visuals {
            dark_mode: is_dark,
            widgets: Widgets {
                noninteractive: widget(
                    default.widgets.noninteractive,
                    palette.surface,
                    palette.border,
                    palette.foreground,
                ),
                inactive: widget(
                    default.widgets.inactive,
                    palette.raised,
                    palette.border,
                    palette.foreground,
                ),
                hovered: widget(default.widgets.hovered, hover, palette.accent, palette.foreground),
                active: widget(default.widgets.active, hover, palette.accent, palette.foreground),
                open: widget(default.widgets.open, palette.raised, palette.accent, palette.foreground),
            },
            selection: Selection {
                bg_fill: blend_colors(palette.surface, palette.accent, 0.35),
                stroke: Stroke { color: palette.foreground, ..default.selection.stroke },
            },
            hyperlink_color: palette.blue,
            faint_bg_color: palette.raised,
            extreme_bg_color: palette.background,
            code_bg_color: palette.raised,
            error_fg_color: palette.error,
            warn_fg_color: palette.warning,
            window_shadow: Shadow { color: palette.background, ..default.window_shadow },
            window_fill: palette.surface,
            window_stroke: Stroke { color: palette.border, ..default.window_stroke },
            panel_fill: palette.background,
            ..default
        },
    );
}
