//! Main SignSpeak application struct and eframe integration

use crate::collab::{Clipboard, Collaborators};
use crate::config::AppConfig;
use crate::error::Result;
use crate::scenario::{Scenario, ScenarioRunner};
use crate::state::AppState;
use crate::ui::render;
use crate::ui::theme::Theme;
use std::time::Instant;
use tracing::{debug, info};

/// Clipboard backed by the egui platform integration
pub struct EguiClipboard {
    ctx: egui::Context,
}

impl EguiClipboard {
    pub fn new(ctx: egui::Context) -> Self {
        Self { ctx }
    }
}

impl Clipboard for EguiClipboard {
    fn write_text(&mut self, text: &str) -> Result<()> {
        self.ctx.copy_text(text.to_string());
        Ok(())
    }
}

pub struct SignSpeakApp {
    initialized: bool,
    state: AppState,
    theme: Theme,
    /// Scenario runner, when started with `--scenario`
    runner: Option<ScenarioRunner>,
}

impl SignSpeakApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        config: AppConfig,
        scenario: Option<Scenario>,
    ) -> Self {
        let collaborators =
            Collaborators::headless().with_clipboard(EguiClipboard::new(cc.egui_ctx.clone()));
        let state = AppState::with_collaborators(config, collaborators);

        let theme = Theme::for_settings(&state.settings());
        theme.apply(&cc.egui_ctx);

        Self {
            initialized: false,
            state,
            theme,
            runner: scenario.map(ScenarioRunner::new),
        }
    }

    fn initialize(&mut self, now: Instant) {
        if self.initialized {
            return;
        }
        self.initialized = true;

        if let Some(runner) = self.runner.as_mut() {
            runner.start(now);
        }

        info!("SignSpeak UI initialized");
    }

    /// Re-apply the theme when the settings it depends on change
    fn sync_theme(&mut self, ctx: &egui::Context) {
        let wanted = Theme::for_settings(&self.state.settings());
        if wanted != self.theme {
            debug!(
                "[SETTINGS] Theme updated: high_contrast={}, body_size={}",
                wanted.high_contrast, wanted.body_size
            );
            wanted.apply(ctx);
            self.theme = wanted;
        }
    }

    fn process_scenario(&mut self, ctx: &egui::Context, now: Instant) {
        let Some(runner) = self.runner.as_mut() else {
            return;
        };

        if let Some(code) = runner.step(&mut self.state, now) {
            info!("{}", runner.summary());
            let final_code = match (runner.passed(), code) {
                (true, code) => code,
                (false, 0) => 1,
                (false, code) => code,
            };
            info!("[SCENARIO] Exiting with code {}", final_code);
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            std::process::exit(final_code);
        }

        // Keep frames coming so actions fire on time
        ctx.request_repaint();
    }
}

impl eframe::App for SignSpeakApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.initialize(now);

        self.state.tick(now);
        self.process_scenario(ctx, now);
        self.sync_theme(ctx);

        let commands = render(ctx, &self.state, &self.theme);
        if !commands.is_empty() {
            for command in commands {
                self.state.dispatch(command, now);
            }
            // Show any resulting toast on the next frame
            ctx.request_repaint();
        }

        if let Some(at) = self.state.next_wakeup() {
            ctx.request_repaint_after(at.saturating_duration_since(now));
        }
    }
}
