//! Desktop window built with egui/eframe.
//!
//! The window renders a [`TranslatorForm`] and forwards clicks to it. Translate
//! requests run on the tokio runtime; the answer comes back over a channel and
//! is applied on the UI thread in the next frame.

use crate::config::{Config, Theme};
use crate::form::{TranslationJob, TranslatorForm};
use crate::i18n::LanguageMap;
use crate::translation::TranslationClient;
use anyhow::{anyhow, Result};
use eframe::egui;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use tokio::runtime::Handle;
use tracing::{debug, info};

pub const WINDOW_TITLE: &str = "Language Translator";

const TEXT_BOX_ROWS: usize = 10;
const TEXT_BOX_WIDTH: f32 = 380.0;
const COMBO_WIDTH: f32 = 220.0;

/// Open the window and block until it is closed
pub fn run(config: &Config, form: TranslatorForm, runtime: Handle) -> eframe::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([860.0, 440.0])
            .with_min_inner_size([600.0, 360.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    let theme = config.theme;
    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(TranslatorApp::new(cc, form, runtime, theme)))),
    )
}

/// Run `job` on the runtime and hand back a receiver for its result.
///
/// `on_done` fires after the result has been sent, from the worker task.
pub fn spawn_translation<F>(
    runtime: &Handle,
    client: Arc<dyn TranslationClient>,
    job: TranslationJob,
    on_done: F,
) -> Receiver<Result<String>>
where
    F: FnOnce() + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    runtime.spawn(async move {
        let result = client.translate(&job.text, &job.source, &job.target).await;
        // Receiver is gone only when the window closed mid-request
        let _ = tx.send(result);
        on_done();
    });

    rx
}

pub struct TranslatorApp {
    form: TranslatorForm,
    runtime: Handle,
    pending: Option<Receiver<Result<String>>>,
}

impl TranslatorApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        form: TranslatorForm,
        runtime: Handle,
        theme: Theme,
    ) -> Self {
        cc.egui_ctx.set_visuals(match theme {
            Theme::Light => egui::Visuals::light(),
            Theme::Dark => egui::Visuals::dark(),
        });

        Self {
            form,
            runtime,
            pending: None,
        }
    }

    fn dispatch_translation(&mut self, ctx: &egui::Context) {
        // Invalid selections already queued a dialog
        let Ok(job) = self.form.begin_translation() else {
            return;
        };

        info!("Translating from {} to {}", job.source, job.target);

        let ctx = ctx.clone();
        self.pending = Some(spawn_translation(
            &self.runtime,
            self.form.client(),
            job,
            move || ctx.request_repaint(),
        ));
    }

    fn poll_translation(&mut self) {
        let outcome = match self.pending.as_ref().map(|rx| rx.try_recv()) {
            None | Some(Err(TryRecvError::Empty)) => return,
            Some(Ok(result)) => result,
            Some(Err(TryRecvError::Disconnected)) => {
                Err(anyhow!("Translation task ended without a result"))
            }
        };

        self.pending = None;
        if self.form.finish_translation(outcome).is_ok() {
            debug!("Translation applied to output");
        }
    }

    fn show_form(&mut self, ui: &mut egui::Ui) -> bool {
        let mut translate_clicked = false;

        egui::Grid::new("translator_form")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Input Text:");
                ui.label("Translated Text:");
                ui.end_row();

                ui.add(
                    egui::TextEdit::multiline(self.form.input_mut())
                        .desired_rows(TEXT_BOX_ROWS)
                        .desired_width(TEXT_BOX_WIDTH),
                );
                let mut output = self.form.output();
                ui.add(
                    egui::TextEdit::multiline(&mut output)
                        .desired_rows(TEXT_BOX_ROWS)
                        .desired_width(TEXT_BOX_WIDTH),
                );
                ui.end_row();

                ui.label("Source Language:");
                ui.label("Destination Language:");
                ui.end_row();

                let (languages, source, target) = self.form.selections_mut();
                language_combo(ui, "source_language", languages, source);
                language_combo(ui, "destination_language", languages, target);
                ui.end_row();
            });

        ui.add_space(20.0);

        ui.horizontal(|ui| {
            let busy = self.form.is_busy();

            if ui
                .add_enabled(!busy, egui::Button::new("Translate"))
                .clicked()
            {
                translate_clicked = true;
            }
            if ui
                .add_enabled(!busy, egui::Button::new("Swap"))
                .clicked()
            {
                self.form.swap_languages();
            }
            if busy {
                ui.spinner();
            }
        });

        translate_clicked
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let mut dismissed = false;

        if let Some(dialog) = self.form.dialog() {
            egui::Window::new(dialog.title.as_str())
                .id(egui::Id::new("error_dialog"))
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(dialog.message.as_str());
                    ui.separator();
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
        }

        if dismissed {
            self.form.dismiss_dialog();
        }
    }
}

fn language_combo(
    ui: &mut egui::Ui,
    id: &str,
    languages: &LanguageMap,
    selected: &mut Option<String>,
) {
    egui::ComboBox::from_id_salt(id)
        .width(COMBO_WIDTH)
        .selected_text(selected.as_deref().unwrap_or(""))
        .show_ui(ui, |ui| {
            for name in languages.names() {
                ui.selectable_value(selected, Some(name.to_string()), name);
            }
        });
}

impl eframe::App for TranslatorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_translation();

        let blocked = self.form.dialog().is_some();
        let mut translate_clicked = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                translate_clicked = self.show_form(ui);
            });
        });

        if translate_clicked {
            self.dispatch_translation(ctx);
        }

        self.show_dialog(ctx);
    }
}
