use super::PdfUploader;
use crate::upload::{FAILURE_MESSAGE, NO_FILE_MESSAGE, READ_FAILURE_MESSAGE};
use crate::utils::file_size::format_size;
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
const ERROR: Color32 = Color32::from_rgb(220, 50, 50);

impl PdfUploader {
    pub fn render(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(20.0);
                ui.vertical_centered(|ui| {
                    ui.heading("Upload de Arquivo");
                });

                ui.add_space(20.0);

                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        if ui.button("📁 Selecionar arquivo").clicked() {
                            if let Some(path) = FileDialog::new().pick_file() {
                                self.select_path(&path);
                            }
                        }
                        match self.state.selected_file() {
                            Some(file) => {
                                ui.label(format!("{} ({})", file.name, format_size(file.size())));
                            }
                            None => {
                                ui.label(
                                    RichText::new("Nenhum arquivo selecionado")
                                        .color(ui.visuals().text_color().gamma_multiply(0.7)),
                                );
                            }
                        }
                    });
                });

                ui.add_space(10.0);

                ui.vertical_centered(|ui| {
                    let button = egui::Button::new(RichText::new("📤 Enviar").color(Color32::WHITE))
                        .fill(ACCENT)
                        .min_size(egui::vec2(160.0, 36.0));
                    if ui.add(button).clicked() {
                        self.start_upload(ctx);
                    }
                });

                self.render_status(ui);
            });
        });
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        let message = self.state.status_message();
        if message.is_empty() {
            return;
        }

        ui.add_space(16.0);
        let is_error = [FAILURE_MESSAGE, NO_FILE_MESSAGE, READ_FAILURE_MESSAGE].contains(&message);
        ui.vertical_centered(|ui| {
            if is_error {
                ui.colored_label(ERROR, message);
            } else {
                ui.label(message);
            }
        });

        let files = self.state.produced_files();
        if !files.is_empty() {
            ui.add_space(8.0);
            egui::ScrollArea::vertical()
                .id_source("produced_files")
                .max_height(150.0)
                .show(ui, |ui| {
                    egui::Frame::none()
                        .fill(ui.style().visuals.extreme_bg_color)
                        .show(ui, |ui| {
                            ui.add_space(4.0);
                            for file in files {
                                ui.horizontal(|ui| {
                                    ui.label("📄");
                                    ui.monospace(file);
                                });
                            }
                            ui.add_space(4.0);
                        });
                });
        }
    }
}
