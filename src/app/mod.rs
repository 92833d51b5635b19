mod session;
mod state;
mod ui;

use eframe::{egui, App};
pub use session::UploadSession;
use state::SelectionState;
use std::path::Path;
use tracing::info;

pub struct PdfUploader {
    state: SelectionState,
    session: UploadSession,
}

impl PdfUploader {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: UploadSession) -> Self {
        info!("Initializing upload window");
        Self {
            state: SelectionState::default(),
            session,
        }
    }

    pub fn select_path(&mut self, path: &Path) {
        self.state.select_path(path);
    }

    pub fn start_upload(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.session
            .trigger(&mut self.state, move || ctx.request_repaint());
    }
}

impl App for PdfUploader {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.session.drain(&mut self.state);
        self.render(ctx);
    }
}
