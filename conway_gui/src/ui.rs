// ui.rs - Renders the board and forwards clicks and menu buttons to the game

use conway::{GRID_COLS, GRID_ROWS, GameBoard, LifeGame, PATTERNS};
use eframe::egui;
use egui::{Color32, Rect, Stroke, Vec2};
use log::{debug, warn};
use tokio::runtime::Handle;

pub const WINDOW_SIZE: [f32; 2] = [560.0, 680.0];

const BOX_SIZE: f32 = 24.0;
const SPACING: f32 = 1.0;
const LIVE_COLOR: Color32 = Color32::from_rgb(200, 30, 30);
const DEAD_COLOR: Color32 = Color32::from_rgb(40, 40, 40);

pub struct LifeApp {
    game: LifeGame,
    selected_pattern: usize,
}

impl LifeApp {
    /// Repaints whenever the game publishes a new generation.
    pub fn new(cc: &eframe::CreationContext<'_>, game: LifeGame, runtime: &Handle) -> Self {
        let ctx = cc.egui_ctx.clone();
        let mut generations = game.subscribe();
        runtime.spawn(async move {
            while generations.changed().await.is_ok() {
                ctx.request_repaint();
            }
        });

        Self {
            game,
            selected_pattern: 0,
        }
    }

    fn apply_selected_pattern(&mut self) {
        if let Some(pattern) = PATTERNS.get(self.selected_pattern) {
            if let Err(err) = self.game.apply_pattern(pattern) {
                warn!("{err}");
            }
        }
    }

    fn draw_board(&mut self, ui: &mut egui::Ui, board: &GameBoard) {
        let pitch = BOX_SIZE + SPACING;
        let total_size = Vec2::new(
            pitch * GRID_COLS as f32 - SPACING,
            pitch * GRID_ROWS as f32 - SPACING,
        );

        let (response, painter) = ui.allocate_painter(total_size, egui::Sense::click());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, Color32::BLACK);

        for row in 0..GRID_ROWS {
            for col in 0..GRID_COLS {
                let rect = Rect::from_min_size(
                    origin + Vec2::new(col as f32 * pitch, row as f32 * pitch),
                    Vec2::splat(BOX_SIZE),
                );
                let color = if board.is_alive(row, col) { LIVE_COLOR } else { DEAD_COLOR };
                painter.rect_filled(rect, 1.0, color);
                painter.rect_stroke(rect, 1.0, Stroke::new(0.2, Color32::from_gray(60)));
            }
        }

        // Cells can be toggled at any time, running or not.
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let offset = pos - origin;
                let (row, col) = ((offset.y / pitch) as usize, (offset.x / pitch) as usize);
                if let Err(err) = self.game.toggle_cell(row, col) {
                    debug!("click ignored: {err}");
                }
            }
        }
    }
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let state = self.game.state();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Conway's Game of Life");

            // Menu
            ui.horizontal(|ui| {
                if ui.add_enabled(state.can_start(), egui::Button::new("▶ Start")).clicked() {
                    self.game.start();
                }
                if ui.add_enabled(state.can_pause(), egui::Button::new("⏸ Pause")).clicked() {
                    self.game.pause();
                }
                if ui.add_enabled(state.can_clear(), egui::Button::new("⏹ Clear")).clicked() {
                    self.game.clear();
                }
                if ui.button("End").clicked() {
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }

                ui.separator();

                ui.label("Pattern:");
                egui::ComboBox::from_id_source("pattern_selector")
                    .selected_text(PATTERNS[self.selected_pattern].name)
                    .show_ui(ui, |ui| {
                        for (i, pattern) in PATTERNS.iter().enumerate() {
                            ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                        }
                    });
                if ui.button("Apply Pattern").clicked() {
                    self.apply_selected_pattern();
                }
            });

            ui.separator();
            ui.label("Click cells to toggle them alive/dead.");
            ui.separator();

            let board = self.game.snapshot();
            self.draw_board(ui, &board);

            ui.separator();

            ui.horizontal(|ui| {
                ui.label(format!("Generation: {}", board.generation()));
                ui.label(format!("Live cells: {}", board.population()));
                ui.label(format!("{:?}", self.game.state()));
            });
        });
    }
}
