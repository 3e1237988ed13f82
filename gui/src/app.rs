use crate::config::AppConfig;
use eframe::egui;
use eframe::egui::{Pos2, Rect, ScrollArea, Stroke, Ui};
use life_core::patterns::{PATTERNS, R_PENTOMINO};
use life_core::Grid;
use std::time::{Duration, Instant};

pub struct LifeApp {
    grid: Grid,
    config: AppConfig,
    running: bool,
    generation: u64,
    interval_ms: u64,
    last_tick: Instant,
    selected_pattern: usize,
}

impl LifeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, grid: Grid, config: AppConfig) -> Self {
        Self::with_grid(grid, config)
    }

    /// Build the app around `grid`, seeded with an R-pentomino.
    fn with_grid(mut grid: Grid, config: AppConfig) -> Self {
        grid.seed_centered(&R_PENTOMINO);
        LifeApp {
            grid,
            interval_ms: config.default_interval_ms,
            config,
            running: false,
            generation: 0,
            last_tick: Instant::now(),
            selected_pattern: 0,
        }
    }

    fn tick(&mut self) {
        self.grid.advance_generation();
        self.generation += 1;
    }

    /// Advance one generation if the tick interval has passed since the last one.
    ///
    /// Returns how long to wait before the next check, or `None` while paused.
    fn advance_if_due(&mut self, now: Instant) -> Option<Duration> {
        if !self.running {
            return None;
        }

        let interval = Duration::from_millis(self.interval_ms);
        let elapsed = now.saturating_duration_since(self.last_tick);
        if elapsed >= interval {
            self.tick();
            self.last_tick = now;
            Some(interval)
        } else {
            Some(interval - elapsed)
        }
    }

    fn toggle_running(&mut self) {
        self.running = !self.running;
        if self.running {
            self.last_tick = Instant::now();
        }
        log::info!(
            "{} at generation {}",
            if self.running { "playing" } else { "paused" },
            self.generation
        );
    }

    fn step(&mut self) {
        if self.running {
            return;
        }
        self.tick();
    }

    fn clear(&mut self) {
        self.running = false;
        self.generation = 0;
        self.grid.clear();
        log::info!("board cleared");
    }

    fn randomize(&mut self) {
        match self.grid.randomize(self.config.random_alive_probability) {
            Ok(()) => log::info!("board randomized, {} cells alive", self.grid.live_count()),
            Err(err) => log::error!("randomize failed: {err}"),
        }
    }

    fn seed(&mut self) {
        let pattern = &PATTERNS[self.selected_pattern];
        self.grid.seed_centered(pattern);
        log::info!("seeded {}", pattern.name);
    }

    /// Manual edit: flip one cell and make the change visible to neighbor counts.
    fn toggle_cell(&mut self, x: usize, y: usize) {
        self.grid.toggle_cell(x, y);
        self.grid.snapshot();
        log::debug!("toggled ({x}, {y})");
    }

    fn controls(&mut self, ui: &mut Ui) {
        ui.horizontal(|ui| {
            let play_label = if self.running { "⏸ Pause" } else { "▶ Play" };
            if ui.button(play_label).clicked() {
                self.toggle_running();
            }
            if ui.add_enabled(!self.running, egui::Button::new("Step")).clicked() {
                self.step();
            }
            if ui.button("Clear").clicked() {
                self.clear();
            }
            if ui.button("Randomize").clicked() {
                self.randomize();
            }

            ui.separator();

            egui::ComboBox::from_id_salt("pattern_selector")
                .selected_text(PATTERNS[self.selected_pattern].name)
                .show_ui(ui, |ui| {
                    for (i, pattern) in PATTERNS.iter().enumerate() {
                        ui.selectable_value(&mut self.selected_pattern, i, pattern.name);
                    }
                });
            if ui.button("Seed").clicked() {
                self.seed();
            }
        });

        ui.horizontal(|ui| {
            ui.label("Speed:");
            let range = self.config.interval_range_ms.clone();
            if ui
                .add(egui::Slider::new(&mut self.interval_ms, range).suffix(" ms"))
                .changed()
            {
                log::debug!("tick interval set to {} ms", self.interval_ms);
            }

            ui.separator();
            ui.label(format!("Gen: {}", self.generation));
        });
    }

    fn draw_board(&mut self, ui: &mut Ui) {
        let pitch = self.config.cell_pitch();
        let (rect, response) =
            ui.allocate_exact_size(self.config.board_size().into(), egui::Sense::click());

        if response.clicked() {
            let cell = response.interact_pointer_pos().and_then(|pos| {
                cell_at(rect, pitch, pos, self.grid.width(), self.grid.height())
            });
            if let Some((x, y)) = cell {
                self.toggle_cell(x, y);
            }
        }

        let painter = ui.painter();
        let size = egui::vec2(self.config.cell_size, self.config.cell_size);
        let border = Stroke::new(1.0, self.config.border_color);

        for y in 0..self.grid.height() {
            for x in 0..self.grid.width() {
                let min = rect.min
                    + egui::vec2(
                        x as f32 * pitch + self.config.cell_margin,
                        y as f32 * pitch + self.config.cell_margin,
                    );
                let cell_rect = Rect::from_min_size(min, size);

                let color = if self.grid.is_alive(x, y) {
                    self.config.alive_color
                } else {
                    self.config.dead_color
                };

                painter.rect_filled(cell_rect, self.config.cell_rounding, color);
                painter.rect_stroke(cell_rect, self.config.cell_rounding, border);
            }
        }
    }
}

/// Map a pointer position over the board to cell coordinates.
fn cell_at(
    board: Rect,
    pitch: f32,
    pointer: Pos2,
    width: usize,
    height: usize,
) -> Option<(usize, usize)> {
    if !board.contains(pointer) {
        return None;
    }
    let offset = pointer - board.min;
    let x = (offset.x / pitch) as usize;
    let y = (offset.y / pitch) as usize;
    (x < width && y < height).then_some((x, y))
}

impl eframe::App for LifeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(wait) = self.advance_if_due(Instant::now()) {
            ctx.request_repaint_after(wait);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                self.controls(ui);
                self.draw_board(ui);
            });
        });
    }
}
