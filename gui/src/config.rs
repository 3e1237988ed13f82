use eframe::egui::Color32;
use std::ops::RangeInclusive;

/// Fixed settings for the desktop front-end.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub board_width: usize,
    pub board_height: usize,
    pub cell_size: f32,
    pub cell_margin: f32,
    pub cell_rounding: f32,
    pub alive_color: Color32,
    pub dead_color: Color32,
    pub border_color: Color32,
    /// Tick interval in milliseconds.
    pub default_interval_ms: u64,
    pub interval_range_ms: RangeInclusive<u64>,
    pub random_alive_probability: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            board_width: 20,
            board_height: 20,
            cell_size: 28.0,
            cell_margin: 1.0,
            cell_rounding: 4.0,
            alive_color: Color32::from_rgb(0x7e, 0xd3, 0x74),
            dead_color: Color32::from_rgb(37, 37, 38),
            border_color: Color32::from_rgb(60, 60, 60),
            default_interval_ms: 200,
            interval_range_ms: 30..=1000,
            random_alive_probability: 0.22,
        }
    }
}

impl AppConfig {
    /// Side length of one cell slot, margins included.
    pub fn cell_pitch(&self) -> f32 {
        self.cell_size + 2.0 * self.cell_margin
    }

    pub fn board_size(&self) -> [f32; 2] {
        [
            self.cell_pitch() * self.board_width as f32,
            self.cell_pitch() * self.board_height as f32,
        ]
    }

    /// Window large enough for the board and the control rows.
    pub fn window_size(&self) -> [f32; 2] {
        let [w, h] = self.board_size();
        [w.max(560.0) + 32.0, h + 120.0]
    }
}
