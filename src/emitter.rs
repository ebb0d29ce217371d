use crate::context::RunContext;
use anyhow::{anyhow, Context, Result};
use colored::{Color, Colorize};
use image::{ImageBuffer, Luma};
use log::debug;
use qrcode::{EcLevel, QrCode};
use rand::seq::SliceRandom;
use std::fs;
use std::path::{Path, PathBuf};

const PALETTE: [Color; 7] = [
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
];

const QR_MODULE_PX: u32 = 10;

pub fn random_color() -> Color {
    let mut rng = rand::thread_rng();
    *PALETTE.choose(&mut rng).unwrap_or(&Color::White)
}

/// Print each config in a random color, separated by blank lines.
pub fn display(configs: &[String]) {
    for config in configs {
        println!("{}\n", config.as_str().color(random_color()));
    }
}

/// Write the configs, newline-joined, to `configs_<stamp>.txt` under `dir`.
pub fn save_configs(dir: &Path, ctx: &RunContext, configs: &[String]) -> Result<PathBuf> {
    let path = dir.join(ctx.config_file_name());
    fs::write(&path, configs.join("\n"))
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(path)
}

/// Render `data` as a black-on-white QR image.
pub fn render_qr(data: &str) -> Result<ImageBuffer<Luma<u8>, Vec<u8>>> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)
        .map_err(|e| anyhow!("cannot encode qr code: {:?}", e))?;

    Ok(code
        .render::<Luma<u8>>()
        .dark_color(Luma([0u8]))
        .light_color(Luma([255u8]))
        .quiet_zone(true)
        .module_dimensions(QR_MODULE_PX, QR_MODULE_PX)
        .build())
}

/// Save one numbered QR image per config into `dir`, creating it if needed.
///
/// Stops at the first config that cannot be encoded or written.
pub fn save_qr_codes(dir: &Path, ctx: &RunContext, configs: &[String]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;

    let mut saved = Vec::with_capacity(configs.len());
    for (i, config) in configs.iter().enumerate() {
        let path = dir.join(ctx.qr_file_name(i + 1));
        let img = render_qr(config).with_context(|| format!("config #{}", i + 1))?;
        img.save(&path)
            .with_context(|| format!("cannot write {}", path.display()))?;
        debug!("saved {}", path.display());
        saved.push(path);
    }
    Ok(saved)
}
