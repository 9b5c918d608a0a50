use std::io::Cursor;

use anyhow::anyhow;
use base64::Engine as _;
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use tracing::warn;

/// Pixels per QR module.
const MODULE_SIZE: u32 = 10;

/// Encodes `url` as a PNG QR code: level L error correction, 10px modules and
/// the standard 4-module quiet zone. The symbol version grows to fit the data.
pub fn encode(url: &str) -> anyhow::Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)
        .map_err(|err| anyhow!("Failed to build QR code: {err}"))?;

    let image = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .quiet_zone(true)
        .dark_color(Luma([0]))
        .light_color(Luma([255]))
        .build();

    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|err| anyhow!("Failed write_to: {err:?}"))?;
    Ok(buffer.into_inner())
}

/// Base64 PNG for embedding in a `data:` URI. Empty when encoding fails.
pub fn render_base64(url: &str) -> String {
    match encode(url) {
        Ok(png) => base64::engine::general_purpose::STANDARD.encode(png),
        Err(err) => {
            warn!("QR: rendering failed for {} bytes of input: {:?}", url.len(), err);
            String::new()
        }
    }
}
