//! Payment request to QR code, as base64 PNG for embedding in JSON.

use base64::{Engine, engine::general_purpose};
use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

use crate::Error;

/// Pixels per module side.
pub const MODULE_SIZE: u32 = 10;

/// Render `data` with error correction level L, smallest version that fits,
/// 10px modules and the standard 4 module quiet zone.
pub fn to_png(data: &str) -> crate::Result<Vec<u8>> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::L)
        .map_err(|e| Error::Render(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .dark_color(Luma([0]))
        .light_color(Luma([255]))
        .build();

    let mut png = Vec::new();
    image
        .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
        .map_err(|e| Error::Render(e.to_string()))?;
    Ok(png)
}

pub fn to_base64_png(data: &str) -> crate::Result<String> {
    to_png(data).map(|png| general_purpose::STANDARD.encode(png))
}
