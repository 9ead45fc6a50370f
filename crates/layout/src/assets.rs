//! Images compiled into the crate.

/// Pix QR code printed in the payer receipt's logo appendix.
pub static PIX_QR_CODE: &[u8] = include_bytes!("../assets/pix_qrcode.png");
