// SPDX-License-Identifier: Apache-2.0
//! Packed `0xRRGGBBAA` colors carried by the drawable primitives.

/// Opaque white.
pub const WHITE: u32 = 0xFFFF_FFFF;
/// Opaque black.
pub const BLACK: u32 = 0x0000_00FF;
/// Opaque red.
pub const RED: u32 = 0xFF00_00FF;
/// Opaque green.
pub const GREEN: u32 = 0x00FF_00FF;
/// Opaque blue.
pub const BLUE: u32 = 0x0000_FFFF;

/// Packs 8-bit channels into `0xRRGGBBAA`.
pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> u32 {
    u32::from_be_bytes([r, g, b, a])
}

/// Splits a packed color back into `[r, g, b, a]`.
pub const fn channels(color: u32) -> [u8; 4] {
    color.to_be_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgba_packs_in_channel_order() {
        assert_eq!(rgba(0xFF, 0, 0, 0xFF), RED);
        assert_eq!(rgba(0x12, 0x34, 0x56, 0x78), 0x1234_5678);
        assert_eq!(channels(0x1234_5678), [0x12, 0x34, 0x56, 0x78]);
    }
}
