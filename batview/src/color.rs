use core::fmt;

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};

use embedded_graphics::pixelcolor::Rgb888;

/// A packed `0xAARRGGBB` color, the integer format hosts pass around for
/// colors.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Rgba(pub u32);

impl Rgba {
    pub const TRANSPARENT: Self = Self(0x0000_0000);
    pub const BLACK: Self = Self(0xFF00_0000);
    pub const RED: Self = Self(0xFFFF_0000);
    pub const WHITE: Self = Self(0xFFFF_FFFF);

    pub const fn new(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    pub const fn is_transparent(&self) -> bool {
        self.alpha() == 0
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Debug for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rgba(#{:08X})", self.0)
    }
}

impl From<u32> for Rgba {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<i32> for Rgba {
    fn from(raw: i32) -> Self {
        Self(raw as u32)
    }
}

/// Accepts both the signed and the unsigned spelling of a packed color, so
/// `-65536` and `4294901760` are the same opaque red.
impl<'de> Deserialize<'de> for Rgba {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RgbaVisitor;

        impl<'de> Visitor<'de> for RgbaVisitor {
            type Value = Rgba;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a packed ARGB color in {}..={}", i32::MIN, u32::MAX)
            }

            fn visit_i64<E>(self, raw: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if raw < i32::MIN as i64 || raw > u32::MAX as i64 {
                    return Err(E::invalid_value(de::Unexpected::Signed(raw), &self));
                }

                Ok(Rgba(raw as u32))
            }

            fn visit_u64<E>(self, raw: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                u32::try_from(raw)
                    .map(Rgba)
                    .map_err(|_| E::invalid_value(de::Unexpected::Unsigned(raw), &self))
            }
        }

        deserializer.deserialize_i64(RgbaVisitor)
    }
}

impl From<Rgba> for Rgb888 {
    fn from(color: Rgba) -> Self {
        Rgb888::new(color.red(), color.green(), color.blue())
    }
}

#[cfg(test)]
mod tests {
    use embedded_graphics::prelude::RgbColor;

    use super::*;

    #[test]
    fn channels() {
        let color = Rgba::new(0x80, 0x12, 0x34, 0x56);

        assert_eq!(color, Rgba(0x8012_3456));
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x12);
        assert_eq!(color.green(), 0x34);
        assert_eq!(color.blue(), 0x56);
        assert!(!color.is_transparent());
        assert!(Rgba::TRANSPARENT.is_transparent());
    }

    #[test]
    fn signed_host_colors() {
        // Hosts hand opaque colors over as negative ints
        assert_eq!(Rgba::from(-1), Rgba::WHITE);
        assert_eq!(Rgba::from(-65536), Rgba::RED);
    }

    #[test]
    fn deserializes_either_sign() {
        assert_eq!(serde_json::from_str::<Rgba>("-65536").unwrap(), Rgba::RED);
        assert_eq!(serde_json::from_str::<Rgba>("4294901760").unwrap(), Rgba::RED);
        assert_eq!(serde_json::from_str::<Rgba>("-1").unwrap(), Rgba::WHITE);
        assert_eq!(serde_json::from_str::<Rgba>("0").unwrap(), Rgba::TRANSPARENT);

        assert!(serde_json::from_str::<Rgba>("4294967296").is_err());
        assert!(serde_json::from_str::<Rgba>("-2147483649").is_err());
        assert!(serde_json::from_str::<Rgba>("\"red\"").is_err());

        assert_eq!(serde_json::to_string(&Rgba::RED).unwrap(), "4294901760");
    }

    #[test]
    fn into_rgb888() {
        assert_eq!(Rgb888::from(Rgba::RED), Rgb888::RED);
        assert_eq!(Rgb888::from(Rgba::WHITE), Rgb888::WHITE);
        assert_eq!(Rgb888::from(Rgba::new(0, 1, 2, 3)), Rgb888::new(1, 2, 3));
    }
}
