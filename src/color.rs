//! RGBA colors for the icon overlay, with the CSS-style textual forms the
//! settings record uses (`#FFF`, `#RRGGBB`, `rgb(..)`, `rgba(..)`, names).

use std::fmt;
use std::str::FromStr;

use crate::error::DeckForgeError;

/// Color components in `[0.0, 1.0]`, matching the host toolkit convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f32,
    pub green: f32,
    pub blue: f32,
    pub alpha: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

    pub const fn opaque(red: f32, green: f32, blue: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha: 1.0,
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::WHITE
    }
}

fn channel_to_u8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (r, g, b) = (
            channel_to_u8(self.red),
            channel_to_u8(self.green),
            channel_to_u8(self.blue),
        );
        if (self.alpha - 1.0).abs() < f32::EPSILON {
            write!(f, "rgb({},{},{})", r, g, b)
        } else {
            write!(f, "rgba({},{},{},{})", r, g, b, self.alpha.clamp(0.0, 1.0))
        }
    }
}

fn hex_digit(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    let digits: Option<Vec<u8>> = hex.bytes().map(hex_digit).collect();
    let d = digits?;

    let (r, g, b, a) = match d.len() {
        // Shorthand: each digit doubles (#FFF == #FFFFFF)
        3 => (d[0] * 17, d[1] * 17, d[2] * 17, 255),
        4 => (d[0] * 17, d[1] * 17, d[2] * 17, d[3] * 17),
        6 => (d[0] * 16 + d[1], d[2] * 16 + d[3], d[4] * 16 + d[5], 255),
        8 => (
            d[0] * 16 + d[1],
            d[2] * 16 + d[3],
            d[4] * 16 + d[5],
            d[6] * 16 + d[7],
        ),
        _ => return None,
    };

    Some(Rgba {
        red: r as f32 / 255.0,
        green: g as f32 / 255.0,
        blue: b as f32 / 255.0,
        alpha: a as f32 / 255.0,
    })
}

fn parse_functional(body: &str, expect_alpha: bool) -> Option<Rgba> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != if expect_alpha { 4 } else { 3 } {
        return None;
    }

    let r: u8 = parts[0].parse().ok()?;
    let g: u8 = parts[1].parse().ok()?;
    let b: u8 = parts[2].parse().ok()?;
    let alpha: f32 = if expect_alpha {
        let a: f32 = parts[3].parse().ok()?;
        if !(0.0..=1.0).contains(&a) {
            return None;
        }
        a
    } else {
        1.0
    };

    Some(Rgba {
        red: r as f32 / 255.0,
        green: g as f32 / 255.0,
        blue: b as f32 / 255.0,
        alpha,
    })
}

fn parse_named(name: &str) -> Option<Rgba> {
    let c = match name {
        "white" => Rgba::opaque(1.0, 1.0, 1.0),
        "black" => Rgba::opaque(0.0, 0.0, 0.0),
        "red" => Rgba::opaque(1.0, 0.0, 0.0),
        "green" => Rgba::opaque(0.0, 0.5, 0.0),
        "lime" => Rgba::opaque(0.0, 1.0, 0.0),
        "blue" => Rgba::opaque(0.0, 0.0, 1.0),
        "yellow" => Rgba::opaque(1.0, 1.0, 0.0),
        "cyan" => Rgba::opaque(0.0, 1.0, 1.0),
        "magenta" => Rgba::opaque(1.0, 0.0, 1.0),
        "gray" | "grey" => Rgba::opaque(0.5, 0.5, 0.5),
        _ => return None,
    };
    Some(c)
}

impl FromStr for Rgba {
    type Err = DeckForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = if let Some(hex) = s.strip_prefix('#') {
            parse_hex(hex)
        } else if let Some(body) = s
            .strip_prefix("rgba(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_functional(body, true)
        } else if let Some(body) = s
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_functional(body, false)
        } else {
            parse_named(&s.to_ascii_lowercase())
        };

        parsed.ok_or_else(|| DeckForgeError::Color(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_shorthand() {
        let c: Rgba = "#FFF".parse().unwrap();
        assert_eq!(c, Rgba::WHITE);
    }

    #[test]
    fn test_hex_full() {
        let c: Rgba = "#FF0000".parse().unwrap();
        assert_eq!(c, Rgba::opaque(1.0, 0.0, 0.0));

        let c: Rgba = "#00000080".parse().unwrap();
        assert!((c.alpha - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn test_functional_forms() {
        let c: Rgba = "rgb(255, 255, 255)".parse().unwrap();
        assert_eq!(c, Rgba::WHITE);

        let c: Rgba = "rgba(0,0,0,0.5)".parse().unwrap();
        assert_eq!(c.alpha, 0.5);
    }

    #[test]
    fn test_named() {
        assert_eq!("White".parse::<Rgba>().unwrap(), Rgba::WHITE);
        assert_eq!("lime".parse::<Rgba>().unwrap(), Rgba::opaque(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_display_round_trip() {
        let c = Rgba::opaque(1.0, 0.0, 0.0);
        assert_eq!(c.to_string(), "rgb(255,0,0)");
        assert_eq!(c.to_string().parse::<Rgba>().unwrap(), c);

        let c = Rgba {
            alpha: 0.5,
            ..Rgba::WHITE
        };
        assert_eq!(c.to_string(), "rgba(255,255,255,0.5)");
        assert_eq!(c.to_string().parse::<Rgba>().unwrap(), c);
    }

    #[test]
    fn test_rejects_garbage() {
        assert!("".parse::<Rgba>().is_err());
        assert!("#GGG".parse::<Rgba>().is_err());
        assert!("rgb(300,0,0)".parse::<Rgba>().is_err());
        assert!("rgba(0,0,0)".parse::<Rgba>().is_err());
        assert!("chartreuse-ish".parse::<Rgba>().is_err());
    }
}
