//! Startup banner: "ADVISORY" in figlet ASCII with a vertical gradient.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};
use tracing::warn;

const BANNER_TEXT: &str = "ADVISORY";

/// Navy (#1f3a5f).
const NAVY: (u8, u8, u8) = (0x1f, 0x3a, 0x5f);
/// Teal (#2ec4b6).
const TEAL: (u8, u8, u8) = (0x2e, 0xc4, 0xb6);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let mix = |x: u8, y: u8| (f64::from(x) * (1.0 - t) + f64::from(y) * t).round() as u8;
    (mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

/// Figlet rendering of `text` in the standard font. `None` if the font can't render it.
fn render_art(text: &str) -> Option<String> {
    let font = match FIGfont::standard() {
        Ok(font) => font,
        Err(e) => {
            warn!(error = %e, "figlet font unavailable");
            return None;
        }
    };
    font.convert(text).map(|figure| figure.to_string())
}

/// Prints the welcome banner, then the version and a subtitle.
/// Falls back to plain text when figlet fails.
pub fn print_welcome() {
    let mut out = stdout();
    let art = render_art(BANNER_TEXT).unwrap_or_else(|| BANNER_TEXT.to_string());
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(NAVY, TEAL, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: TEAL.0,
        g: TEAL.1,
        b: TEAL.2,
    }));
    let _ = out.execute(Print(format!("v{}\r\n", env!("CARGO_PKG_VERSION"))));
    let _ = out.execute(Print("Program Advisory Board Dashboard\r\n"));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
