//! Blue/indigo ASCII banner (VC FINDER) and exit footer.

use crossterm::ExecutableCommand;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{Write, stdout};

/// Blue 600 (#2563eb).
const BLUE: (u8, u8, u8) = (0x25, 0x63, 0xeb);
/// Indigo 600 (#4f46e5).
const INDIGO: (u8, u8, u8) = (0x4f, 0x46, 0xe5);

const TAGLINE: &str = "Find specialized venture capitalists by industry";

const DISCLAIMER: &str = "Disclaimer: this directory is for demonstration purposes and uses \
synthetic data. All names, contact details and other information are fictional; any \
resemblance to real persons or entities is coincidental.";

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Figlet art for the title, or the plain title if the built-in font is unavailable.
fn title_art() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("VC FINDER").map(|figure| figure.to_string()))
        .unwrap_or_else(|| "VC FINDER".to_string())
}

/// Prints the welcome banner: "VC FINDER" with a Blue to Indigo gradient, then version and tagline.
pub fn print_welcome() {
    let mut out = stdout();
    let art = title_art();
    let lines: Vec<&str> = art.lines().collect();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(BLUE, INDIGO, t);
        let _ = out.execute(SetForegroundColor(Color::Rgb { r, g, b }));
        let _ = out.execute(Print(line));
        let _ = out.execute(Print("\r\n"));
        let _ = out.execute(ResetColor);
    }

    let version = env!("CARGO_PKG_VERSION");
    let _ = out.execute(SetForegroundColor(Color::Rgb {
        r: INDIGO.0,
        g: INDIGO.1,
        b: INDIGO.2,
    }));
    let _ = out.execute(Print(format!("v{}  {}\r\n\r\n", version, TAGLINE)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}

/// Printed once when the session ends.
pub fn print_footer() {
    let mut out = stdout();
    let _ = out.execute(SetForegroundColor(Color::DarkGrey));
    let _ = out.execute(Print(
        "\r\nVC Finder - Connect with industry-specialized venture capitalists\r\n",
    ));
    let _ = out.execute(Print(format!("{}\r\n", DISCLAIMER)));
    let _ = out.execute(ResetColor);
    let _ = out.flush();
}
