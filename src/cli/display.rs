// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the trawl CLI.
//!
//! Colors are picked by what they mean in a result list ([`Role`]), not by
//! hue. Each role maps to a OneDark color on dark terminals and a One Light
//! color on light ones. `TRAWL_THEME=light|dark` forces a palette, otherwise
//! `COLORFGBG` is consulted and dark is assumed.
//!
//! `NO_COLOR` or a non-TTY stdout turns styling off entirely, so piped output
//! is plain text.

use std::sync::OnceLock;

use trawl::CorpusKind;

/// Inner width of every box, between the two `│`.
pub const BOX_WIDTH: usize = 80;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

// ═══════════════════════════════════════════════════════════════════════════
// PALETTE
// ═══════════════════════════════════════════════════════════════════════════

/// What a piece of text is, which decides its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Border,
    Heading,
    Title,
    Shop,
    Blog,
    CloseMatch,
    LooseMatch,
    MarginalMatch,
    Weight,
}

type Rgb = (u8, u8, u8);

struct Palette {
    border: Rgb,
    heading: Rgb,
    title: Rgb,
    shop: Rgb,
    blog: Rgb,
    close: Rgb,
    loose: Rgb,
    marginal: Rgb,
    weight: Rgb,
}

impl Palette {
    fn get(&self, role: Role) -> Rgb {
        match role {
            Role::Border => self.border,
            Role::Heading => self.heading,
            Role::Title => self.title,
            Role::Shop => self.shop,
            Role::Blog => self.blog,
            Role::CloseMatch => self.close,
            Role::LooseMatch => self.loose,
            Role::MarginalMatch => self.marginal,
            Role::Weight => self.weight,
        }
    }
}

const ONEDARK: Palette = Palette {
    border: (92, 99, 112),
    heading: (86, 182, 194),
    title: (102, 217, 239),
    shop: (152, 195, 121),
    blog: (198, 120, 221),
    close: (152, 195, 121),
    loose: (229, 192, 123),
    marginal: (224, 108, 117),
    weight: (97, 175, 239),
};

const ONELIGHT: Palette = Palette {
    border: (160, 161, 167),
    heading: (1, 132, 188),
    title: (1, 112, 158),
    shop: (80, 161, 79),
    blog: (166, 38, 164),
    close: (80, 161, 79),
    loose: (193, 132, 1),
    marginal: (228, 86, 73),
    weight: (64, 120, 242),
};

fn palette() -> &'static Palette {
    static LIGHT: OnceLock<bool> = OnceLock::new();
    if *LIGHT.get_or_init(prefers_light) {
        &ONELIGHT
    } else {
        &ONEDARK
    }
}

fn prefers_light() -> bool {
    match std::env::var("TRAWL_THEME").map(|v| v.to_lowercase()) {
        Ok(v) if v == "light" || v == "l" => return true,
        Ok(v) if v == "dark" || v == "d" => return false,
        _ => {}
    }
    // "fg;bg"; backgrounds 7 and 9..=15 are light
    std::env::var("COLORFGBG")
        .ok()
        .and_then(|v| v.rsplit(';').next().and_then(|bg| bg.parse::<u8>().ok()))
        .is_some_and(|bg| bg >= 7 && bg != 8)
}

// ═══════════════════════════════════════════════════════════════════════════
// STYLING
// ═══════════════════════════════════════════════════════════════════════════

fn use_colors() -> bool {
    static ON: OnceLock<bool> = OnceLock::new();
    *ON.get_or_init(|| std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout))
}

fn escape((r, g, b): Rgb) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

/// `text` in the color for `role`, optionally bold or dim.
pub fn paint(role: Role, modifier: &str, text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifier, escape(palette().get(role)), text, RESET)
    } else {
        text.to_string()
    }
}

/// Character count, ignoring ANSI escapes.
pub fn visible_len(s: &str) -> usize {
    let mut len = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            len += 1;
        }
    }
    len
}

// ═══════════════════════════════════════════════════════════════════════════
// BOXES
// ═══════════════════════════════════════════════════════════════════════════

fn frame(edge: &str) -> String {
    paint(Role::Border, "", edge)
}

/// `│ content      │`
pub fn row(content: &str) {
    let pad = BOX_WIDTH.saturating_sub(visible_len(content));
    println!("{}{}{}{}", frame("│"), content, " ".repeat(pad), frame("│"));
}

fn rule(left: &str, label: &str, right: &str) {
    let label = format!("─ {} ", paint(Role::Heading, BOLD, label));
    let fill = "─".repeat(BOX_WIDTH.saturating_sub(visible_len(&label)));
    println!("{}{}{}", frame(left), label, frame(&format!("{}{}", fill, right)));
}

/// `┌─ LABEL ─────┐`
pub fn section_top(label: &str) {
    rule("┌", label, "┐");
}

/// `├─ LABEL ─────┤`
pub fn section_mid(label: &str) {
    rule("├", label, "┤");
}

/// `└─────────────┘`
pub fn section_bot() {
    println!("{}", frame(&format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Pad to `width` visible characters.
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(visible_len(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Cut `text` to at most `max_chars` characters, ending in `…` if cut.
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let kept: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", kept)
}

pub fn corpus_badge(kind: CorpusKind) -> String {
    match kind {
        CorpusKind::Catalog => paint(Role::Shop, BOLD, "[SHOP]"),
        CorpusKind::Article => paint(Role::Blog, BOLD, "[BLOG]"),
    }
}

/// Score colored by how close the match is.
pub fn score_value(score: f64) -> String {
    let role = if score < 0.1 {
        Role::CloseMatch
    } else if score < 0.25 {
        Role::LooseMatch
    } else {
        Role::MarginalMatch
    };
    paint(role, "", &format!("{:>6.3}", score))
}

/// Field weight as a 10-cell bar: `████░░░░░░ 0.40`
pub fn weight_bar(weight: f64) -> String {
    let filled = (weight.clamp(0.0, 1.0) * 10.0).round() as usize;
    let bar = format!("{}{}", "█".repeat(filled), "░".repeat(10 - filled));
    format!("{} {:.2}", paint(Role::Weight, "", &bar), weight)
}

pub fn muted(text: &str) -> String {
    paint(Role::Border, DIM, text)
}

pub fn emphasis(text: &str) -> String {
    paint(Role::Title, BOLD, text)
}
