/// String utility functions

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

static HEX_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&#([0-9a-fA-F]{6})").expect("valid hex colour regex"));

static LEGACY_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"&([0-9a-fk-orxA-FK-ORX])").expect("valid colour regex"));

static SECTION_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)§[0-9a-fk-orx]").expect("valid section regex"));

/// Translate `&` colour codes into the `§` form the client renders.
///
/// `&#RRGGBB` becomes the `§x§R§R§G§G§B§B` hex sequence, legacy codes like
/// `&a` become `§a`. An `&` not followed by a code is left alone.
pub fn translate_colors(text: &str) -> String {
    let hex = HEX_CODE.replace_all(text, |caps: &Captures| {
        let mut out = String::from("§x");
        for ch in caps[1].chars() {
            out.push('§');
            out.push(ch.to_ascii_lowercase());
        }
        out
    });

    LEGACY_CODE
        .replace_all(&hex, |caps: &Captures| format!("§{}", caps[1].to_lowercase()))
        .into_owned()
}

/// Remove `§` colour codes, for log output
pub fn strip_colors(text: &str) -> String {
    SECTION_CODE.replace_all(text, "").into_owned()
}

/// Convert an enum-style name like `IN_LOBBY` to `In Lobby`
pub fn to_title_case(s: &str) -> String {
    s.split(|c: char| c == '_' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
