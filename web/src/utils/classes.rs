//! Class-name merging for Tailwind markup.
//!
//! [`merge_classes`] keeps the last utility of each conflict group. A group
//! is scoped by its variants (`md:`, `hover:`) and the important flag, so
//! `hover:bg-red-500 bg-blue-500` keeps both. Shorthand groups also clear
//! the longhands they cover when they come later: `px-2 p-4` becomes `p-4`,
//! while `p-4 px-2` stays as written. Classes with no known group are kept.

use std::collections::HashSet;

/// Anything that can contribute classes to [`cn!`](crate::cn).
pub trait ClassValue {
    /// Append this value's classes to `out`, space separated.
    fn append_to(&self, out: &mut String);
}

impl ClassValue for str {
    fn append_to(&self, out: &mut String) {
        let trimmed = self.trim();
        if trimmed.is_empty() {
            return;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(trimmed);
    }
}

impl ClassValue for String {
    fn append_to(&self, out: &mut String) {
        self.as_str().append_to(out);
    }
}

impl<T: ClassValue + ?Sized> ClassValue for &T {
    fn append_to(&self, out: &mut String) {
        (**self).append_to(out);
    }
}

impl<T: ClassValue> ClassValue for Option<T> {
    fn append_to(&self, out: &mut String) {
        if let Some(value) = self {
            value.append_to(out);
        }
    }
}

/// Resolve Tailwind conflicts in a whitespace-separated class list.
pub fn merge_classes(raw: &str) -> String {
    let tokens: Vec<&str> = raw.split_whitespace().collect();
    let mut keep = vec![false; tokens.len()];
    let mut claimed: HashSet<String> = HashSet::new();

    // Walk right to left: the first occurrence seen of a group wins.
    for (idx, token) in tokens.iter().enumerate().rev() {
        let parsed = ParsedClass::parse(token);
        let Some(group) = group_of(parsed.base) else {
            keep[idx] = true;
            continue;
        };

        let key = parsed.key(group);
        if claimed.contains(&key) {
            continue;
        }
        keep[idx] = true;
        claimed.insert(key);
        for covered in covered_groups(group) {
            claimed.insert(parsed.key(covered));
        }
    }

    tokens
        .iter()
        .zip(keep)
        .filter_map(|(token, kept)| kept.then_some(*token))
        .collect::<Vec<_>>()
        .join(" ")
}

struct ParsedClass<'a> {
    variants: Vec<&'a str>,
    important: bool,
    base: &'a str,
}

impl<'a> ParsedClass<'a> {
    fn parse(token: &'a str) -> Self {
        let mut variants = Vec::new();
        let mut depth = 0usize;
        let mut start = 0;
        for (idx, ch) in token.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth = depth.saturating_sub(1),
                ':' if depth == 0 => {
                    variants.push(&token[start..idx]);
                    start = idx + 1;
                }
                _ => {}
            }
        }
        variants.sort_unstable();

        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }
        let base = base.strip_prefix('-').unwrap_or(base);

        Self {
            variants,
            important,
            base,
        }
    }

    fn key(&self, group: &str) -> String {
        format!(
            "{}|{}|{}",
            self.variants.join(":"),
            if self.important { "!" } else { "" },
            group
        )
    }
}

const KEYWORDS: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("table", "display"),
    ("contents", "display"),
    ("flow-root", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("flex-row", "flex-direction"),
    ("flex-row-reverse", "flex-direction"),
    ("flex-col", "flex-direction"),
    ("flex-col-reverse", "flex-direction"),
    ("flex-wrap", "flex-wrap"),
    ("flex-wrap-reverse", "flex-wrap"),
    ("flex-nowrap", "flex-wrap"),
    ("flex-1", "flex"),
    ("flex-auto", "flex"),
    ("flex-initial", "flex"),
    ("flex-none", "flex"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("truncate", "text-overflow"),
    ("shadow", "shadow"),
    ("rounded", "rounded"),
    ("border", "border-width"),
    ("transition", "transition"),
    ("grow", "grow"),
    ("shrink", "shrink"),
];

// Ordered so that a longer prefix is tried before any prefix of it.
const PREFIXES: &[&str] = &[
    "min-w",
    "min-h",
    "max-w",
    "max-h",
    "gap-x",
    "gap-y",
    "gap",
    "px",
    "py",
    "pt",
    "pr",
    "pb",
    "pl",
    "ps",
    "pe",
    "p",
    "mx",
    "my",
    "mt",
    "mr",
    "mb",
    "ml",
    "ms",
    "me",
    "m",
    "size",
    "w",
    "h",
    "inset-x",
    "inset-y",
    "inset",
    "top",
    "right",
    "bottom",
    "left",
    "z",
    "opacity",
    "leading",
    "tracking",
    "justify-items",
    "justify-self",
    "justify",
    "items",
    "self",
    "place-items",
    "place-content",
    "content",
    "grid-cols",
    "grid-rows",
    "col-span",
    "row-span",
    "order",
    "overflow-x",
    "overflow-y",
    "overflow",
    "animate",
    "duration",
    "delay",
    "ease",
    "cursor",
    "from",
    "via",
    "to",
    "space-x",
    "space-y",
    "translate-x",
    "translate-y",
    "rotate",
    "scale",
    "backdrop-blur",
    "blur",
    "object",
    "aspect",
    "line-clamp",
    "whitespace",
    "basis",
    "grow",
    "shrink",
    "transition",
];

fn group_of(base: &str) -> Option<&'static str> {
    if let Some((_, group)) = KEYWORDS.iter().find(|(keyword, _)| *keyword == base) {
        return Some(*group);
    }
    if let Some(value) = base.strip_prefix("text-") {
        return Some(text_group(value));
    }
    if let Some(value) = base.strip_prefix("font-") {
        return Some(font_group(value));
    }
    if let Some(value) = base.strip_prefix("bg-") {
        return Some(bg_group(value));
    }
    if let Some(value) = base.strip_prefix("border-") {
        return Some(border_group(value));
    }
    if let Some(value) = base.strip_prefix("rounded-") {
        return Some(rounded_group(value));
    }
    if let Some(value) = base.strip_prefix("shadow-") {
        return Some(match value {
            "sm" | "md" | "lg" | "xl" | "2xl" | "inner" | "none" => "shadow",
            _ => "shadow-color",
        });
    }
    if let Some(value) = base.strip_prefix("ring-") {
        return Some(if value.starts_with("offset") {
            "ring-offset"
        } else if is_length(value) || value == "inset" {
            "ring-width"
        } else {
            "ring-color"
        });
    }
    PREFIXES
        .iter()
        .find(|prefix| {
            base.strip_prefix(**prefix)
                .is_some_and(|rest| rest.starts_with('-'))
        })
        .copied()
}

fn is_length(value: &str) -> bool {
    let inner = value
        .strip_prefix('[')
        .and_then(|v| v.strip_suffix(']'))
        .unwrap_or(value);
    inner
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '.')
        || inner.starts_with("length:")
}

fn text_group(value: &str) -> &'static str {
    // `text-sm/6` carries a line height after the size
    let size = match value.split_once('/') {
        Some((size, _)) if !value.starts_with('[') => size,
        _ => value,
    };
    match size {
        "xs" | "sm" | "base" | "lg" | "xl" | "2xl" | "3xl" | "4xl" | "5xl" | "6xl" | "7xl"
        | "8xl" | "9xl" => "font-size",
        "left" | "center" | "right" | "justify" | "start" | "end" => "text-align",
        "wrap" | "nowrap" | "balance" | "pretty" => "text-wrap",
        "ellipsis" | "clip" => "text-overflow",
        _ if value.starts_with('[') && is_length(value) => "font-size",
        _ => "text-color",
    }
}

fn font_group(value: &str) -> &'static str {
    match value {
        "thin" | "extralight" | "light" | "normal" | "medium" | "semibold" | "bold"
        | "extrabold" | "black" => "font-weight",
        _ => "font-family",
    }
}

fn bg_group(value: &str) -> &'static str {
    match value {
        "none" | "radial" | "conic" => "bg-image",
        _ if value.starts_with("gradient-to-") || value.starts_with("linear-") => "bg-image",
        "auto" | "cover" | "contain" => "bg-size",
        "fixed" | "local" | "scroll" => "bg-attachment",
        "center" | "top" | "bottom" | "left" | "right" | "left-top" | "left-bottom"
        | "right-top" | "right-bottom" => "bg-position",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            "bg-repeat"
        }
        _ if value.starts_with("clip-") => "bg-clip",
        _ => "bg-color",
    }
}

fn border_group(value: &str) -> &'static str {
    match value {
        "solid" | "dashed" | "dotted" | "double" | "hidden" | "none" => return "border-style",
        _ => {}
    }
    if is_length(value) {
        return "border-width";
    }
    let (side, rest) = match value.split_once('-') {
        Some((side, rest)) => (side, Some(rest)),
        None => (value, None),
    };
    let side_group = match side {
        "x" => Some(("border-width-x", "border-color-x")),
        "y" => Some(("border-width-y", "border-color-y")),
        "t" => Some(("border-width-t", "border-color-t")),
        "r" => Some(("border-width-r", "border-color-r")),
        "b" => Some(("border-width-b", "border-color-b")),
        "l" => Some(("border-width-l", "border-color-l")),
        _ => None,
    };
    match (side_group, rest) {
        (Some((width, _)), None) => width,
        (Some((width, _)), Some(rest)) if is_length(rest) => width,
        (Some((_, color)), Some(_)) => color,
        (None, _) => "border-color",
    }
}

fn rounded_group(value: &str) -> &'static str {
    let side = value.split_once('-').map_or(value, |(side, _)| side);
    match side {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

/// Longhand groups a shorthand group overrides.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "gap" => &["gap-x", "gap-y"],
        "size" => &["w", "h"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-width" => &[
            "border-width-x",
            "border-width-y",
            "border-width-t",
            "border-width-r",
            "border-width-b",
            "border-width-l",
        ],
        "border-width-x" => &["border-width-r", "border-width-l"],
        "border-width-y" => &["border-width-t", "border-width-b"],
        "border-color" => &[
            "border-color-x",
            "border-color-y",
            "border-color-t",
            "border-color-r",
            "border-color-b",
            "border-color-l",
        ],
        _ => &[],
    }
}
