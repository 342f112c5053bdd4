//! Class-name composition for utility CSS.
//!
//! Components describe their styling as a list of candidate class strings,
//! some of them conditional, and [`class_names`] turns that into a final
//! [`ClassSet`]. When two utilities set the same property (say `max-w-2xl`
//! followed by `max-w-full`) the later one wins and the earlier one is
//! dropped, so a flag can override a default without the markup carrying both.

use smol_str::SmolStr;
use std::fmt;

/// Spacing utilities, most specific first so `px-2` is not read as `p`.
const SPACING_GROUPS: &[&str] = &[
    "px", "py", "pt", "pr", "pb", "pl", "p", "mx", "my", "mt", "mr", "mb", "ml", "m",
];

/// Compose class candidates into a conflict-free set.
///
/// `None` entries are skipped, so conditional classes read as
/// `flag.then_some("class")`. Each entry may hold several space-separated
/// classes.
pub fn class_names<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> ClassSet {
    candidates.into_iter().flatten().collect()
}

/// An ordered set of class tokens with utility conflicts resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassSet {
    tokens: Vec<SmolStr>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every whitespace-separated class in `classes`.
    pub fn extend_str(&mut self, classes: &str) {
        for token in classes.split_whitespace() {
            self.push(token);
        }
    }

    /// Add one class, evicting any earlier class it overrides.
    pub fn push(&mut self, token: &str) {
        let incoming = Utility::parse(token);
        self.tokens
            .retain(|existing| !incoming.overrides(&Utility::parse(existing)));
        self.tokens.push(token.into());
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(SmolStr::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl fmt::Display for ClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl<'a> FromIterator<&'a str> for ClassSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for classes in iter {
            set.extend_str(classes);
        }
        set
    }
}

/// A class token split into the parts that decide conflicts.
///
/// Variant prefixes (`hover:`, `[&>*]:`) scope the group, so `bg-white` and
/// `hover:bg-black` never evict each other. Classes outside the known groups
/// only conflict with themselves.
struct Utility<'a> {
    token: &'a str,
    variants: &'a str,
    group: Option<&'static str>,
}

impl<'a> Utility<'a> {
    fn parse(token: &'a str) -> Self {
        let (variants, utility) = split_variants(token);
        // negative values (`-mt-2`) share the group of their positive form
        let utility = utility.strip_prefix('-').unwrap_or(utility);
        Self {
            token,
            variants,
            group: utility_group(utility),
        }
    }

    /// Whether adding `self` should drop `earlier` from the set.
    fn overrides(&self, earlier: &Utility<'_>) -> bool {
        if self.token == earlier.token {
            return true;
        }
        match (self.group, earlier.group) {
            (Some(group), Some(other)) if self.variants == earlier.variants => {
                group == other || covered_sides(group).contains(&other)
            }
            _ => false,
        }
    }
}

/// Narrower spacing groups a shorthand replaces: `p-4` resets `pb-1`, but a
/// later `pb-1` refines an earlier `p-4` and both stay.
fn covered_sides(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl"],
        "px" => &["pr", "pl"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml"],
        "mx" => &["mr", "ml"],
        "my" => &["mt", "mb"],
        _ => &[],
    }
}

/// Split `hover:[&>*]:mt-0` into (`hover:[&>*]:`, `mt-0`). Colons inside
/// brackets belong to arbitrary values, not variants.
fn split_variants(token: &str) -> (&str, &str) {
    let mut depth = 0usize;
    let mut split = None;
    for (i, c) in token.char_indices() {
        match c {
            '[' => depth += 1,
            ']' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = Some(i),
            _ => {}
        }
    }
    match split {
        Some(i) => token.split_at(i + 1),
        None => ("", token),
    }
}

fn utility_group(utility: &str) -> Option<&'static str> {
    if utility.starts_with("max-w-") {
        return Some("max-w");
    }
    if let Some(value) = utility.strip_prefix("bg-") {
        return Some(background_group(value));
    }
    SPACING_GROUPS.iter().copied().find(|group| {
        utility
            .strip_prefix(*group)
            .is_some_and(|rest| rest.starts_with('-'))
    })
}

/// `bg-*` covers several properties; only colours compete with colours.
fn background_group(value: &str) -> &'static str {
    const IMAGE: &[&str] = &["gradient-", "linear-", "radial-", "conic-", "[url("];
    const OTHERS: &[(&str, &str)] = &[
        ("clip-", "bg-clip"),
        ("origin-", "bg-origin"),
        ("blend-", "bg-blend"),
        ("opacity-", "bg-opacity"),
        ("size-", "bg-size"),
        ("position-", "bg-position"),
    ];
    match value {
        "none" => return "bg-image",
        "auto" | "cover" | "contain" => return "bg-size",
        "fixed" | "local" | "scroll" => return "bg-attachment",
        "bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
        | "right-top" | "top" => return "bg-position",
        "repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
            return "bg-repeat";
        }
        _ => {}
    }
    if IMAGE.iter().any(|prefix| value.starts_with(prefix)) {
        return "bg-image";
    }
    OTHERS
        .iter()
        .find(|(prefix, _)| value.starts_with(prefix))
        .map_or("bg-color", |&(_, group)| group)
}
