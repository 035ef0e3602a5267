//! Bidirectional keyword/RGB lookups over the named-color table.

use crate::error::UnknownKeywordError;
use crate::named::NAMED_COLORS;
use crate::Component;
use std::collections::HashMap;

/// Bidirectional index over the CSS named-color table: forward keyword to
/// RGB lookup, exact reverse lookup, and a nearest-keyword fallback by
/// squared Euclidean distance.
#[derive(Clone, Debug)]
pub struct KeywordIndex {
    exact: HashMap<[u8; 3], &'static str>,
}

impl KeywordIndex {
    /// Build the index from the compiled-in named-color table. When two
    /// keywords share an RGB value the later table entry wins the exact
    /// reverse slot.
    pub fn new() -> Self {
        let mut exact = HashMap::with_capacity(NAMED_COLORS.len());
        for &(keyword, rgb) in NAMED_COLORS {
            exact.insert(rgb, keyword);
        }
        Self { exact }
    }

    /// Look up the RGB triple of a keyword.
    pub fn rgb_for(&self, keyword: &str) -> Result<[Component; 3], UnknownKeywordError> {
        NAMED_COLORS
            .iter()
            .find(|(name, _)| *name == keyword)
            .map(|&(_, [r, g, b])| [r as Component, g as Component, b as Component])
            .ok_or_else(|| UnknownKeywordError(keyword.to_string()))
    }

    /// Look up the keyword of an RGB triple: an exact reverse hit when the
    /// channels form a known byte triple, otherwise the first keyword at
    /// minimal squared distance in table order.
    pub fn keyword_for(&self, rgb: [Component; 3]) -> &'static str {
        if let Some(key) = byte_triple(rgb) {
            if let Some(keyword) = self.exact.get(&key) {
                return keyword;
            }
        }

        let mut closest_distance = Component::INFINITY;
        let mut closest = NAMED_COLORS[0].0;

        for &(keyword, value) in NAMED_COLORS {
            let distance = squared_distance(rgb, value);
            if distance < closest_distance {
                closest_distance = distance;
                closest = keyword;
            }
        }

        closest
    }
}

impl Default for KeywordIndex {
    fn default() -> Self {
        Self::new()
    }
}

/// The exact reverse map is keyed by byte triples, so only integral channels
/// inside 0..=255 can hit it.
fn byte_triple([r, g, b]: [Component; 3]) -> Option<[u8; 3]> {
    let byte = |v: Component| (v.fract() == 0.0 && (0.0..=255.0).contains(&v)).then_some(v as u8);
    Some([byte(r)?, byte(g)?, byte(b)?])
}

/// <https://en.m.wikipedia.org/wiki/Euclidean_distance#Squared_Euclidean_distance>
fn squared_distance(a: [Component; 3], b: [u8; 3]) -> Component {
    let d0 = a[0] - b[0] as Component;
    let d1 = a[1] - b[1] as Component;
    let d2 = a[2] - b[2] as Component;
    d0 * d0 + d1 * d1 + d2 * d2
}
