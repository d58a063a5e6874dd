//! Column math for the masonry image grid.
//!
//! Items are dealt into columns round-robin so server order reads left to
//! right, top to bottom. Each column is a plain vertical stack; images keep
//! their natural height, which packs the variable-height cards.

#[cfg(test)]
#[path = "masonry_test.rs"]
mod masonry_test;

/// Column counts keyed by maximum viewport width.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Breakpoints {
    pub default_columns: usize,
    /// `(max_width_px, columns)` pairs. The narrowest matching rule wins.
    pub rules: &'static [(u32, usize)],
}

/// 3 columns, 2 at ≤ 800px, 1 at ≤ 500px.
pub const COLLECTION_BREAKPOINTS: Breakpoints = Breakpoints {
    default_columns: 3,
    rules: &[(800, 2), (500, 1)],
};

/// Viewport width assumed before the browser reports one (SSR).
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 1024.0;

impl Breakpoints {
    /// Number of columns for `viewport_width` CSS pixels. Never zero.
    pub fn columns_for(&self, viewport_width: f64) -> usize {
        self.rules
            .iter()
            .filter(|(max_width, _)| viewport_width <= f64::from(*max_width))
            .min_by_key(|(max_width, _)| *max_width)
            .map_or(self.default_columns, |(_, columns)| *columns)
            .max(1)
    }
}

/// Deal `items` into `columns` stacks; item `i` lands in column `i % columns`.
pub fn distribute<T: Clone>(items: &[T], columns: usize) -> Vec<Vec<T>> {
    let columns = columns.max(1);
    let mut stacks: Vec<Vec<T>> = (0..columns).map(|_| Vec::new()).collect();
    for (index, item) in items.iter().enumerate() {
        stacks[index % columns].push(item.clone());
    }
    stacks
}

/// Current browser viewport width in CSS pixels.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return FALLBACK_VIEWPORT_WIDTH;
        };
        window
            .inner_width()
            .map_or(FALLBACK_VIEWPORT_WIDTH, |v| v.as_f64().unwrap_or(FALLBACK_VIEWPORT_WIDTH))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}
