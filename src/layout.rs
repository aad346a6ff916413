//! Layout selection.
//!
//! Three fixed templates, chosen from the item count and viewport class:
//!
//! | Viewport | Items | Layout | Shown |
//! |----------|-------|--------|-------|
//! | any      | 0     | —      | nothing |
//! | mobile   | ≥ 1   | [`LayoutKind::Single`] | 1 random item, full-bleed |
//! | desktop  | 1–4   | [`LayoutKind::Pair`]   | first 2 of a shuffled list |
//! | desktop  | ≥ 5   | [`LayoutKind::Mosaic`] | 1 hero (2×2) + 4 cells |
//!
//! [`choose_layout`] is the pure mapping; [`select`] applies it to a list and
//! a [`Shuffler`].

use crate::shuffle::Shuffler;
use crate::types::MediaItem;
use crate::viewport::Viewport;

/// Items shown by the pair layout.
pub const PAIR_SIZE: usize = 2;
/// Items shown by the mosaic layout, hero included.
pub const MOSAIC_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutKind {
    Single,
    Pair,
    Mosaic,
}

impl LayoutKind {
    pub fn name(self) -> &'static str {
        match self {
            LayoutKind::Single => "single",
            LayoutKind::Pair => "pair",
            LayoutKind::Mosaic => "mosaic",
        }
    }
}

/// Pick a template, or `None` when there is nothing to show.
pub fn choose_layout(count: usize, viewport: Viewport) -> Option<LayoutKind> {
    match (count, viewport) {
        (0, _) => None,
        (_, Viewport::Mobile) => Some(LayoutKind::Single),
        (1..=4, Viewport::Desktop) => Some(LayoutKind::Pair),
        (_, Viewport::Desktop) => Some(LayoutKind::Mosaic),
    }
}

/// Items picked for one render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Montage {
    Single {
        item: MediaItem,
    },
    Pair {
        /// One or two items.
        items: Vec<MediaItem>,
        /// Set when only one item was supplied; the lone cell gets rounded corners.
        rounded: bool,
    },
    Mosaic {
        hero: MediaItem,
        rest: [MediaItem; 4],
    },
}

impl Montage {
    pub fn kind(&self) -> LayoutKind {
        match self {
            Montage::Single { .. } => LayoutKind::Single,
            Montage::Pair { .. } => LayoutKind::Pair,
            Montage::Mosaic { .. } => LayoutKind::Mosaic,
        }
    }

    /// Selected items in display order.
    pub fn items(&self) -> Vec<&MediaItem> {
        match self {
            Montage::Single { item } => vec![item],
            Montage::Pair { items, .. } => items.iter().collect(),
            Montage::Mosaic { hero, rest } => std::iter::once(hero).chain(rest.iter()).collect(),
        }
    }
}

/// Shuffle `items` and take the prefix the chosen layout needs.
pub fn select<S: Shuffler>(
    items: &[MediaItem],
    viewport: Viewport,
    shuffler: &mut S,
) -> Option<Montage> {
    let kind = choose_layout(items.len(), viewport)?;
    let shuffled = shuffler.permute(items);

    let montage = match kind {
        LayoutKind::Single => {
            let item = shuffled.into_iter().next()?;
            Montage::Single { item }
        }
        LayoutKind::Pair => Montage::Pair {
            rounded: shuffled.len() == 1,
            items: shuffled.into_iter().take(PAIR_SIZE).collect(),
        },
        LayoutKind::Mosaic => {
            let mut picked = shuffled.into_iter().take(MOSAIC_SIZE);
            let hero = picked.next()?;
            let rest: Vec<MediaItem> = picked.collect();
            Montage::Mosaic {
                hero,
                rest: rest.try_into().ok()?,
            }
        }
    };

    tracing::debug!(
        layout = kind.name(),
        available = items.len(),
        shown = montage.items().len(),
        "selected montage"
    );
    Some(montage)
}
