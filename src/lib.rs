//! # Photo Montage
//!
//! A responsive photo montage for the top of a page: give it a list of media
//! items and it picks a layout for the viewport, randomizes which photos show,
//! and renders HTML whose images point at a CDN with `format=webp`, width and
//! quality query parameters.
//!
//! ```text
//! items ─▶ layout::select ─▶ Montage ─▶ montage::render_montage ─▶ HTML
//!              │                                   │
//!          Shuffler                          ImageLoader (CDN URL)
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`layout`] | Pure `(count, viewport) → LayoutKind` mapping and item selection |
//! | [`shuffle`] | Uniform permutations behind the injectable [`shuffle::Shuffler`] trait |
//! | [`loader`] | CDN URL builders: responsive (width-driven) and mobile (fixed 640px) |
//! | [`montage`] | Maud rendering of the image primitive and the three templates |
//! | [`viewport`] | Mobile/desktop classification from a flag or a pixel width |
//! | [`types`] | `MediaItem`, JSON loading and id validation |
//! | [`config`] | `config.toml` loading, merging over stock defaults, validation |
//! | [`output`] | CLI output formatting |
//!
//! # Layouts
//!
//! - **Mobile**: one random photo, full-bleed, always requested at 640px.
//! - **Desktop, 1–4 photos**: the first two of a shuffled list side by side.
//!   A lone photo renders in one cell with rounded corners.
//! - **Desktop, 5+ photos**: a 2×2 hero cell plus four regular cells.
//!
//! Pass `is_hero = true` when the montage sits above the fold: every image
//! then loads eagerly with `fetchpriority="high"`.

pub mod config;
pub mod layout;
pub mod loader;
pub mod montage;
pub mod output;
pub mod shuffle;
pub mod types;
pub mod viewport;

pub use montage::photo_montage;
