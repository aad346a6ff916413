//! HTML rendering for the montage.
//!
//! Uses [maud](https://maud.lambda.xyz/) like the rest of the crate's output:
//! compile-time checked markup with automatic escaping of item URLs and ids.
//!
//! ## Markup
//!
//! ```text
//! div.montage.montage-mosaic
//! ├── div.montage-cell.hero   data-key=…  → img (fill, cover)
//! ├── div.montage-cell        data-key=…  → img
//! └── …
//! ```
//!
//! Images use a fill layout: the cell is `position: relative` and the `<img>`
//! covers it. Responsive cells get a `srcset` built by calling the loader at
//! every configured width; the mobile loader pins one width, so its images
//! carry a plain `src`.

use crate::config::{ImagesConfig, MontageConfig};
use crate::layout::{self, Montage};
use crate::loader::{CdnLoader, ImageLoader, LoaderProps, MobileLoader};
use crate::shuffle::Shuffler;
use crate::types::MediaItem;
use crate::viewport::Viewport;
use maud::{DOCTYPE, Markup, html};

const CSS: &str = include_str!("../static/montage.css");

/// How an image fills its cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ObjectFit {
    #[default]
    Cover,
    Contain,
    Fill,
}

impl ObjectFit {
    pub fn as_css(self) -> &'static str {
        match self {
            ObjectFit::Cover => "cover",
            ObjectFit::Contain => "contain",
            ObjectFit::Fill => "fill",
        }
    }
}

/// Inputs to the image primitive.
pub struct ImageProps<'a> {
    pub source: &'a str,
    /// Responsive width policy, emitted as the `sizes` attribute.
    pub sizes: &'a str,
    pub object_fit: ObjectFit,
    /// Above-the-fold placement: load eagerly at high priority.
    pub priority: bool,
    pub quality: Option<u32>,
    pub loader: &'a dyn ImageLoader,
}

/// Render one fill-layout `<img>`.
pub fn render_image(props: &ImageProps<'_>, images: &ImagesConfig) -> Markup {
    let url_at = |width: u32| {
        props.loader.url(&LoaderProps {
            src: props.source,
            width,
            quality: props.quality,
        })
    };

    let src = url_at(props.loader.fixed_width().unwrap_or(images.max_width()));
    let srcset = match props.loader.fixed_width() {
        Some(_) => None,
        None => Some(
            images
                .sorted_widths()
                .into_iter()
                .map(|w| format!("{} {}w", url_at(w), w))
                .collect::<Vec<_>>()
                .join(", "),
        ),
    };

    let style = format!(
        "position:absolute;inset:0;width:100%;height:100%;object-fit:{}",
        props.object_fit.as_css()
    );
    let loading = if props.priority { "eager" } else { "lazy" };

    html! {
        img src=(src) srcset=[srcset] sizes=(props.sizes) alt="" style=(style)
            loading=(loading) fetchpriority=[props.priority.then_some("high")] decoding="async";
    }
}

/// Render the cells of a selected montage.
pub fn render_montage(montage: &Montage, is_hero: bool, config: &MontageConfig) -> Markup {
    let base_url = config.cdn.base_url.as_str();
    let quality = Some(config.images.quality);
    let responsive = CdnLoader::new(base_url);
    let mobile = MobileLoader::new(base_url);

    let cell_image = |item: &MediaItem| {
        render_image(
            &ImageProps {
                source: &item.url,
                sizes: "50vw",
                object_fit: ObjectFit::Cover,
                priority: is_hero,
                quality,
                loader: &responsive,
            },
            &config.images,
        )
    };

    match montage {
        Montage::Single { item } => html! {
            div.montage.montage-single {
                div.montage-cell data-key=(item.id) {
                    (render_image(
                        &ImageProps {
                            source: &item.url,
                            sizes: "100vw",
                            object_fit: ObjectFit::Cover,
                            priority: is_hero,
                            quality,
                            loader: &mobile,
                        },
                        &config.images,
                    ))
                }
            }
        },
        Montage::Pair { items, rounded } => html! {
            div.montage.montage-pair {
                @for item in items {
                    div.montage-cell.rounded[*rounded] data-key=(item.id) {
                        (cell_image(item))
                    }
                }
            }
        },
        Montage::Mosaic { hero, rest } => html! {
            div.montage.montage-mosaic {
                div.montage-cell.hero data-key=(hero.id) {
                    (cell_image(hero))
                }
                @for item in rest {
                    div.montage-cell data-key=(item.id) {
                        (cell_image(item))
                    }
                }
            }
        },
    }
}

/// Select and render a montage, or `None` when `items` is empty.
pub fn photo_montage<S: Shuffler>(
    items: &[MediaItem],
    is_hero: bool,
    viewport: Viewport,
    shuffler: &mut S,
    config: &MontageConfig,
) -> Option<Markup> {
    let montage = layout::select(items, viewport, shuffler)?;
    Some(render_montage(&montage, is_hero, config))
}

/// Wrap a montage fragment in a standalone HTML document.
pub fn render_document(title: &str, fragment: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (CSS) }
            }
            body {
                (fragment)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shuffle::{Identity, RandomShuffler};

    fn items(n: usize) -> Vec<MediaItem> {
        (0..n)
            .map(|i| MediaItem::new(format!("id-{i}"), format!("/photo-{i}.jpg")))
            .collect()
    }

    fn config() -> MontageConfig {
        let mut config = MontageConfig::default();
        config.cdn.base_url = "https://cdn.x".to_string();
        config.images.widths = vec![640, 1200];
        config
    }

    fn count(html: &str, needle: &str) -> usize {
        html.matches(needle).count()
    }

    // =========================================================================
    // render_image
    // =========================================================================

    #[test]
    fn responsive_image_has_srcset() {
        let loader = CdnLoader::new("https://cdn.x");
        let html = render_image(
            &ImageProps {
                source: "/a.jpg",
                sizes: "50vw",
                object_fit: ObjectFit::Cover,
                priority: false,
                quality: Some(75),
                loader: &loader,
            },
            &config().images,
        )
        .into_string();

        assert!(html.contains(r#"src="https://cdn.x/a.jpg?format=webp&amp;w=1200&amp;q=75""#));
        assert!(html.contains("https://cdn.x/a.jpg?format=webp&amp;w=640&amp;q=75 640w"));
        assert!(html.contains(" 1200w"));
        assert!(html.contains(r#"sizes="50vw""#));
        assert!(html.contains("object-fit:cover"));
    }

    #[test]
    fn mobile_image_has_fixed_src_and_no_srcset() {
        let loader = MobileLoader::new("https://cdn.x");
        let html = render_image(
            &ImageProps {
                source: "/a.jpg",
                sizes: "100vw",
                object_fit: ObjectFit::Cover,
                priority: false,
                quality: None,
                loader: &loader,
            },
            &config().images,
        )
        .into_string();

        assert!(html.contains(r#"src="https://cdn.x/a.jpg?format=webp&amp;w=640&amp;q=90""#));
        assert!(!html.contains("srcset="));
    }

    #[test]
    fn priority_image_loads_eagerly() {
        let loader = CdnLoader::default();
        let props = |priority| ImageProps {
            source: "/a.jpg",
            sizes: "50vw",
            object_fit: ObjectFit::Contain,
            priority,
            quality: None,
            loader: &loader,
        };

        let eager = render_image(&props(true), &config().images).into_string();
        assert!(eager.contains(r#"loading="eager""#));
        assert!(eager.contains(r#"fetchpriority="high""#));
        assert!(eager.contains("object-fit:contain"));

        let lazy = render_image(&props(false), &config().images).into_string();
        assert!(lazy.contains(r#"loading="lazy""#));
        assert!(!lazy.contains("fetchpriority"));
    }

    // =========================================================================
    // photo_montage
    // =========================================================================

    #[test]
    fn empty_list_renders_nothing() {
        let result = photo_montage(&[], true, Viewport::Desktop, &mut Identity, &config());
        assert!(result.is_none());
    }

    #[test]
    fn mobile_renders_single_cell() {
        let html = photo_montage(
            &items(7),
            false,
            Viewport::Mobile,
            &mut RandomShuffler::seeded(2),
            &config(),
        )
        .unwrap()
        .into_string();

        assert!(html.contains("montage-single"));
        assert_eq!(count(&html, "<img"), 1);
        assert!(html.contains("w=640"));
        assert!(html.contains(r#"sizes="100vw""#));
    }

    #[test]
    fn single_item_desktop_is_rounded() {
        let html = photo_montage(&items(1), false, Viewport::Desktop, &mut Identity, &config())
            .unwrap()
            .into_string();

        assert!(html.contains("montage-pair"));
        assert_eq!(count(&html, "<img"), 1);
        assert!(html.contains(r#"class="montage-cell rounded""#));
    }

    #[test]
    fn pair_renders_two_cells_without_rounding() {
        let html = photo_montage(&items(3), false, Viewport::Desktop, &mut Identity, &config())
            .unwrap()
            .into_string();

        assert_eq!(count(&html, "<img"), 2);
        assert!(!html.contains("rounded"));
        assert!(html.contains(r#"data-key="id-0""#));
        assert!(html.contains(r#"data-key="id-1""#));
        assert!(!html.contains(r#"data-key="id-2""#));
    }

    #[test]
    fn mosaic_renders_hero_and_four_cells() {
        let html = photo_montage(&items(8), false, Viewport::Desktop, &mut Identity, &config())
            .unwrap()
            .into_string();

        assert!(html.contains("montage-mosaic"));
        assert_eq!(count(&html, "<img"), 5);
        assert_eq!(count(&html, "montage-cell hero"), 1);
        for i in 0..5 {
            assert!(html.contains(&format!(r#"data-key="id-{i}""#)));
        }
        assert!(!html.contains(r#"data-key="id-5""#));
    }

    #[test]
    fn hero_flag_sets_priority_on_every_image() {
        let html = photo_montage(&items(5), true, Viewport::Desktop, &mut Identity, &config())
            .unwrap()
            .into_string();
        assert_eq!(count(&html, r#"fetchpriority="high""#), 5);
    }

    #[test]
    fn item_urls_are_escaped() {
        let evil = vec![MediaItem::new("x", "/a.jpg\"><script>")];
        let html = photo_montage(&evil, false, Viewport::Desktop, &mut Identity, &config())
            .unwrap()
            .into_string();
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn document_embeds_css() {
        let doc = render_document("Montage", html! { p { "x" } }).into_string();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains(".montage-cell.hero"));
        assert!(doc.contains("<title>Montage</title>"));
    }
}
