//! Page chrome: the small view-state helpers around the product grid.
//!
//! Nothing here touches the store. Each helper computes what the page
//! should show for a given input.

use std::time::Duration;

use chrono::Utc;
use rand::Rng;
use rust_decimal::Decimal;
use serde::Serialize;

use gaming_odyssey_core::price::format_amount;

/// Scroll offset (px) past which the navbar turns solid.
pub const NAVBAR_SOLID_AFTER_PX: f64 = 100.0;

/// How long the cart badge stays enlarged after a change.
pub const BADGE_PULSE: Duration = Duration::from_millis(200);

/// Cart count badge in the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CartBadge {
    pub count: u32,
    /// Scale applied on change, reverting to 1 after `pulse_ms`.
    pub pulse_scale: f32,
    pub pulse_ms: u64,
}

impl CartBadge {
    #[must_use]
    pub fn new(count: u32) -> Self {
        Self {
            count,
            pulse_scale: 1.3,
            pulse_ms: u64::try_from(BADGE_PULSE.as_millis()).unwrap_or(u64::MAX),
        }
    }
}

/// Wishlist heart icon state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WishlistIcon {
    Filled,
    Outline,
}

impl WishlistIcon {
    #[must_use]
    pub const fn for_membership(wishlisted: bool) -> Self {
        if wishlisted { Self::Filled } else { Self::Outline }
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Filled => "❤️",
            Self::Outline => "🤍",
        }
    }
}

/// Mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavMenu {
    active: bool,
}

impl NavMenu {
    /// Flip the menu open/closed and return the new state.
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        tracing::debug!(active = self.active, "Mobile menu toggled");
        self.active
    }

    #[must_use]
    pub const fn is_active(self) -> bool {
        self.active
    }
}

/// Navbar background and shadow for a scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavbarStyle {
    pub background: &'static str,
    pub box_shadow: &'static str,
}

impl NavbarStyle {
    const SOLID: Self = Self {
        background: "rgba(26, 26, 46, 1)",
        box_shadow: "0 8px 30px rgba(108, 99, 255, 0.3)",
    };

    const TRANSLUCENT: Self = Self {
        background: "rgba(26, 26, 46, 0.95)",
        box_shadow: "0 4px 20px rgba(108, 99, 255, 0.2)",
    };

    #[must_use]
    pub fn for_scroll(scroll_y: f64) -> Self {
        if scroll_y > NAVBAR_SOLID_AFTER_PX {
            Self::SOLID
        } else {
            Self::TRANSLUCENT
        }
    }
}

/// Positions of every nav link pointing at the current page.
///
/// The page is the last segment of `path`, or `index.html` when that segment
/// is empty. Duplicate links are all marked.
#[must_use]
pub fn active_nav_links(path: &str, links: &[&str]) -> Vec<usize> {
    let current = match path.rsplit('/').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => "index.html",
    };
    links
        .iter()
        .enumerate()
        .filter(|(_, href)| **href == current)
        .map(|(i, _)| i)
        .collect()
}

/// Instruction to smooth-scroll to an element on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollTo {
    pub element_id: String,
    pub behavior: &'static str,
}

/// Smooth-scroll to `element_id` if the page has it; otherwise nothing.
#[must_use]
pub fn smooth_scroll_to(element_id: &str, page_ids: &[&str]) -> Option<ScrollTo> {
    page_ids.contains(&element_id).then(|| ScrollTo {
        element_id: element_id.to_owned(),
        behavior: "smooth",
    })
}

/// `$` followed by the amount with two decimals.
#[must_use]
pub fn format_price(amount: Decimal) -> String {
    format!("${}", format_amount(amount))
}

/// A fresh catalog ID: `PROD-<epoch millis>-<9 lowercase base36 chars>`.
#[must_use]
pub fn generate_product_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
        .collect();
    format!("PROD-{}-{suffix}", Utc::now().timestamp_millis())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_pulse() {
        let badge = CartBadge::new(3);
        assert_eq!(badge.count, 3);
        assert_eq!(badge.pulse_ms, 200);
    }

    #[test]
    fn test_wishlist_icon() {
        assert_eq!(WishlistIcon::for_membership(true).glyph(), "❤️");
        assert_eq!(WishlistIcon::for_membership(false).glyph(), "🤍");
    }

    #[test]
    fn test_nav_menu_toggle() {
        let mut menu = NavMenu::default();
        assert!(menu.toggle());
        assert!(menu.is_active());
        assert!(!menu.toggle());
    }

    #[test]
    fn test_navbar_style_threshold() {
        assert_eq!(NavbarStyle::for_scroll(0.0), NavbarStyle::TRANSLUCENT);
        assert_eq!(NavbarStyle::for_scroll(100.0), NavbarStyle::TRANSLUCENT);
        assert_eq!(NavbarStyle::for_scroll(100.5), NavbarStyle::SOLID);
    }

    #[test]
    fn test_active_nav_links() {
        let links = ["index.html", "products.html", "contact.html"];
        assert_eq!(active_nav_links("/site/products.html", &links), [1]);
        assert_eq!(active_nav_links("/", &links), [0]);
        assert_eq!(active_nav_links("", &links), [0]);
        assert!(active_nav_links("/about.html", &links).is_empty());
    }

    #[test]
    fn test_active_nav_links_marks_every_match() {
        let links = ["index.html", "products.html", "index.html"];
        assert_eq!(active_nav_links("/index.html", &links), [0, 2]);
    }

    #[test]
    fn test_smooth_scroll_to() {
        let ids = ["featured", "newsletter"];
        assert_eq!(
            smooth_scroll_to("newsletter", &ids),
            Some(ScrollTo {
                element_id: "newsletter".to_string(),
                behavior: "smooth",
            })
        );
        assert_eq!(smooth_scroll_to("reviews", &ids), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(5, 0)), "$5.00");
        assert_eq!(format_price(Decimal::new(19_999, 3)), "$20.00");
    }

    #[test]
    fn test_generate_product_id_shape() {
        let id = generate_product_id();
        let mut parts = id.splitn(3, '-');
        assert_eq!(parts.next(), Some("PROD"));
        assert!(parts.next().unwrap().parse::<i64>().is_ok());
        let suffix = parts.next().unwrap();
        assert_eq!(suffix.len(), 9);
        assert!(
            suffix
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
        );
    }
}
