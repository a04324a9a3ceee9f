use serde::Deserialize;

/// Card background colors, cycled by article position.
pub const PALETTE: [u32; 8] = [
    0x4F46E5, 0xEF4444, 0x10B981, 0xF59E0B, 0x6366F1, 0xEC4899, 0x14B8A6, 0x8B5CF6,
];

/// Parameters of the placeholder-image locator embedded in each article.
///
/// The locator is decorative text: no image service is contacted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PlaceholderImage {
    pub base: String,
    pub width: u32,
    pub height: u32,
    pub font_size: u32,
}

impl Default for PlaceholderImage {
    fn default() -> Self {
        Self {
            base: "/api/placeholder".to_string(),
            width: 300,
            height: 200,
            font_size: 24,
        }
    }
}

impl PlaceholderImage {
    /// Palette color for a 1-based article index.
    pub fn color_for(index: u32) -> u32 {
        PALETTE[(index.saturating_sub(1) as usize) % PALETTE.len()]
    }

    /// Palette color as an `(r, g, b)` triple, for terminal rendering.
    pub fn rgb_for(index: u32) -> (u8, u8, u8) {
        let c = Self::color_for(index);
        ((c >> 16) as u8, (c >> 8) as u8, c as u8)
    }

    /// Build the locator for one article.
    ///
    /// Format: `<base>/<w>/<h>?text=<topic>+<index>&fontsize=<n>&bg=<RRGGBB>`
    pub fn locator(&self, topic: &str, index: u32) -> String {
        format!(
            "{}/{}/{}?text={}+{}&fontsize={}&bg={:06X}",
            self.base.trim_end_matches('/'),
            self.width,
            self.height,
            encode_component(topic),
            index,
            self.font_size,
            Self::color_for(index)
        )
    }
}

/// Percent-encode a URI component.
///
/// Spaces become `%20` rather than `+`, since `+` separates topic and index.
fn encode_component(s: &str) -> String {
    url::form_urlencoded::byte_serialize(s.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_locator_default_format() {
        let image = PlaceholderImage::default();
        assert_eq!(
            image.locator("Weather", 1),
            "/api/placeholder/300/200?text=Weather+1&fontsize=24&bg=4F46E5"
        );
    }

    #[test]
    fn test_palette_cycles_by_index() {
        assert_eq!(PlaceholderImage::color_for(1), 0x4F46E5);
        assert_eq!(PlaceholderImage::color_for(8), 0x8B5CF6);
        assert_eq!(PlaceholderImage::color_for(9), 0x4F46E5);
        assert_eq!(PlaceholderImage::color_for(12), 0xF59E0B);
    }

    #[test]
    fn test_topic_is_encoded() {
        let image = PlaceholderImage::default();
        let locator = image.locator("C++ & Rust", 2);
        assert!(locator.contains("text=C%2B%2B%20%26%20Rust+2&"), "{}", locator);
        assert!(locator.ends_with("bg=EF4444"));
    }

    #[test]
    fn test_custom_parameters() {
        let image = PlaceholderImage {
            base: "https://img.example.com/ph/".to_string(),
            width: 640,
            height: 360,
            font_size: 32,
        };
        assert_eq!(
            image.locator("AI", 3),
            "https://img.example.com/ph/640/360?text=AI+3&fontsize=32&bg=10B981"
        );
    }

    #[test]
    fn test_rgb_for() {
        assert_eq!(PlaceholderImage::rgb_for(2), (0xEF, 0x44, 0x44));
    }
}
