//! Image URL resolution
//!
//! Maps an artwork's stored URL to the URL handed to the image primitive.
//! Sources known not to serve images are swapped for a generated
//! placeholder from an external placeholder service.

/// Substring identifying a cloud-console page rather than an image.
pub const BLOCKED_SOURCE: &str = "console.aws.amazon.com";

/// Placeholder service base URL
pub const PLACEHOLDER_SERVICE: &str = "https://via.placeholder.com";

/// Fixed placeholder dimensions
pub const PLACEHOLDER_SIZE: &str = "400x300";

/// Overlay text colour on placeholders
pub const PLACEHOLDER_TEXT_COLOR: &str = "666666";

/// Background palette, indexed by title length
pub const PLACEHOLDER_COLORS: [&str; 6] = ["f0f9ff", "fef3c7", "fce7f3", "dcfce7", "fef2f2", "f3e8ff"];

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Returns the URL the card should display for `url`.
///
/// ```
/// use gallery_core::resolver::resolve_image_url;
///
/// let url = "https://img.example.com/a.jpg";
/// assert_eq!(resolve_image_url(url, "Sunset 1998"), url);
/// ```
pub fn resolve_image_url(url: &str, title: &str) -> String {
    if is_blocked_source(url) {
        return placeholder_url(title);
    }
    url.to_string()
}

/// Whether `url` points at a location that never serves image bytes
pub fn is_blocked_source(url: &str) -> bool {
    url.contains(BLOCKED_SOURCE)
}

/// Builds the placeholder URL for `title`.
pub fn placeholder_url(title: &str) -> String {
    format!(
        "{}/{}/{}/{}?text={}",
        PLACEHOLDER_SERVICE,
        PLACEHOLDER_SIZE,
        placeholder_color(title),
        PLACEHOLDER_TEXT_COLOR,
        encode_uri_component(title)
    )
}

/// Background colour for `title`, chosen by its length.
///
/// Length is counted in UTF-16 code units so the choice matches what a
/// browser reports for the same title.
pub fn placeholder_color(title: &str) -> &'static str {
    PLACEHOLDER_COLORS[placeholder_color_index(title)]
}

pub fn placeholder_color_index(title: &str) -> usize {
    title.encode_utf16().count() % PLACEHOLDER_COLORS.len()
}

/// Percent-encodes everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z'
            | b'a'..=b'z'
            | b'0'..=b'9'
            | b'-'
            | b'_'
            | b'.'
            | b'!'
            | b'~'
            | b'*'
            | b'\''
            | b'('
            | b')' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push(HEX_UPPER[usize::from(byte >> 4)] as char);
                out.push(HEX_UPPER[usize::from(byte & 0x0F)] as char);
            }
        }
    }
    out
}
