use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/**
    Default image resizing service.
*/
pub const DEFAULT_IMAGE_BASE: &str = "https://next-geebee.ft.com";

// Everything except A-Z a-z 0-9 - _ . ! ~ * ' ( )
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/**
    Build a poster URL on the image resizing service.

    The raw image reference is percent-encoded into the path. A non-zero
    `width` asks the service to scale the image down to that width.
*/
pub fn poster_url(image_base: &str, image: &str, width: Option<u32>) -> String {
    let mut url = format!(
        "{}/image/v1/images/raw/{}?source=next",
        image_base.trim_end_matches('/'),
        utf8_percent_encode(image, URI_COMPONENT)
    );
    if let Some(width) = width.filter(|w| *w > 0) {
        url.push_str(&format!("&fit=scale-down&width={}", width));
    }
    url
}

/**
    [`poster_url`] against the default image service.
*/
pub fn update_poster_url(image: &str, width: Option<u32>) -> String {
    poster_url(DEFAULT_IMAGE_BASE, image, width)
}
