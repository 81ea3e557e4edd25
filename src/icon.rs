use log::warn;

const EMBEDDED_ICON: &[u8] = include_bytes!("../assets/icon.png");

const PLACEHOLDER_SIZE: u32 = 64;
const PLACEHOLDER_BACKGROUND: [u8; 4] = [0, 122, 204, 255];
const PLACEHOLDER_FOREGROUND: [u8; 4] = [255, 255, 255, 255];

/// Decoded RGBA pixels ready for `tray_icon::Icon::from_rgba`.
#[derive(Debug, Clone)]
pub struct IconImage {
    pub rgba: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl IconImage {
    pub fn load() -> Self {
        Self::decode(EMBEDDED_ICON).unwrap_or_else(|e| {
            warn!("Failed to load embedded tray icon: {}", e);
            Self::placeholder()
        })
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, image::ImageError> {
        let image = image::load_from_memory(bytes)?.into_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self {
            rgba: image.into_raw(),
            width,
            height,
        })
    }

    /// Flat blue square with a white square in the middle half.
    pub fn placeholder() -> Self {
        let size = PLACEHOLDER_SIZE;
        let inner = size / 4..=3 * size / 4;
        let mut rgba = Vec::with_capacity((size * size * 4) as usize);
        for y in 0..size {
            for x in 0..size {
                let pixel = if inner.contains(&x) && inner.contains(&y) {
                    PLACEHOLDER_FOREGROUND
                } else {
                    PLACEHOLDER_BACKGROUND
                };
                rgba.extend_from_slice(&pixel);
            }
        }
        Self {
            rgba,
            width: size,
            height: size,
        }
    }

    pub fn into_tray_icon(self) -> Result<tray_icon::Icon, tray_icon::BadIcon> {
        tray_icon::Icon::from_rgba(self.rgba, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(icon: &IconImage, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * icon.width + x) * 4) as usize;
        icon.rgba[i..i + 4].try_into().unwrap()
    }

    #[test]
    fn embedded_icon_decodes() {
        let icon = IconImage::decode(EMBEDDED_ICON).unwrap();
        assert_eq!((icon.width, icon.height), (105, 105));
        assert_eq!(icon.rgba.len(), (105 * 105 * 4) as usize);
    }

    #[test]
    fn garbage_is_decode_error() {
        assert!(IconImage::decode(b"not a png").is_err());
    }

    #[test]
    fn placeholder_is_two_tone() {
        let icon = IconImage::placeholder();
        assert_eq!((icon.width, icon.height), (64, 64));
        assert_eq!(pixel(&icon, 0, 0), PLACEHOLDER_BACKGROUND);
        assert_eq!(pixel(&icon, 15, 32), PLACEHOLDER_BACKGROUND);
        assert_eq!(pixel(&icon, 16, 16), PLACEHOLDER_FOREGROUND);
        assert_eq!(pixel(&icon, 48, 48), PLACEHOLDER_FOREGROUND);
        assert_eq!(pixel(&icon, 49, 48), PLACEHOLDER_BACKGROUND);
    }
}
