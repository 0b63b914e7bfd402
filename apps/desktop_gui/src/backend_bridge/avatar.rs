//! Avatar decoding on the worker thread; the UI thread only uploads pixels.

const AVATAR_MAX_EDGE: u32 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarImage {
    pub width: usize,
    pub height: usize,
    pub rgba: Vec<u8>,
}

pub fn decode_avatar(bytes: &[u8]) -> Result<AvatarImage, String> {
    let dynamic = image::load_from_memory(bytes).map_err(|err| err.to_string())?;
    let resized = if dynamic.width() > AVATAR_MAX_EDGE || dynamic.height() > AVATAR_MAX_EDGE {
        dynamic.thumbnail(AVATAR_MAX_EDGE, AVATAR_MAX_EDGE).to_rgba8()
    } else {
        dynamic.to_rgba8()
    };
    let width = resized.width() as usize;
    let height = resized.height() as usize;
    Ok(AvatarImage {
        width,
        height,
        rgba: resized.into_raw(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 10, 10, 255]));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .expect("encode png");
        bytes
    }

    #[test]
    fn decodes_small_png_unchanged() {
        let avatar = decode_avatar(&png(8, 4)).expect("decode");
        assert_eq!((avatar.width, avatar.height), (8, 4));
        assert_eq!(avatar.rgba.len(), 8 * 4 * 4);
        assert_eq!(&avatar.rgba[..4], &[200, 10, 10, 255]);
    }

    #[test]
    fn large_avatars_are_scaled_down() {
        let avatar = decode_avatar(&png(1024, 512)).expect("decode");
        assert_eq!((avatar.width, avatar.height), (256, 128));
    }

    #[test]
    fn avatar_at_the_limit_keeps_its_size() {
        let avatar = decode_avatar(&png(256, 100)).expect("decode");
        assert_eq!((avatar.width, avatar.height), (256, 100));
    }

    #[test]
    fn garbage_bytes_report_an_error() {
        assert!(decode_avatar(b"<html>not an image</html>").is_err());
    }
}
