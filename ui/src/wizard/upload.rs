//! Upload validation, the uploaded image handle and pin placement.

use thiserror::Error;

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
const JPEG_SIGNATURE: [u8; 3] = [0xFF, 0xD8, 0xFF];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Png,
    Jpeg,
}

impl MediaType {
    pub fn mime(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }

    /// Detect the type from the leading bytes of the file.
    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        if bytes.starts_with(&PNG_SIGNATURE) {
            Some(Self::Png)
        } else if bytes.starts_with(&JPEG_SIGNATURE) {
            Some(Self::Jpeg)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("{name} is empty")]
    Empty { name: String },
    #[error("{name} is not a PNG or JPEG image")]
    UnsupportedType { name: String },
    #[error("{name} could not be read")]
    Unreadable { name: String },
}

/// Accept only PNG and JPEG content. The file name is used for messages only;
/// a renamed text file is still rejected.
pub fn validate_upload(name: &str, bytes: &[u8]) -> Result<MediaType, UploadError> {
    if bytes.is_empty() {
        return Err(UploadError::Empty { name: name.into() });
    }
    MediaType::sniff(bytes).ok_or_else(|| UploadError::UnsupportedType { name: name.into() })
}

/// Handle to an accepted image. `url` is whatever the platform produced for
/// display and must be released once the cycle ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedImage {
    pub name: String,
    pub media_type: MediaType,
    pub byte_len: usize,
    pub url: String,
}

/// Rendered size of the image at the time it was measured, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageFrame {
    pub width: f64,
    pub height: f64,
}

impl ImageFrame {
    /// Negative or non-finite sizes collapse to an empty frame.
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width: finite_or_zero(width).max(0.0),
            height: finite_or_zero(height).max(0.0),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

/// Pin position relative to the image's top-left corner, always inside
/// `frame`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PinCoordinate {
    pub x: f64,
    pub y: f64,
    pub frame: ImageFrame,
}

impl PinCoordinate {
    /// Clamp an image-relative position into the frame.
    pub fn new(x: f64, y: f64, frame: ImageFrame) -> Self {
        Self {
            x: finite_or_zero(x).max(0.0).min(frame.width.max(0.0)),
            y: finite_or_zero(y).max(0.0).min(frame.height.max(0.0)),
            frame,
        }
    }

    /// Translate a viewport click using the image's bounding box origin.
    pub fn from_click(
        client_x: f64,
        client_y: f64,
        image_left: f64,
        image_top: f64,
        frame: ImageFrame,
    ) -> Self {
        Self::new(client_x - image_left, client_y - image_top, frame)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Local state of the upload stage before it hands over to the controller.
///
/// The pin prompt is revealed after a delay. Each accepted image bumps
/// `prompt_token`, so a reveal scheduled for an earlier image is ignored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadDraft {
    image: Option<UploadedImage>,
    pin: Option<PinCoordinate>,
    error: Option<UploadError>,
    prompt_token: u64,
    prompt_visible: bool,
}

impl UploadDraft {
    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn pin(&self) -> Option<PinCoordinate> {
        self.pin
    }

    pub fn error(&self) -> Option<&UploadError> {
        self.error.as_ref()
    }

    /// Token of the most recent acceptance; pass it to [`Self::reveal_prompt`].
    pub fn prompt_token(&self) -> u64 {
        self.prompt_token
    }

    pub fn prompt_visible(&self) -> bool {
        self.prompt_visible && self.image.is_some()
    }

    /// Store a newly accepted image. Any previous image and pin are dropped
    /// and the prompt is hidden until the next reveal; the replaced image is
    /// returned so its URL can be released.
    pub fn accept(&mut self, image: UploadedImage) -> Option<UploadedImage> {
        self.error = None;
        self.pin = None;
        self.prompt_token = self.prompt_token.wrapping_add(1);
        self.prompt_visible = false;
        self.image.replace(image)
    }

    /// Show the pin prompt if `token` still belongs to the current image.
    pub fn reveal_prompt(&mut self, token: u64) -> bool {
        if token != self.prompt_token || self.image.is_none() {
            return false;
        }
        self.prompt_visible = true;
        true
    }

    /// Record a rejection. The current image (if any) stays.
    pub fn reject(&mut self, error: UploadError) {
        self.error = Some(error);
    }

    /// Place the pin. Ignored until an image is shown.
    pub fn place_pin(&mut self, pin: PinCoordinate) -> bool {
        if self.image.is_none() {
            return false;
        }
        self.pin = Some(pin);
        true
    }

    /// Both pieces needed to continue, or `None` when something is missing.
    pub fn ready(&self) -> Option<(UploadedImage, PinCoordinate)> {
        match (&self.image, self.pin) {
            (Some(image), Some(pin)) => Some((image.clone(), pin)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes() -> Vec<u8> {
        let mut bytes = PNG_SIGNATURE.to_vec();
        bytes.extend_from_slice(&[0, 0, 0, 13]);
        bytes
    }

    fn image(name: &str) -> UploadedImage {
        UploadedImage {
            name: name.into(),
            media_type: MediaType::Png,
            byte_len: 12,
            url: format!("blob:{name}"),
        }
    }

    #[test]
    fn png_and_jpeg_are_accepted() {
        assert_eq!(validate_upload("map.png", &png_bytes()), Ok(MediaType::Png));
        assert_eq!(
            validate_upload("scan.jpg", &[0xFF, 0xD8, 0xFF, 0xE0, 0x00]),
            Ok(MediaType::Jpeg)
        );
    }

    #[test]
    fn other_content_is_rejected() {
        assert_eq!(
            validate_upload("notes.png", b"hello world"),
            Err(UploadError::UnsupportedType {
                name: "notes.png".into()
            })
        );
        assert_eq!(
            validate_upload("anim.gif", b"GIF89a...."),
            Err(UploadError::UnsupportedType {
                name: "anim.gif".into()
            })
        );
        assert_eq!(
            validate_upload("empty.png", &[]),
            Err(UploadError::Empty {
                name: "empty.png".into()
            })
        );
    }

    #[test]
    fn click_is_translated_and_clamped() {
        let frame = ImageFrame::new(400.0, 300.0);
        let pin = PinCoordinate::from_click(220.0, 180.0, 100.0, 100.0, frame);
        assert_eq!((pin.x, pin.y), (120.0, 80.0));

        let outside = PinCoordinate::from_click(900.0, 20.0, 100.0, 100.0, frame);
        assert_eq!((outside.x, outside.y), (400.0, 0.0));
        assert!(frame.contains(outside.x, outside.y));
    }

    #[test]
    fn continue_needs_image_and_pin() {
        let mut draft = UploadDraft::default();
        let frame = ImageFrame::new(200.0, 100.0);
        assert!(!draft.place_pin(PinCoordinate::new(5.0, 5.0, frame)));
        assert!(draft.ready().is_none());

        assert!(draft.accept(image("a.png")).is_none());
        assert!(draft.ready().is_none());

        assert!(draft.place_pin(PinCoordinate::new(5.0, 5.0, frame)));
        let (img, pin) = draft.ready().unwrap();
        assert_eq!(img.name, "a.png");
        assert_eq!(pin.x, 5.0);
    }

    #[test]
    fn prompt_stays_hidden_until_revealed() {
        let mut draft = UploadDraft::default();
        draft.accept(image("a.png"));
        assert!(!draft.prompt_visible());

        let token = draft.prompt_token();
        assert!(draft.reveal_prompt(token));
        assert!(draft.prompt_visible());
    }

    #[test]
    fn reveal_for_a_replaced_image_is_ignored() {
        let mut draft = UploadDraft::default();
        draft.accept(image("a.png"));
        let first = draft.prompt_token();

        draft.accept(image("b.png"));
        assert!(!draft.reveal_prompt(first));
        assert!(!draft.prompt_visible());

        assert!(draft.reveal_prompt(draft.prompt_token()));
        assert!(draft.prompt_visible());
    }

    #[test]
    fn replacing_a_shown_image_hides_the_prompt_again() {
        let mut draft = UploadDraft::default();
        draft.accept(image("a.png"));
        draft.reveal_prompt(draft.prompt_token());
        draft.accept(image("b.png"));
        assert!(!draft.prompt_visible());
    }

    #[test]
    fn reveal_without_an_image_does_nothing() {
        let mut draft = UploadDraft::default();
        assert!(!draft.reveal_prompt(draft.prompt_token()));
        assert!(!draft.prompt_visible());
    }

    #[test]
    fn non_finite_input_lands_inside_the_frame() {
        let frame = ImageFrame::new(200.0, 100.0);
        let pin = PinCoordinate::new(f64::NAN, f64::INFINITY, frame);
        assert_eq!((pin.x, pin.y), (0.0, 0.0));
        assert!(frame.contains(pin.x, pin.y));

        let broken = ImageFrame::new(f64::NAN, -5.0);
        assert!(broken.is_empty());
        let clamped = PinCoordinate::new(10.0, 10.0, broken);
        assert_eq!((clamped.x, clamped.y), (0.0, 0.0));
    }

    #[test]
    fn replacing_the_image_returns_old_one_and_clears_pin() {
        let mut draft = UploadDraft::default();
        draft.accept(image("a.png"));
        draft.place_pin(PinCoordinate::new(1.0, 1.0, ImageFrame::new(10.0, 10.0)));
        draft.reject(UploadError::UnsupportedType { name: "x".into() });

        let previous = draft.accept(image("b.png")).unwrap();
        assert_eq!(previous.name, "a.png");
        assert!(draft.pin().is_none());
        assert!(draft.error().is_none());
    }
}
