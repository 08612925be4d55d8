//! Fixed layout tables for the two-page deck template.
//!
//! These are design data, not computed values: the exact rectangles,
//! circles, diamonds, icon slots, and text boxes of the template, in
//! inches. The builder converts them to points when it materializes
//! [`ShapeSpec`](deckforge_core::plan::ShapeSpec)s.

use deckforge_core::plan::{
    ParagraphAlignment, SlideOrientation, SlideProperties, SlideScaleType, SlideSizeType,
    TextAnchor,
};

// ---------------------------------------------------------------------------
// Page setup
// ---------------------------------------------------------------------------

/// Widescreen landscape canvas the template was designed for, in
/// points (960 x 720).
pub const PAGE_SETUP: SlideProperties = SlideProperties {
    orientation: SlideOrientation::Landscape,
    scale_type: SlideScaleType::DoNotScale,
    size_type: SlideSizeType::Widescreen,
    width: 960.0,
    height: 720.0,
};

// ---------------------------------------------------------------------------
// Palette
// ---------------------------------------------------------------------------

/// Primary accent, the saturated banner yellow.
pub const ACCENT_YELLOW: &str = "#FFFFCA08";
/// Secondary accent, the lighter banner yellow.
pub const SOFT_YELLOW: &str = "#FFFFDF6B";
/// Card and divider grey.
pub const CARD_GREY: &str = "#FFF2F2F2";
/// Timeline marker violet.
pub const VIOLET: &str = "#FF9641E7";
/// Timeline marker rose.
pub const ROSE: &str = "#FFEF476B";
/// Fully transparent ARGB, used for invisible outlines.
pub const TRANSPARENT: &str = "#00000000";
/// Opaque black for text.
pub const TEXT_BLACK: &str = "#FF000000";

/// Font family for every text portion in the template.
pub const FONT_FAMILY: &str = "Arial";

// ---------------------------------------------------------------------------
// Table row types
// ---------------------------------------------------------------------------

/// A filled rectangle, in inches.
#[derive(Debug, Clone, Copy)]
pub struct RectTemplate {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: &'static str,
}

/// A fixed-size marker (circle or diamond) positioned by its top-left
/// corner, in inches.
#[derive(Debug, Clone, Copy)]
pub struct MarkerTemplate {
    pub x: f64,
    pub y: f64,
    pub color: &'static str,
}

/// A text box with its three-step formatting data, in inches.
#[derive(Debug, Clone, Copy)]
pub struct TextBoxTemplate {
    pub text: &'static str,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub font_size: f64,
    pub bold: bool,
    pub alignment: ParagraphAlignment,
    pub anchor: TextAnchor,
}

/// An icon slot on the card row: position plus the asset file backing
/// it, in inches.
#[derive(Debug, Clone, Copy)]
pub struct IconSlot {
    pub x: f64,
    pub y: f64,
    pub file: &'static str,
}

// ---------------------------------------------------------------------------
// Slide 1: title page
// ---------------------------------------------------------------------------

pub const SLIDE1_RECTANGLES: [RectTemplate; 3] = [
    RectTemplate { x: 0.0, y: 1.89, width: 0.71, height: 2.14, color: ACCENT_YELLOW },
    RectTemplate { x: 0.0, y: 6.68, width: 2.26, height: 0.82, color: ACCENT_YELLOW },
    RectTemplate { x: 4.28, y: 0.0, width: 9.07, height: 4.4, color: ACCENT_YELLOW },
];

pub const SLIDE1_TEXT_BOXES: [TextBoxTemplate; 3] = [
    TextBoxTemplate {
        text: "Title Overview",
        x: 5.53,
        y: 0.33,
        width: 7.07,
        height: 3.95,
        font_size: 54.0,
        bold: true,
        alignment: ParagraphAlignment::Left,
        anchor: TextAnchor::Bottom,
    },
    TextBoxTemplate {
        text: "Enter Overview Details in a Form of Heading",
        x: 5.53,
        y: 4.61,
        width: 7.07,
        height: 1.63,
        font_size: 24.0,
        bold: false,
        alignment: ParagraphAlignment::Left,
        anchor: TextAnchor::Top,
    },
    TextBoxTemplate {
        text: "Presenter Name",
        x: 5.54,
        y: 6.68,
        width: 2.3,
        height: 0.33,
        font_size: 16.0,
        bold: false,
        alignment: ParagraphAlignment::Left,
        anchor: TextAnchor::Center,
    },
];

// ---------------------------------------------------------------------------
// Slide 2: timeline card page
// ---------------------------------------------------------------------------

pub const SLIDE2_BANNERS: [RectTemplate; 4] = [
    RectTemplate { x: 0.0, y: 0.0, width: 8.5, height: 0.38, color: ACCENT_YELLOW },
    RectTemplate { x: 8.4, y: 0.0, width: 4.95, height: 0.38, color: SOFT_YELLOW },
    RectTemplate { x: 0.0, y: 7.12, width: 4.95, height: 0.38, color: SOFT_YELLOW },
    RectTemplate { x: 4.95, y: 7.12, width: 8.4, height: 0.38, color: ACCENT_YELLOW },
];

/// Thin horizontal timeline bar across the full slide width.
pub const SLIDE2_DIVIDER: RectTemplate = RectTemplate {
    x: 0.0,
    y: 2.08,
    width: 13.34,
    height: 0.12,
    color: CARD_GREY,
};

/// Diameter of the timeline circles.
pub const CIRCLE_SIZE: f64 = 0.2;

pub const SLIDE2_CIRCLES: [MarkerTemplate; 4] = [
    MarkerTemplate { x: 2.29, y: 2.05, color: VIOLET },
    MarkerTemplate { x: 5.18, y: 2.05, color: ROSE },
    MarkerTemplate { x: 7.98, y: 2.05, color: VIOLET },
    MarkerTemplate { x: 10.88, y: 2.05, color: ROSE },
];

/// Side length of the timeline diamonds.
pub const DIAMOND_SIZE: f64 = 0.88;

pub const SLIDE2_DIAMONDS: [MarkerTemplate; 4] = [
    MarkerTemplate { x: 1.95, y: 2.21, color: VIOLET },
    MarkerTemplate { x: 4.84, y: 2.21, color: ROSE },
    MarkerTemplate { x: 7.64, y: 2.21, color: VIOLET },
    MarkerTemplate { x: 10.53, y: 2.21, color: ROSE },
];

/// Side length of the icon frames inside the diamonds.
pub const ICON_SIZE: f64 = 0.53;

pub const SLIDE2_ICON_SLOTS: [IconSlot; 4] = [
    IconSlot { x: 2.12, y: 2.37, file: "icon/Icon1.ico" },
    IconSlot { x: 4.94, y: 2.37, file: "icon/Icon2.ico" },
    IconSlot { x: 7.8, y: 2.37, file: "icon/Icon3.ico" },
    IconSlot { x: 10.69, y: 2.37, file: "icon/Icon4.ico" },
];

/// Card body size.
pub const CARD_WIDTH: f64 = 2.66;
pub const CARD_HEIGHT: f64 = 2.79;

/// Top-left corners of the four card rectangles.
pub const SLIDE2_CARDS: [(f64, f64); 4] = [
    (1.05, 3.36),
    (3.93, 3.36),
    (6.76, 3.36),
    (9.64, 3.36),
];

pub const TITLE_BOX_WIDTH: f64 = 2.66;
pub const TITLE_BOX_HEIGHT: f64 = 0.44;
pub const TITLE_TEXT: &str = "Enter Title Here";
pub const TITLE_FONT_SIZE: f64 = 20.0;

/// Top-left corners of the four card title boxes.
pub const SLIDE2_TITLE_BOXES: [(f64, f64); 4] = [
    (1.07, 3.55),
    (3.93, 3.55),
    (6.76, 3.55),
    (9.64, 3.55),
];

pub const PARA_BOX_WIDTH: f64 = 1.95;
pub const PARA_BOX_HEIGHT: f64 = 0.81;
pub const PARA_TEXT: &str = "Paragraph for the description is placed here.....";
pub const PARA_FONT_SIZE: f64 = 14.0;

/// Top-left corners of the four card paragraph boxes.
pub const SLIDE2_PARA_BOXES: [(f64, f64); 4] = [
    (1.37, 4.11),
    (4.28, 4.11),
    (7.11, 4.11),
    (9.99, 4.11),
];

// ---------------------------------------------------------------------------
// Overlays
// ---------------------------------------------------------------------------

/// Logo frame position and size, in inches.
pub const LOGO_FRAME: (f64, f64, f64, f64) = (0.1, 0.1, 1.03, 0.9);

/// Uploaded-image frame: left half of the slide, full height, in inches.
pub const USER_IMAGE_FRAME: (f64, f64, f64, f64) = (0.0, 0.0, 4.27, 7.5);
