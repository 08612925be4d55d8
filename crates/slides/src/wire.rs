//! Wire encoding of plan types into the remote service's JSON DTOs.
//!
//! Kept separate from the HTTP client so the exact request bodies can
//! be asserted in tests without a network.

use deckforge_core::plan::{
    EffectKind, FillSpec, FlyDirection, LineSpec, ParagraphAlignment, ShapeKind, ShapeSpec,
    ShapeUpdate, SlideOrientation, SlideProperties, SlideScaleType, SlideSizeType, TextAnchor,
    TextStyleSpec, Trigger,
};
use serde_json::{json, Value};

use crate::service::ResolvedEffect;

/// 1x1 transparent PNG embedded as the OLE icon frames' dummy file
/// payload; the visible icon comes from the substitute picture.
const EMPTY_PNG_BASE64: &str =
    "iVBORw0KGgoAAAANSUhEUgAAAAEAAAABCAQAAAC1HAwCAAAAC0lEQVR42mNkYAAAAAYAAjCB0C8AAAAASUVORK5CYII=";

/// OLE prog id under which the icon frames are embedded.
const ICON_PROG_ID: &str = "Paint.Picture";

/// Encode a shape creation body.
pub fn shape_to_json(spec: &ShapeSpec) -> Value {
    match spec.kind {
        ShapeKind::Rectangle | ShapeKind::Ellipse | ShapeKind::Diamond => {
            let mut body = json!({
                "type": "Shape",
                "shapeType": geometry_type(spec.kind),
                "x": spec.x,
                "y": spec.y,
                "width": spec.width,
                "height": spec.height,
                "fillFormat": fill_to_json(&spec.fill),
                "lineFormat": line_to_json(&spec.line),
            });
            if let Some(text) = &spec.text {
                body["text"] = json!(text);
            }
            if let Some(alignment) = spec.alignment {
                body["paragraphs"] = json!([{ "alignment": alignment_str(alignment) }]);
            }
            body
        }
        ShapeKind::PictureFrame => json!({
            "type": "PictureFrame",
            "x": spec.x,
            "y": spec.y,
            "width": spec.width,
            "height": spec.height,
            "pictureFillFormat": fill_to_json(&spec.fill),
        }),
        ShapeKind::OleIconFrame => json!({
            "type": "OleObjectFrame",
            "x": spec.x,
            "y": spec.y,
            "width": spec.width,
            "height": spec.height,
            "embeddedFileBase64Data": EMPTY_PNG_BASE64,
            "embeddedFileExtension": "png",
            "objectProgId": ICON_PROG_ID,
            "isObjectIcon": true,
            "substitutePictureFormat": fill_to_json(&spec.fill),
            "substitutePictureTitle": "Icon Preview",
            "lineFormat": line_to_json(&spec.line),
        }),
    }
}

/// Encode the deck's page setup body.
pub fn slide_properties_to_json(properties: &SlideProperties) -> Value {
    json!({
        "Orientation": orientation_str(properties.orientation),
        "ScaleType": scale_type_str(properties.scale_type),
        "SizeType": size_type_str(properties.size_type),
        "Width": properties.width,
        "Height": properties.height,
    })
}

/// Encode a shape update body (text-frame anchoring + outline).
pub fn update_to_json(update: &ShapeUpdate) -> Value {
    json!({
        "type": "Shape",
        "textFrameFormat": { "anchoringType": anchor_str(update.anchor) },
        "lineFormat": line_to_json(&update.line),
    })
}

/// Encode a text-portion styling body.
pub fn style_to_json(style: &TextStyleSpec) -> Value {
    json!({
        "text": style.text,
        "fontHeight": style.font_size,
        "latinFont": style.font_family,
        "fontBold": if style.bold { "True" } else { "False" },
        "fontColor": style.color,
    })
}

/// Encode a slide's main animation sequence.
pub fn animation_to_json(effects: &[ResolvedEffect]) -> Value {
    let sequence: Vec<Value> = effects
        .iter()
        .map(|effect| {
            let mut entry = json!({
                "type": effect_type(effect.kind),
                "presetClassType": "Entrance",
                "shapeIndex": effect.shape_index,
                "triggerType": trigger_str(effect.trigger),
                "acceleration": effect.acceleration,
                "duration": effect.duration,
            });
            if let Some(subtype) = effect_subtype(effect.kind) {
                entry["subtype"] = json!(subtype);
            }
            entry
        })
        .collect();
    json!({ "mainSequence": sequence })
}

// ---------------------------------------------------------------------------
// Enum mappings
// ---------------------------------------------------------------------------

fn geometry_type(kind: ShapeKind) -> &'static str {
    match kind {
        ShapeKind::Rectangle => "Rectangle",
        ShapeKind::Ellipse => "Ellipse",
        ShapeKind::Diamond => "Diamond",
        // Handled by dedicated DTOs above.
        ShapeKind::PictureFrame | ShapeKind::OleIconFrame => unreachable!(),
    }
}

fn fill_to_json(fill: &FillSpec) -> Value {
    match fill {
        FillSpec::Solid(color) => json!({ "type": "Solid", "color": color }),
        FillSpec::NoFill => json!({ "type": "NoFill" }),
        FillSpec::Picture(base64) => json!({
            "type": "Picture",
            "base64Data": base64,
            "pictureFillMode": "Stretch",
        }),
    }
}

fn line_to_json(line: &LineSpec) -> Value {
    json!({
        "style": "Single",
        "width": line.width,
        "fillFormat": { "type": "Solid", "color": line.color },
    })
}

fn orientation_str(orientation: SlideOrientation) -> &'static str {
    match orientation {
        SlideOrientation::Landscape => "Landscape",
        SlideOrientation::Portrait => "Portrait",
    }
}

fn scale_type_str(scale: SlideScaleType) -> &'static str {
    match scale {
        SlideScaleType::DoNotScale => "DoNotScale",
        SlideScaleType::EnsureFit => "EnsureFit",
    }
}

fn size_type_str(size: SlideSizeType) -> &'static str {
    match size {
        SlideSizeType::OnScreen => "OnScreen",
        SlideSizeType::Widescreen => "WideScreen",
    }
}

fn alignment_str(alignment: ParagraphAlignment) -> &'static str {
    match alignment {
        ParagraphAlignment::Left => "Left",
        ParagraphAlignment::Center => "Center",
    }
}

fn anchor_str(anchor: TextAnchor) -> &'static str {
    match anchor {
        TextAnchor::Top => "Top",
        TextAnchor::Center => "Center",
        TextAnchor::Bottom => "Bottom",
    }
}

fn effect_type(kind: EffectKind) -> &'static str {
    match kind {
        EffectKind::Fly(_) => "Fly",
        EffectKind::Bounce => "Bounce",
    }
}

fn effect_subtype(kind: EffectKind) -> Option<&'static str> {
    match kind {
        EffectKind::Fly(FlyDirection::Bottom) => Some("Bottom"),
        EffectKind::Fly(FlyDirection::Right) => Some("Right"),
        EffectKind::Bounce => None,
    }
}

fn trigger_str(trigger: Trigger) -> &'static str {
    match trigger {
        Trigger::OnClick => "OnClick",
        Trigger::WithPrevious => "WithPrevious",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_rectangle_body() {
        let spec = ShapeSpec {
            kind: ShapeKind::Rectangle,
            x: 0.0,
            y: 136.08,
            width: 51.12,
            height: 154.08,
            fill: FillSpec::Solid("#FFFFCA08".into()),
            line: LineSpec::hairline("#FFFFCA08"),
            text: Some(String::new()),
            alignment: None,
        };
        let body = shape_to_json(&spec);
        assert_eq!(body["type"], "Shape");
        assert_eq!(body["shapeType"], "Rectangle");
        assert_eq!(body["fillFormat"]["type"], "Solid");
        assert_eq!(body["fillFormat"]["color"], "#FFFFCA08");
        assert_eq!(body["lineFormat"]["width"], 0.0);
        assert_eq!(body["text"], "");
        assert!(body.get("paragraphs").is_none());
    }

    #[test]
    fn text_box_body_carries_alignment() {
        let spec = ShapeSpec {
            kind: ShapeKind::Rectangle,
            x: 398.16,
            y: 23.76,
            width: 509.04,
            height: 284.4,
            fill: FillSpec::NoFill,
            line: LineSpec::hairline("#00000000"),
            text: Some("Title Overview".into()),
            alignment: Some(ParagraphAlignment::Left),
        };
        let body = shape_to_json(&spec);
        assert_eq!(body["fillFormat"]["type"], "NoFill");
        assert_eq!(body["text"], "Title Overview");
        assert_eq!(body["paragraphs"][0]["alignment"], "Left");
    }

    #[test]
    fn picture_frame_body_stretches_fill() {
        let spec = ShapeSpec {
            kind: ShapeKind::PictureFrame,
            x: 0.0,
            y: 0.0,
            width: 307.44,
            height: 540.0,
            fill: FillSpec::Picture("aW1n".into()),
            line: LineSpec::hairline("#00000000"),
            text: None,
            alignment: None,
        };
        let body = shape_to_json(&spec);
        assert_eq!(body["type"], "PictureFrame");
        assert_eq!(body["pictureFillFormat"]["base64Data"], "aW1n");
        assert_eq!(body["pictureFillFormat"]["pictureFillMode"], "Stretch");
    }

    #[test]
    fn ole_icon_frame_body() {
        let spec = ShapeSpec {
            kind: ShapeKind::OleIconFrame,
            x: 152.64,
            y: 170.64,
            width: 38.16,
            height: 38.16,
            fill: FillSpec::Picture("aWNvbg==".into()),
            line: LineSpec::hairline("#00000000"),
            text: None,
            alignment: None,
        };
        let body = shape_to_json(&spec);
        assert_eq!(body["type"], "OleObjectFrame");
        assert_eq!(body["objectProgId"], "Paint.Picture");
        assert_eq!(body["isObjectIcon"], true);
        assert_eq!(body["embeddedFileExtension"], "png");
        assert_eq!(body["substitutePictureFormat"]["base64Data"], "aWNvbg==");
    }

    #[test]
    fn page_setup_body_spells_widescreen() {
        let properties = SlideProperties {
            orientation: SlideOrientation::Landscape,
            scale_type: SlideScaleType::DoNotScale,
            size_type: SlideSizeType::Widescreen,
            width: 960.0,
            height: 720.0,
        };
        let body = slide_properties_to_json(&properties);
        assert_eq!(body["Orientation"], "Landscape");
        assert_eq!(body["ScaleType"], "DoNotScale");
        assert_eq!(body["SizeType"], "WideScreen");
        assert_eq!(body["Width"], 960.0);
        assert_eq!(body["Height"], 720.0);
    }

    #[test]
    fn update_body_anchors_text_frame() {
        let update = ShapeUpdate {
            anchor: TextAnchor::Bottom,
            line: LineSpec::hairline("#00000000"),
        };
        let body = update_to_json(&update);
        assert_eq!(body["textFrameFormat"]["anchoringType"], "Bottom");
        assert_eq!(body["lineFormat"]["fillFormat"]["color"], "#00000000");
    }

    #[test]
    fn style_body_spells_bold_as_string() {
        let style = TextStyleSpec {
            text: "Title Overview".into(),
            font_size: 54.0,
            font_family: "Arial".into(),
            bold: true,
            color: "#FF000000".into(),
            justification: ParagraphAlignment::Left,
        };
        let body = style_to_json(&style);
        assert_eq!(body["fontBold"], "True");
        assert_eq!(body["fontHeight"], 54.0);
        assert_eq!(body["latinFont"], "Arial");
        assert_eq!(body["fontColor"], "#FF000000");
    }

    #[test]
    fn animation_sequence_body() {
        let effects = vec![
            ResolvedEffect {
                shape_index: 4,
                kind: EffectKind::Fly(FlyDirection::Bottom),
                trigger: Trigger::OnClick,
                acceleration: 0.1,
                duration: 1.0,
            },
            ResolvedEffect {
                shape_index: 5,
                kind: EffectKind::Bounce,
                trigger: Trigger::WithPrevious,
                acceleration: 0.1,
                duration: 0.5,
            },
        ];
        let body = animation_to_json(&effects);
        let sequence = body["mainSequence"].as_array().unwrap();
        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence[0]["type"], "Fly");
        assert_eq!(sequence[0]["subtype"], "Bottom");
        assert_eq!(sequence[0]["triggerType"], "OnClick");
        assert_eq!(sequence[0]["shapeIndex"], 4);
        assert_eq!(sequence[1]["type"], "Bounce");
        assert!(sequence[1].get("subtype").is_none());
        assert_eq!(sequence[1]["triggerType"], "WithPrevious");
    }
}
