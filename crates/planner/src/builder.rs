//! Plan assembly: request + layout policy + assets -> ordered op list.
//!
//! Construction is two-phase by design. The builder mints a
//! [`ShapeHandle`] for every `CreateShape` op and threads that handle
//! into the dependent update and animation ops; the executor later
//! links handles to the remote indices returned by shape creation.
//! Nothing here depends on wall-clock time or randomness, so identical
//! inputs always produce structurally identical plans.

use deckforge_core::error::CoreError;
use deckforge_core::geometry::inches_to_points;
use deckforge_core::plan::{
    DeckPlan, FillSpec, LineSpec, PlanOp, ShapeHandle, ShapeKind, ShapeSpec, ShapeUpdate,
    TextStyleSpec,
};
use deckforge_core::request::DeckRequest;

use crate::animation::AnimationPolicy;
use crate::assets::AssetBundle;
use crate::layout::{
    self, IconSlot, MarkerTemplate, RectTemplate, TextBoxTemplate, CARD_GREY, CARD_HEIGHT,
    CARD_WIDTH, CIRCLE_SIZE, DIAMOND_SIZE, FONT_FAMILY, ICON_SIZE, PARA_BOX_HEIGHT,
    PARA_BOX_WIDTH, TEXT_BLACK, TITLE_BOX_HEIGHT, TITLE_BOX_WIDTH, TRANSPARENT,
};

/// The two observed deck layouts, selectable per request.
///
/// They disagree on slide-count policy and on the title page's
/// animation, so neither is collapsed into the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LayoutPolicy {
    /// Always plans exactly three slides, ignoring the requested
    /// count; clones the master theme when a source is configured and
    /// reveals both decorated pages with the bounce cascade.
    FixedThreeSlide,
    /// Honours the validated slide count and uses the fly entrance on
    /// the title page.
    #[default]
    UserCountTemplate,
}

impl LayoutPolicy {
    /// Total slides the deck will have under this policy.
    fn slide_total(self, requested: u32) -> u32 {
        match self {
            LayoutPolicy::FixedThreeSlide => 3,
            LayoutPolicy::UserCountTemplate => requested,
        }
    }

    /// Animation strategy for the title page's text group.
    fn title_page_animation(self) -> AnimationPolicy {
        match self {
            LayoutPolicy::FixedThreeSlide => AnimationPolicy::BounceCascade,
            LayoutPolicy::UserCountTemplate => AnimationPolicy::FlyEntrance,
        }
    }

    /// Whether this layout clones a master theme when one is available.
    fn wants_theme(self) -> bool {
        matches!(self, LayoutPolicy::FixedThreeSlide)
    }

    /// Parse the form's layout field. `None`/empty falls back to the
    /// given default.
    pub fn from_form_field(
        raw: Option<&str>,
        default: LayoutPolicy,
    ) -> Result<LayoutPolicy, CoreError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(default),
            Some("fixed-three") => Ok(LayoutPolicy::FixedThreeSlide),
            Some("user-count") => Ok(LayoutPolicy::UserCountTemplate),
            Some(other) => Err(CoreError::validation(
                "layout",
                format!("unknown layout '{other}', expected fixed-three or user-count"),
            )),
        }
    }
}

/// Build the full deck plan for one validated request.
///
/// Fails only if the asset bundle is structurally incomplete (fewer
/// card icons than the layout has slots); all other asset decisions
/// (logo, theme, user image) degrade to skipping the overlay.
pub fn build_plan(
    request: &DeckRequest,
    policy: LayoutPolicy,
    assets: &AssetBundle,
) -> Result<DeckPlan, CoreError> {
    if assets.icons.len() != layout::SLIDE2_ICON_SLOTS.len() {
        return Err(CoreError::AssetMissing(format!(
            "expected {} card icons, got {}",
            layout::SLIDE2_ICON_SLOTS.len(),
            assets.icons.len()
        )));
    }

    let total = policy.slide_total(request.slide_count);
    // Slides carrying the fixed template; later slides stay blank.
    let decorated = total.min(2);

    let mut plan = DeckPlan::new(request.name.clone());
    plan.push(PlanOp::CreatePresentation);
    plan.push(PlanOp::SetSlideProperties(layout::PAGE_SETUP));

    if policy.wants_theme() {
        if let Some(theme) = &assets.theme {
            plan.push(PlanOp::CopyMasterSlide {
                source_path: theme.source_path.clone(),
                source_slide: theme.source_slide,
                apply_to_all: theme.apply_to_all,
            });
        }
    }

    // Presentation creation yields slide 1.
    for _ in 1..total {
        plan.push(PlanOp::CreateSlide);
    }

    // Uploaded image goes underneath the template shapes.
    if let Some(image) = &assets.user_image {
        for slide in 1..=decorated {
            plan.add_shape(slide, picture_frame(layout::USER_IMAGE_FRAME, image));
        }
    }

    build_title_page(&mut plan, policy.title_page_animation());
    if decorated >= 2 {
        build_card_page(&mut plan, assets);
    }

    // Logo sits on top of everything else.
    if let Some(logo) = &assets.logo {
        for slide in 1..=decorated {
            plan.add_shape(slide, picture_frame(layout::LOGO_FRAME, logo));
        }
    }

    debug_assert!(plan.verify_references().is_ok());
    Ok(plan)
}

// ---------------------------------------------------------------------------
// Page assembly
// ---------------------------------------------------------------------------

/// Slide 1: three accent rectangles and the three title text boxes,
/// animated per the selected policy.
fn build_title_page(plan: &mut DeckPlan, animation: AnimationPolicy) {
    for rect in &layout::SLIDE1_RECTANGLES {
        plan.add_shape(1, solid_rect(rect));
    }

    let mut text_handles = Vec::with_capacity(layout::SLIDE1_TEXT_BOXES.len());
    for template in &layout::SLIDE1_TEXT_BOXES {
        text_handles.push(push_text_box(plan, 1, template));
    }

    push_animation(plan, 1, animation.assemble(&text_handles));
}

/// Slide 2: banner rectangles, the timeline (divider, circles,
/// diamonds, icon frames), and the four cards with their title and
/// paragraph boxes, all revealed by the bounce cascade.
fn build_card_page(plan: &mut DeckPlan, assets: &AssetBundle) {
    for rect in &layout::SLIDE2_BANNERS {
        plan.add_shape(2, solid_rect(rect));
    }
    plan.add_shape(2, solid_rect(&layout::SLIDE2_DIVIDER));

    for marker in &layout::SLIDE2_CIRCLES {
        plan.add_shape(2, marker_shape(ShapeKind::Ellipse, marker, CIRCLE_SIZE));
    }
    for marker in &layout::SLIDE2_DIAMONDS {
        plan.add_shape(2, marker_shape(ShapeKind::Diamond, marker, DIAMOND_SIZE));
    }
    for (slot, icon) in layout::SLIDE2_ICON_SLOTS.iter().zip(&assets.icons) {
        plan.add_shape(2, icon_frame(slot, icon));
    }

    // Cards, then their text, in the order the cascade reveals them.
    let mut cascade = Vec::with_capacity(12);
    for &(x, y) in &layout::SLIDE2_CARDS {
        cascade.push(plan.add_shape(
            2,
            ShapeSpec {
                kind: ShapeKind::Rectangle,
                x: inches_to_points(x),
                y: inches_to_points(y),
                width: inches_to_points(CARD_WIDTH),
                height: inches_to_points(CARD_HEIGHT),
                fill: FillSpec::Solid(CARD_GREY.into()),
                line: LineSpec::hairline(TRANSPARENT),
                text: None,
                alignment: None,
            },
        ));
    }

    for &(x, y) in &layout::SLIDE2_TITLE_BOXES {
        let template = TextBoxTemplate {
            text: layout::TITLE_TEXT,
            x,
            y,
            width: TITLE_BOX_WIDTH,
            height: TITLE_BOX_HEIGHT,
            font_size: layout::TITLE_FONT_SIZE,
            bold: true,
            alignment: deckforge_core::plan::ParagraphAlignment::Center,
            anchor: deckforge_core::plan::TextAnchor::Center,
        };
        cascade.push(push_text_box(plan, 2, &template));
    }

    for &(x, y) in &layout::SLIDE2_PARA_BOXES {
        let template = TextBoxTemplate {
            text: layout::PARA_TEXT,
            x,
            y,
            width: PARA_BOX_WIDTH,
            height: PARA_BOX_HEIGHT,
            font_size: layout::PARA_FONT_SIZE,
            bold: false,
            alignment: deckforge_core::plan::ParagraphAlignment::Left,
            anchor: deckforge_core::plan::TextAnchor::Top,
        };
        cascade.push(push_text_box(plan, 2, &template));
    }

    push_animation(plan, 2, AnimationPolicy::BounceCascade.assemble(&cascade));
}

// ---------------------------------------------------------------------------
// Shape construction helpers
// ---------------------------------------------------------------------------

fn solid_rect(rect: &RectTemplate) -> ShapeSpec {
    ShapeSpec {
        kind: ShapeKind::Rectangle,
        x: inches_to_points(rect.x),
        y: inches_to_points(rect.y),
        width: inches_to_points(rect.width),
        height: inches_to_points(rect.height),
        fill: FillSpec::Solid(rect.color.into()),
        line: LineSpec::hairline(rect.color),
        text: Some(String::new()),
        alignment: None,
    }
}

fn marker_shape(kind: ShapeKind, marker: &MarkerTemplate, size: f64) -> ShapeSpec {
    ShapeSpec {
        kind,
        x: inches_to_points(marker.x),
        y: inches_to_points(marker.y),
        width: inches_to_points(size),
        height: inches_to_points(size),
        fill: FillSpec::Solid(marker.color.into()),
        line: LineSpec::hairline(marker.color),
        text: Some(String::new()),
        alignment: None,
    }
}

fn icon_frame(slot: &IconSlot, icon_base64: &str) -> ShapeSpec {
    ShapeSpec {
        kind: ShapeKind::OleIconFrame,
        x: inches_to_points(slot.x),
        y: inches_to_points(slot.y),
        width: inches_to_points(ICON_SIZE),
        height: inches_to_points(ICON_SIZE),
        fill: FillSpec::Picture(icon_base64.into()),
        line: LineSpec::hairline(TRANSPARENT),
        text: None,
        alignment: None,
    }
}

fn picture_frame(frame: (f64, f64, f64, f64), base64: &str) -> ShapeSpec {
    let (x, y, width, height) = frame;
    ShapeSpec {
        kind: ShapeKind::PictureFrame,
        x: inches_to_points(x),
        y: inches_to_points(y),
        width: inches_to_points(width),
        height: inches_to_points(height),
        fill: FillSpec::Picture(base64.into()),
        line: LineSpec::hairline(TRANSPARENT),
        text: None,
        alignment: None,
    }
}

/// Emit the three-step sequence for a text-bearing shape: create with
/// initial text and alignment, anchor the text frame, then style the
/// first portion of the first paragraph. Returns the shape's handle.
fn push_text_box(plan: &mut DeckPlan, slide: u32, template: &TextBoxTemplate) -> ShapeHandle {
    let handle = plan.add_shape(
        slide,
        ShapeSpec {
            kind: ShapeKind::Rectangle,
            x: inches_to_points(template.x),
            y: inches_to_points(template.y),
            width: inches_to_points(template.width),
            height: inches_to_points(template.height),
            fill: FillSpec::NoFill,
            line: LineSpec::hairline(TRANSPARENT),
            text: Some(template.text.to_string()),
            alignment: Some(template.alignment),
        },
    );

    plan.push(PlanOp::UpdateShape {
        slide,
        handle,
        update: ShapeUpdate {
            anchor: template.anchor,
            line: LineSpec::hairline(TRANSPARENT),
        },
    });

    plan.push(PlanOp::UpdateTextPortion {
        slide,
        handle,
        paragraph: 1,
        portion: 1,
        style: TextStyleSpec {
            text: template.text.to_string(),
            font_size: template.font_size,
            font_family: FONT_FAMILY.into(),
            bold: template.bold,
            color: TEXT_BLACK.into(),
            justification: template.alignment,
        },
    });

    handle
}

fn push_animation(
    plan: &mut DeckPlan,
    slide: u32,
    effects: Vec<deckforge_core::plan::AnimationEffect>,
) {
    if !effects.is_empty() {
        plan.push(PlanOp::SetAnimation { slide, effects });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use deckforge_core::plan::{EffectKind, Trigger};

    fn request(count: u32, image: Option<Vec<u8>>) -> DeckRequest {
        DeckRequest {
            name: "Deck.pptx".into(),
            slide_count: count,
            image,
        }
    }

    fn bundle() -> AssetBundle {
        AssetBundle {
            icons: vec!["aWNvbg==".into(); 4],
            logo: None,
            user_image: None,
            theme: None,
        }
    }

    fn animation_on(plan: &DeckPlan, slide: u32) -> Option<&Vec<deckforge_core::plan::AnimationEffect>> {
        plan.ops().iter().find_map(|op| match op {
            PlanOp::SetAnimation { slide: s, effects } if *s == slide => Some(effects),
            _ => None,
        })
    }

    // -- End-to-end shape counts for the two-slide template --

    #[test]
    fn two_slide_deck_matches_fixed_template() {
        let plan =
            build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &bundle()).unwrap();

        assert_eq!(
            plan.ops()
                .iter()
                .filter(|op| matches!(op, PlanOp::CreatePresentation))
                .count(),
            1
        );
        assert_eq!(plan.slide_create_count(), 1);
        // 3 rectangles + 3 text boxes.
        assert_eq!(plan.shape_count_on(1), 6);
        // 4 banners + divider + 4 circles + 4 diamonds + 4 icons
        // + 4 cards + 4 titles + 4 paragraphs.
        assert_eq!(plan.shape_count_on(2), 29);
        assert!(plan.verify_references().is_ok());
    }

    #[test]
    fn title_page_uses_fly_entrance() {
        let plan =
            build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &bundle()).unwrap();
        let effects = animation_on(&plan, 1).unwrap();
        assert_eq!(effects.len(), 2);
        assert!(effects
            .iter()
            .all(|e| matches!(e.kind, EffectKind::Fly(_))));
        assert!(effects.iter().all(|e| e.trigger == Trigger::OnClick));
    }

    #[test]
    fn card_page_cascade_has_twelve_effects() {
        let plan =
            build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &bundle()).unwrap();
        let effects = animation_on(&plan, 2).unwrap();
        assert_eq!(effects.len(), 12);
        assert_eq!(effects[0].trigger, Trigger::OnClick);
        assert!(effects[1..]
            .iter()
            .all(|e| e.trigger == Trigger::WithPrevious));
        assert!(effects.iter().all(|e| matches!(e.kind, EffectKind::Bounce)));
    }

    #[test]
    fn page_setup_follows_presentation_creation() {
        let plan =
            build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &bundle()).unwrap();
        assert_matches!(&plan.ops()[0], PlanOp::CreatePresentation);
        assert_matches!(
            &plan.ops()[1],
            PlanOp::SetSlideProperties(props) if *props == layout::PAGE_SETUP
        );
        // Nothing lands on the canvas before it is sized.
        let setup = plan
            .ops()
            .iter()
            .position(|op| matches!(op, PlanOp::SetSlideProperties(_)))
            .unwrap();
        let first_shape = plan
            .ops()
            .iter()
            .position(|op| matches!(op, PlanOp::CreateShape { .. }))
            .unwrap();
        assert!(setup < first_shape);
    }

    // -- Slide-count policies --

    #[test]
    fn user_count_policy_honours_requested_count() {
        let plan =
            build_plan(&request(5, None), LayoutPolicy::UserCountTemplate, &bundle()).unwrap();
        assert_eq!(plan.slide_create_count(), 4);
    }

    #[test]
    fn single_slide_deck_skips_card_page() {
        let plan =
            build_plan(&request(1, None), LayoutPolicy::UserCountTemplate, &bundle()).unwrap();
        assert_eq!(plan.slide_create_count(), 0);
        assert_eq!(plan.shape_count_on(2), 0);
        assert!(animation_on(&plan, 2).is_none());
    }

    #[test]
    fn fixed_three_policy_ignores_requested_count() {
        let plan =
            build_plan(&request(7, None), LayoutPolicy::FixedThreeSlide, &bundle()).unwrap();
        assert_eq!(plan.slide_create_count(), 2);
    }

    #[test]
    fn fixed_three_title_page_uses_bounce() {
        let plan =
            build_plan(&request(2, None), LayoutPolicy::FixedThreeSlide, &bundle()).unwrap();
        let effects = animation_on(&plan, 1).unwrap();
        assert_eq!(effects.len(), 3);
        assert!(effects.iter().all(|e| matches!(e.kind, EffectKind::Bounce)));
    }

    // -- Overlays --

    #[test]
    fn theme_copied_only_for_fixed_layout_with_source() {
        let mut assets = bundle();
        assets.theme = Some(crate::assets::ThemeSource {
            source_path: "themes/Reference.pptx".into(),
            source_slide: 1,
            apply_to_all: true,
        });

        let fixed =
            build_plan(&request(2, None), LayoutPolicy::FixedThreeSlide, &assets).unwrap();
        assert!(fixed
            .ops()
            .iter()
            .any(|op| matches!(op, PlanOp::CopyMasterSlide { .. })));

        let counted =
            build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &assets).unwrap();
        assert!(!counted
            .ops()
            .iter()
            .any(|op| matches!(op, PlanOp::CopyMasterSlide { .. })));
    }

    #[test]
    fn uploaded_image_overlays_decorated_slides_before_shapes() {
        let mut assets = bundle();
        assets.user_image = Some("aW1n".into());
        let plan =
            build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &assets).unwrap();

        // One extra picture frame per decorated slide.
        assert_eq!(plan.shape_count_on(1), 7);
        assert_eq!(plan.shape_count_on(2), 30);

        // The first created shape is the slide-1 picture frame.
        let first = plan.ops().iter().find_map(|op| match op {
            PlanOp::CreateShape { spec, .. } => Some(spec),
            _ => None,
        });
        assert_matches!(
            first,
            Some(ShapeSpec { kind: ShapeKind::PictureFrame, .. })
        );
    }

    #[test]
    fn logo_overlay_comes_after_animations() {
        let mut assets = bundle();
        assets.logo = Some("bG9nbw==".into());
        let plan =
            build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &assets).unwrap();

        let last_animation = plan
            .ops()
            .iter()
            .rposition(|op| matches!(op, PlanOp::SetAnimation { .. }))
            .unwrap();
        let first_logo = plan
            .ops()
            .iter()
            .position(|op| {
                matches!(
                    op,
                    PlanOp::CreateShape {
                        spec: ShapeSpec { kind: ShapeKind::PictureFrame, .. },
                        ..
                    }
                )
            })
            .unwrap();
        assert!(first_logo > last_animation);
    }

    // -- Structural properties --

    #[test]
    fn missing_icons_fail_fast() {
        let assets = AssetBundle::default();
        let err = build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &assets)
            .unwrap_err();
        assert_matches!(err, CoreError::AssetMissing(_));
    }

    #[test]
    fn planning_is_deterministic() {
        let req = request(3, Some(vec![1, 2, 3]));
        let mut assets = bundle();
        assets.user_image = Some("AQID".into());
        let a = build_plan(&req, LayoutPolicy::UserCountTemplate, &assets).unwrap();
        let b = build_plan(&req, LayoutPolicy::UserCountTemplate, &assets).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn every_text_box_gets_the_three_step_sequence() {
        let plan =
            build_plan(&request(2, None), LayoutPolicy::UserCountTemplate, &bundle()).unwrap();
        let updates = plan
            .ops()
            .iter()
            .filter(|op| matches!(op, PlanOp::UpdateShape { .. }))
            .count();
        let portions = plan
            .ops()
            .iter()
            .filter(|op| matches!(op, PlanOp::UpdateTextPortion { .. }))
            .count();
        // 3 title-page boxes + 4 card titles + 4 card paragraphs.
        assert_eq!(updates, 11);
        assert_eq!(portions, 11);
    }

    #[test]
    fn layout_form_field_parses_both_variants() {
        assert_eq!(
            LayoutPolicy::from_form_field(Some("fixed-three"), LayoutPolicy::UserCountTemplate)
                .unwrap(),
            LayoutPolicy::FixedThreeSlide
        );
        assert_eq!(
            LayoutPolicy::from_form_field(None, LayoutPolicy::FixedThreeSlide).unwrap(),
            LayoutPolicy::FixedThreeSlide
        );
        assert!(LayoutPolicy::from_form_field(
            Some("spiral"),
            LayoutPolicy::UserCountTemplate
        )
        .is_err());
    }
}
