//! The deck plan: an ordered list of drawing operations.
//!
//! A [`DeckPlan`] is produced once per request by the planner and
//! consumed by the execution driver, which sends each operation to the
//! remote slides service strictly in order.
//!
//! Shape identifiers are only known after the remote service creates a
//! shape, so the plan never contains remote indices. Instead every
//! `CreateShape` op carries a [`ShapeHandle`] minted by the plan, and
//! dependent update/animation ops reference that handle. The executor
//! resolves handles to remote indices as creations complete.

use serde::Serialize;

/// Plan-local key for a shape whose remote index is resolved during
/// execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ShapeHandle(pub usize);

/// Geometric kind of a shape, mirroring the remote service's types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
    Diamond,
    /// Stretched picture fill (uploaded image or logo overlay).
    PictureFrame,
    /// OLE object frame rendered as an icon with a substitute picture.
    OleIconFrame,
}

/// Fill formatting for a shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum FillSpec {
    /// Solid ARGB color, `#AARRGGBB`.
    Solid(String),
    NoFill,
    /// Stretched picture fill from base64-encoded image data.
    Picture(String),
}

/// Outline formatting. Every shape in the fixed layouts uses a
/// zero-width line, either matching the fill or fully transparent.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSpec {
    /// ARGB color, `#AARRGGBB`.
    pub color: String,
    pub width: f64,
}

impl LineSpec {
    /// Zero-width line of the given color.
    pub fn hairline(color: impl Into<String>) -> Self {
        LineSpec {
            color: color.into(),
            width: 0.0,
        }
    }
}

/// Horizontal paragraph alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ParagraphAlignment {
    Left,
    Center,
}

/// Vertical anchoring of a shape's text frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TextAnchor {
    Top,
    Center,
    Bottom,
}

/// A fully resolved shape to create. Geometry is in points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeSpec {
    pub kind: ShapeKind,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: FillSpec,
    pub line: LineSpec,
    /// Initial text content, if the shape carries text.
    pub text: Option<String>,
    pub alignment: Option<ParagraphAlignment>,
}

/// Second step of the text sequence: text-frame anchoring plus a
/// transparent outline on the existing shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeUpdate {
    pub anchor: TextAnchor,
    pub line: LineSpec,
}

/// Third step of the text sequence: formatting for the first text
/// portion of the first paragraph.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextStyleSpec {
    pub text: String,
    pub font_size: f64,
    pub font_family: String,
    pub bold: bool,
    /// ARGB font color.
    pub color: String,
    pub justification: ParagraphAlignment,
}

/// Entrance effect kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EffectKind {
    /// Fly in from the given direction.
    Fly(FlyDirection),
    Bounce,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FlyDirection {
    Bottom,
    Right,
}

/// Page orientation of the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlideOrientation {
    Landscape,
    Portrait,
}

/// How existing content scales when the page size changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlideScaleType {
    DoNotScale,
    EnsureFit,
}

/// Named page-size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SlideSizeType {
    OnScreen,
    Widescreen,
}

/// Page setup for the whole deck, applied once before any shape is
/// placed. Dimensions are in points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SlideProperties {
    pub orientation: SlideOrientation,
    pub scale_type: SlideScaleType,
    pub size_type: SlideSizeType,
    pub width: f64,
    pub height: f64,
}

/// When an effect starts relative to the click or the prior effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Trigger {
    OnClick,
    WithPrevious,
}

/// One entrance effect in a slide's main animation sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnimationEffect {
    pub shape: ShapeHandle,
    pub kind: EffectKind,
    pub trigger: Trigger,
    pub acceleration: f64,
    pub duration: f64,
}

/// A single remote drawing operation.
///
/// Slide indices are 1-based, matching the remote service.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum PlanOp {
    CreatePresentation,
    /// Apply the deck's page setup. Emitted once, directly after
    /// `CreatePresentation`, so the fixed layout's geometry lands on
    /// the canvas it was designed for.
    SetSlideProperties(SlideProperties),
    /// Clone a master slide from a reference document into the target,
    /// optionally applying it to every slide.
    CopyMasterSlide {
        source_path: String,
        source_slide: u32,
        apply_to_all: bool,
    },
    /// Append one slide. The presentation starts with slide 1, so a
    /// deck of N slides needs N-1 of these.
    CreateSlide,
    CreateShape {
        slide: u32,
        handle: ShapeHandle,
        spec: ShapeSpec,
    },
    UpdateShape {
        slide: u32,
        handle: ShapeHandle,
        update: ShapeUpdate,
    },
    UpdateTextPortion {
        slide: u32,
        handle: ShapeHandle,
        paragraph: u32,
        portion: u32,
        style: TextStyleSpec,
    },
    SetAnimation {
        slide: u32,
        effects: Vec<AnimationEffect>,
    },
}

/// Ordered sequence of drawing operations for one deck request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeckPlan {
    /// Target presentation file name.
    pub name: String,
    ops: Vec<PlanOp>,
    next_handle: usize,
}

impl DeckPlan {
    pub fn new(name: impl Into<String>) -> Self {
        DeckPlan {
            name: name.into(),
            ops: Vec::new(),
            next_handle: 0,
        }
    }

    /// Append an operation that does not mint a shape handle.
    pub fn push(&mut self, op: PlanOp) {
        self.ops.push(op);
    }

    /// Append a `CreateShape` op, minting a fresh handle for it.
    pub fn add_shape(&mut self, slide: u32, spec: ShapeSpec) -> ShapeHandle {
        let handle = ShapeHandle(self.next_handle);
        self.next_handle += 1;
        self.ops.push(PlanOp::CreateShape {
            slide,
            handle,
            spec,
        });
        handle
    }

    pub fn ops(&self) -> &[PlanOp] {
        &self.ops
    }

    /// Number of `CreateSlide` ops (slides beyond the first).
    pub fn slide_create_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PlanOp::CreateSlide))
            .count()
    }

    /// Number of `CreateShape` ops targeting the given slide.
    pub fn shape_count_on(&self, slide: u32) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, PlanOp::CreateShape { slide: s, .. } if *s == slide))
            .count()
    }

    /// Check the ordering invariant: every handle referenced by an
    /// update or animation op was minted by an earlier `CreateShape`.
    ///
    /// The planner upholds this by construction; tests call it to
    /// guard against regressions in plan assembly.
    pub fn verify_references(&self) -> Result<(), ShapeHandle> {
        let mut created = std::collections::HashSet::new();
        for op in &self.ops {
            match op {
                PlanOp::CreateShape { handle, .. } => {
                    created.insert(*handle);
                }
                PlanOp::UpdateShape { handle, .. }
                | PlanOp::UpdateTextPortion { handle, .. } => {
                    if !created.contains(handle) {
                        return Err(*handle);
                    }
                }
                PlanOp::SetAnimation { effects, .. } => {
                    if let Some(effect) =
                        effects.iter().find(|e| !created.contains(&e.shape))
                    {
                        return Err(effect.shape);
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}
