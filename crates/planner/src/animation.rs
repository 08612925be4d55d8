//! Animation sequence assembly.
//!
//! Both assemblers are pure functions from an ordered shape-handle
//! list (creation order) to an ordered effect list. An empty input
//! yields an empty sequence, never an error.

use deckforge_core::plan::{
    AnimationEffect, EffectKind, FlyDirection, ShapeHandle, Trigger,
};

/// Named animation strategy for a slide's shape group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationPolicy {
    /// Fly-in entrances on the 2nd and 3rd shapes only, each on click.
    FlyEntrance,
    /// Bounce entrances on every shape: the first on click, the rest
    /// with the previous effect, so the group reveals as one cascade.
    BounceCascade,
}

impl AnimationPolicy {
    /// Assemble the effect sequence for `handles` under this policy.
    pub fn assemble(self, handles: &[ShapeHandle]) -> Vec<AnimationEffect> {
        match self {
            AnimationPolicy::FlyEntrance => fly_entrance(handles),
            AnimationPolicy::BounceCascade => bounce_cascade(handles),
        }
    }
}

/// Fly-entrance policy: only positions 1 and 2 get an effect, flying
/// in from the bottom and the right respectively, triggered on click.
pub fn fly_entrance(handles: &[ShapeHandle]) -> Vec<AnimationEffect> {
    handles
        .iter()
        .enumerate()
        .filter_map(|(position, &shape)| {
            let direction = match position {
                1 => FlyDirection::Bottom,
                2 => FlyDirection::Right,
                _ => return None,
            };
            Some(AnimationEffect {
                shape,
                kind: EffectKind::Fly(direction),
                trigger: Trigger::OnClick,
                acceleration: 0.1,
                duration: 1.0,
            })
        })
        .collect()
}

/// Bounce-cascade policy: every shape bounces in; the first effect is
/// on click and every subsequent one rides on the previous.
pub fn bounce_cascade(handles: &[ShapeHandle]) -> Vec<AnimationEffect> {
    handles
        .iter()
        .enumerate()
        .map(|(position, &shape)| AnimationEffect {
            shape,
            kind: EffectKind::Bounce,
            trigger: if position == 0 {
                Trigger::OnClick
            } else {
                Trigger::WithPrevious
            },
            acceleration: 0.1,
            duration: 0.5,
        })
        .collect()
}
