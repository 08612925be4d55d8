//! Execution driver: sends a deck plan to the remote service in order.
//!
//! Execution is a linear awaited chain because later operations may
//! depend on identifiers returned by earlier ones. Shape handles are
//! resolved to remote indices as `CreateShape` ops complete; the map
//! is threaded into every dependent update and animation op. The first
//! failure aborts the run -- there is no retry and no rollback, so a
//! partially built presentation can remain on the remote side.

use std::collections::HashMap;

use deckforge_core::plan::{AnimationEffect, DeckPlan, PlanOp, ShapeHandle};

use crate::service::{ResolvedEffect, SlidesApiError, SlidesService};

/// Errors from plan execution.
#[derive(Debug, thiserror::Error)]
pub enum ExecError {
    /// A remote call failed or was rejected.
    #[error(transparent)]
    Remote(#[from] SlidesApiError),

    /// An op referenced a shape handle with no recorded remote index.
    /// The planner prevents this by construction; hitting it means the
    /// plan was assembled by hand or mutated.
    #[error("Unresolved shape handle {0:?}")]
    UnresolvedHandle(ShapeHandle),
}

/// Execute `plan` against `service`, returning the download URL.
///
/// A pre-existing presentation of the same name is deleted first. The
/// exists-then-delete pair is not atomic; concurrent requests for the
/// same name can interleave.
pub async fn execute_plan<S: SlidesService + ?Sized>(
    service: &S,
    plan: &DeckPlan,
) -> Result<String, ExecError> {
    let name = plan.name.as_str();

    if service.object_exists(name).await? {
        tracing::info!(name, "Deleting existing presentation");
        service.delete_file(name).await?;
    }

    let mut resolved: HashMap<ShapeHandle, u32> = HashMap::new();

    for op in plan.ops() {
        match op {
            PlanOp::CreatePresentation => {
                tracing::info!(name, "Creating presentation");
                service.create_presentation(name).await?;
            }
            PlanOp::SetSlideProperties(properties) => {
                tracing::info!(name, "Applying page setup");
                service.set_slide_properties(name, properties).await?;
            }
            PlanOp::CopyMasterSlide {
                source_path,
                source_slide,
                apply_to_all,
            } => {
                tracing::info!(name, source = %source_path, "Cloning master slide");
                service
                    .copy_master_slide(name, source_path, *source_slide, *apply_to_all)
                    .await?;
            }
            PlanOp::CreateSlide => {
                service.create_slide(name).await?;
            }
            PlanOp::CreateShape {
                slide,
                handle,
                spec,
            } => {
                let index = service.create_shape(name, *slide, spec).await?;
                tracing::debug!(name, slide, ?handle, index, "Shape created");
                resolved.insert(*handle, index);
            }
            PlanOp::UpdateShape {
                slide,
                handle,
                update,
            } => {
                let index = lookup(&resolved, *handle)?;
                service.update_shape(name, *slide, index, update).await?;
            }
            PlanOp::UpdateTextPortion {
                slide,
                handle,
                paragraph,
                portion,
                style,
            } => {
                let index = lookup(&resolved, *handle)?;
                service
                    .update_text_portion(name, *slide, index, *paragraph, *portion, style)
                    .await?;
            }
            PlanOp::SetAnimation { slide, effects } => {
                let effects = link_effects(&resolved, effects)?;
                tracing::info!(name, slide, count = effects.len(), "Setting animation");
                service.set_animation(name, *slide, &effects).await?;
            }
        }
    }

    let url = service.download_url(name);
    tracing::info!(name, url = %url, "Deck plan executed");
    Ok(url)
}

fn lookup(resolved: &HashMap<ShapeHandle, u32>, handle: ShapeHandle) -> Result<u32, ExecError> {
    resolved
        .get(&handle)
        .copied()
        .ok_or(ExecError::UnresolvedHandle(handle))
}

/// Thread resolved remote indices into an animation sequence.
fn link_effects(
    resolved: &HashMap<ShapeHandle, u32>,
    effects: &[AnimationEffect],
) -> Result<Vec<ResolvedEffect>, ExecError> {
    effects
        .iter()
        .map(|effect| {
            Ok(ResolvedEffect {
                shape_index: lookup(resolved, effect.shape)?,
                kind: effect.kind,
                trigger: effect.trigger,
                acceleration: effect.acceleration,
                duration: effect.duration,
            })
        })
        .collect()
}
