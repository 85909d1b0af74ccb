use crate::{
    composition::model::Composition,
    foundation::core::{FrameIndex, FrameRange},
    foundation::error::{ReelError, ReelResult},
    phases::{PhaseInput, render_phase},
    scene::layer::FrameGraph,
    timeline::phase::PhasePlan,
};

/// Stateless evaluator from composition timeline to frame graph.
///
/// Every call recomputes the frame from scratch, so frames may be requested in any
/// order and repeated requests yield identical graphs.
pub struct Evaluator;

impl Evaluator {
    #[tracing::instrument(skip(comp))]
    /// Evaluate one global frame.
    pub fn eval_frame(comp: &Composition, frame: FrameIndex) -> ReelResult<FrameGraph> {
        comp.validate()?;
        if frame.0 >= comp.duration.0 {
            return Err(ReelError::evaluation("frame is out of bounds"));
        }
        let plan = comp.plan()?;
        eval_with_plan(comp, &plan, frame)
    }

    #[tracing::instrument(skip(comp))]
    /// Evaluate every frame of `range`, in order.
    pub fn eval_range(comp: &Composition, range: FrameRange) -> ReelResult<Vec<FrameGraph>> {
        comp.validate()?;
        if range.end.0 > comp.duration.0 {
            return Err(ReelError::evaluation("frame range exceeds composition duration"));
        }
        let plan = comp.plan()?;
        (range.start.0..range.end.0)
            .map(|f| eval_with_plan(comp, &plan, FrameIndex(f)))
            .collect()
    }
}

fn eval_with_plan(
    comp: &Composition,
    plan: &PhasePlan,
    frame: FrameIndex,
) -> ReelResult<FrameGraph> {
    let active = plan
        .resolve(frame)
        .ok_or_else(|| ReelError::evaluation(format!("no phase covers frame {}", frame.0)))?;

    let input = PhaseInput {
        timeline: &comp.timeline,
        config: &comp.config,
        plan,
        local: active.local,
    };
    Ok(FrameGraph {
        frame,
        phase: active.kind,
        local_frame: active.local,
        layers: render_phase(active.kind, &input),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/eval/evaluator.rs"]
mod tests;
