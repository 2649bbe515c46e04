use crate::error::ChartResult;
use crate::render::RenderFrame;

/// Capability shared by every chart kind: turn borrowed data plus
/// configuration into a declarative scene.
///
/// Models are independent structs composed from the core algorithms rather
/// than an inheritance chain; anything that can build a frame can be handed
/// to a [`crate::render::Renderer`].
pub trait ChartModel {
    fn build_frame(&self) -> ChartResult<RenderFrame>;
}
