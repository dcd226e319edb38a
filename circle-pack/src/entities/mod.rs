mod canvas;
mod circle_spec;
mod placed_circle;
mod placement_result;

#[doc(inline)]
pub use canvas::Canvas;

#[doc(inline)]
pub use circle_spec::CircleSpec;

#[doc(inline)]
pub use placed_circle::PlacedCircle;

#[doc(inline)]
pub use placement_result::PlacementResult;

#[doc(inline)]
pub use placement_result::SpecOutcome;
