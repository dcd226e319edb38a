mod spatial_index;

#[doc(inline)]
pub use spatial_index::IndexedCircle;

#[doc(inline)]
pub use spatial_index::SpatialIndex;
