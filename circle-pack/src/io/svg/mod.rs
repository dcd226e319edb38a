mod placement_to_svg;
mod svg_util;

#[doc(inline)]
pub use placement_to_svg::*;

#[doc(inline)]
pub use svg_util::SvgDrawOptions;
