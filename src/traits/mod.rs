mod font_type;
mod surface;

pub use font_type::FontType;
pub use surface::Surface;
