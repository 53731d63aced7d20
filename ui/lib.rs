mod alert;
mod glyph;
mod icon;
mod props;

pub use self::alert::*;
pub use self::glyph::*;
pub use self::icon::*;
pub use self::props::PropError;
