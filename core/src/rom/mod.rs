//! ROM file inspection
//!
//! Binary decoding of `.nds` files: header identification fields,
//! the banner icon, and the stable identity derived from them.

pub mod banner;
pub mod header;
pub mod identity;

pub use banner::{BannerIcon, ICON_SIZE, read_icon};
pub use header::RomHeader;
pub use identity::{identity_for, identity_with_header};
