//! Cell layout rendering onto fixed-size pixel surfaces.
//!
//! A [`SurfaceMapper`] binds an `rows x cols` layout to a [`Surface`], paints
//! color matrices onto it and maps pointer positions back to cells. A
//! [`GridView`] adds a cache of the last matrix so gridline toggles and
//! rescales can repaint on their own.
//!
//! Nothing here knows what the colors mean; callers colorize their own data.

mod error;
pub mod mapper;
pub mod surface;
pub mod view;

pub use error::RenderError;
pub use mapper::{CellIndex, ColorMatrix, SurfaceMapper};
pub use surface::{PixelSurface, Surface};
pub use view::GridView;
