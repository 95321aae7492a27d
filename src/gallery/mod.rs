/// Stitching gallery tiles into a single thumbnail
pub mod compositor;
/// Grid and canvas geometry
pub mod layout;
/// Copying sampled sources into the gallery layout
pub mod sampler;
/// Size-ordered listing of source folders
pub mod selection;

pub use layout::{CanvasLayout, GridCell, GridLayout};
