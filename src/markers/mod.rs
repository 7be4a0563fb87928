mod region;
mod select;

pub use region::ViewportRegion;
pub use select::select_markers;
