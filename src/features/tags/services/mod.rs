mod placement_service;
mod tag_service;

pub use placement_service::PlacementService;
pub use tag_service::TagService;
