/// Radius within which a user may place a new tag, in miles
pub const PLACEMENT_RADIUS_MILES: f64 = 0.5;

/// Default radius used when listing tags around the user, in miles.
/// A display knob, not a placement rule; the two radii are independent.
pub const DEFAULT_DISPLAY_RADIUS_MILES: f64 = 50.0;

/// Storage key the serialized tag collection lives under
pub const TAGS_STORAGE_KEY: &str = "tags";
