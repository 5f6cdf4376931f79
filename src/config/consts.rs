/// File id property used when none is configured: the `box.id` attribute.
pub const DEFAULT_FILE_ID_PROPERTY: &str = "${box.id}";
/// Directory searched for JSON listings when none is configured.
pub const DEFAULT_SOURCE_DIRECTORY: &str = "collaborations";
