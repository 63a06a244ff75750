/// Environment variable holding the colon-separated element search path.
pub const ELEMENTS_PATH_VAR: &str = "ELEMENTS_PATH";

/// Separator between entries of the search path.
pub const SEARCH_PATH_SEPARATOR: char = ':';

/// Per-element file listing the elements it depends on.
pub const DEPS_FILENAME: &str = "element-deps";

/// Per-element file listing the (possibly virtual) names it provides.
pub const PROVIDES_FILENAME: &str = "element-provides";

/// Virtual name that must be provided by some element in every closure.
pub const OPERATING_SYSTEM: &str = "operating-system";
