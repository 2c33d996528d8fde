pub const DEFAULT_CARDS_ROOT: &str = "data/cards";
pub const DEFAULT_CHARACTER_DIR: &str = "characters";
pub const DEFAULT_ACTION_DIR: &str = "actions";
pub const DEFAULT_RECORD_EXTENSION: &str = "json";

/// Separates the base slug from the trailing variant number in an identifier.
pub const ID_DELIMITER: char = '-';

/// Longest itemized `removed` listing before it is cut with a count note.
pub const MAX_LISTED_REMOVALS: usize = 20;

pub const CLASS_FIELD: &str = "class";
