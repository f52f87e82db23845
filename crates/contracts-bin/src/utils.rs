/// The function returned a value.
pub const EXIT_OK: i32 = 0;
/// Something outside the evaluated function failed, e.g. the configuration is invalid or the
/// trace file could not be created.
pub const EXIT_ERR: i32 = 1;
/// The command line could not be parsed.
pub const EXIT_USAGE: i32 = 2;
/// The evaluated function reported a contract violation.
pub const EXIT_VIOLATION: i32 = 3;
