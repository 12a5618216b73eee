/// Environment variable pointing to the debench project root
pub const DEBENCH_DIR: &str = "DEBENCH_DIR";

/// Environment variable enabling per-phase timing of DE runs (any value but "0")
pub const DE_TIMING: &str = "DEBENCH_DE_TIMING";

/// Directory, relative to the project root, receiving generated data
pub const DATA_GENERATED: &str = "data_generated";

/// Subdirectory of `DATA_GENERATED` receiving run records
pub const RECORDS: &str = "records";
