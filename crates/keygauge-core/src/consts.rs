/// Rows in the layout grid.
pub const ROW: usize = 3;

/// Columns in the layout grid. Columns 0 and 11 are the outer stretch
/// columns; 3x10 layouts leave them empty.
pub const COL: usize = 12;

/// Flat positions on the grid (36), and the powers used to pack
/// 2/3/4-key sequences into a single index.
pub const DIM1: usize = ROW * COL;
pub const DIM2: usize = DIM1 * DIM1;
pub const DIM3: usize = DIM2 * DIM1;
pub const DIM4: usize = DIM3 * DIM1;

/// Character slots in a language. Slot 0 is always space; slots 1..=50
/// come from the language definition file.
pub const LANG_LENGTH: usize = 51;

/// Wide characters in a language definition line (50 shifted/unshifted pairs).
pub const LANG_FILE_LENGTH: usize = 100;

/// Marker for an unassigned cell in a layout matrix.
pub const EMPTY: i8 = -1;

/// Skipgram tables cover character distances 1..=9; slot 0 stays unused so
/// the distance doubles as the index.
pub const SKIP_SLOTS: usize = 10;

/// Longest display name for a statistic or a layout.
pub const NAME_MAX: usize = 60;

/// Number of characters in an API layout string (rows 0..3, columns 1..=10).
pub const API_LAYOUT_LEN: usize = 30;
