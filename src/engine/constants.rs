pub const FIELD_HEIGHT: i32 = 20;
pub const FIELD_WIDTH: i32 = 36;

// Smallest field the terminal clamp will shrink to
pub const MIN_FIELD_HEIGHT: i32 = 8;
pub const MIN_FIELD_WIDTH: i32 = 16;

// Largest side a field may have
pub const MAX_FIELD_SIDE: i32 = 1024;

// Rows and columns the presentation layer keeps for title, status and border
pub const TERMINAL_MARGIN: i32 = 6;
// Each logical cell is drawn two characters wide
pub const CELL_CHARS: i32 = 2;

pub const START_TICK_MILLIS: i64 = 100;
pub const SPEED_STEP_MILLIS: i64 = 5;
pub const SPEED_UP_PERIOD_MILLIS: i64 = 8000;
pub const MIN_TICK_MILLIS: i64 = 30;

pub const AI_RANDOMNESS: f64 = 0.12;
pub const LOOKAHEAD_DEPTH: u32 = 6;
