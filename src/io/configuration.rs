//! Solver constants and runtime configuration defaults

// Cell value projection
/// Wall value written by the maze parser and generator
pub const WALL_VALUE: i32 = -1;
/// Integer projection of the transient abandoned-branch marker
pub const ABANDONED_MARKER: i32 = -2;

// Maze text format glyphs
/// Wall cell in maze files
pub const WALL_GLYPH: char = '#';
/// Open cell in maze files
pub const OPEN_GLYPH: char = '.';
/// Start cell in maze files (open, exactly one per maze)
pub const START_GLYPH: char = 'S';

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Safety limit to prevent excessive memory allocation
/// Maximum generator dimension in corridor cells
pub const MAX_GENERATED_CELLS: usize = 2_000;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_solved";
/// Side length in pixels of one maze cell in exported images
pub const CELL_PIXEL_SIZE: u32 = 8;
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 40;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 50;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Export palette
/// Wall cells in exported images
pub const WALL_COLOR: [u8; 4] = [24, 24, 24, 255];
/// Open cells in exported images
pub const OPEN_COLOR: [u8; 4] = [245, 245, 245, 255];
/// Path gradient endpoint nearest the start
pub const PATH_START_COLOR: [u8; 4] = [46, 160, 67, 255];
/// Path gradient endpoint nearest the exit
pub const PATH_END_COLOR: [u8; 4] = [207, 34, 46, 255];
/// Explored-then-abandoned cells in visualization frames
pub const TRAIL_COLOR: [u8; 4] = [189, 214, 255, 255];
/// The start cell in exported images
pub const START_COLOR: [u8; 4] = [255, 196, 0, 255];
