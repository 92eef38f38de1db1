// Logical play field (all simulation coordinates live in this space)
pub const SCREEN_WIDTH: f64 = 800.0;
pub const SCREEN_HEIGHT: f64 = 600.0;

// Frame timing
pub const FPS: u32 = 60;
pub const FRAME_MS: f64 = 1000.0 / FPS as f64;
/// Upper bound on real time fed to the simulation per `advance` call.
pub const MAX_FRAME_LAG_MS: f64 = 100.0;

// Player
pub const PLAYER_X: f64 = SCREEN_WIDTH / 4.0;
pub const PLAYER_START_Y: f64 = SCREEN_HEIGHT / 2.0;
/// Collision box, smaller than the drawn sprite for forgiving hits.
pub const PLAYER_HITBOX: f64 = 60.0;
pub const PLAYER_SPRITE: f64 = 70.0;

// Obstacles
/// Shared by spawning, collision, rendering and culling.
pub const OBSTACLE_WIDTH: f64 = 100.0;
/// Minimum distance between the gap and the top/bottom screen edge at spawn.
pub const GAP_MARGIN: u32 = 100;

/// The player dies once y passes this line.
pub const FLOOR_Y: f64 = SCREEN_HEIGHT - 40.0;

// Files inside the game directory
pub const GAME_DIR_NAME: &str = ".flappy-bob";
pub const CONFIG_FILE: &str = "config.json";
pub const HIGH_SCORE_FILE: &str = "highscore.txt";
pub const LOG_FILE: &str = "flappy-bob.log";
