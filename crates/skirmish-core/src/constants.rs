//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Arena ---

/// Default arena width.
pub const ARENA_WIDTH: f64 = 800.0;

/// Default arena height.
pub const ARENA_HEIGHT: f64 = 600.0;

// --- Units ---

/// Circumradius of a unit's polygon; also the unit contact radius.
pub const UNIT_RADIUS: f64 = 20.0;

/// Default rotation speed for instantiated units (degrees per second).
pub const UNIT_ROTATION_SPEED: f64 = 30.0;

/// Floor for a unit's max hp. Units created with less start damaged.
pub const MIN_MAX_HP: f64 = 100.0;

/// Default starting hp.
pub const DEFAULT_UNIT_HP: f64 = 100.0;

// --- Placement ---

/// Distance kept between sampled spawn points and the arena edges.
pub const SPAWN_EDGE_PADDING: f64 = 50.0;

/// Minimum distance between a spawn point and any existing teammate.
pub const MIN_UNIT_SEPARATION: f64 = 60.0;

/// Samples tried before accepting an overlapping spawn point.
pub const PLACEMENT_MAX_ATTEMPTS: u32 = 100;

// --- Projectile contacts ---

/// A projectile closer than this to a unit center touches it.
pub const UNIT_CONTACT_RADIUS: f64 = UNIT_RADIUS;

/// A defensive projectile annihilates enemy projectiles within this range.
pub const DEFENSIVE_CONTACT_RADIUS: f64 = 12.0;

/// Homing projectiles closer than this collide with each other.
pub const PROJECTILE_CONTACT_RADIUS: f64 = 8.0;

/// Offensive projectiles steer away from teammates within this range.
pub const FRIENDLY_AVOIDANCE_RADIUS: f64 = 30.0;

// --- Steering ---

/// Maximum heading change of a homing projectile (degrees per second).
pub const MAX_TURN_RATE_DEG: f64 = 1800.0;

/// Per-second blend factor of a defensive projectile toward its intercept heading.
pub const DEFENSIVE_STEER_BLEND: f64 = 0.2;

/// Spawn invulnerability window of every projectile (seconds).
pub const PROJECTILE_IFRAMES: f64 = 0.5;

/// Below this speed a homing projectile snaps to its desired heading.
pub const MIN_STEERING_SPEED: f64 = 0.01;

// --- Behavior defaults ---

/// Shooter defaults: damage, seconds between shots, defensive lifetime,
/// projectile speed, projectile acceleration.
pub const SHOOTER_DEFAULT_DAMAGE: f64 = 10.0;
pub const SHOOTER_DEFAULT_RATE: f64 = 1.0;
pub const SHOOTER_DEFAULT_LIFETIME: f64 = 3.0;
pub const SHOOTER_DEFAULT_SPEED: f64 = 100.0;
pub const SHOOTER_DEFAULT_ACCELERATION: f64 = 200.0;

/// Healer defaults: heal amount, seconds between shots, projectile speed,
/// projectile acceleration.
pub const HEALER_DEFAULT_HEAL: f64 = 8.0;
pub const HEALER_DEFAULT_RATE: f64 = 0.5;
pub const HEALER_DEFAULT_SPEED: f64 = 100.0;
pub const HEALER_DEFAULT_ACCELERATION: f64 = 200.0;

// --- Loadout defaults (base-level unit stat bundles) ---

pub const TRIANGLE_DAMAGE: f64 = 5.0;
pub const TRIANGLE_SPEED: f64 = 100.0;
pub const TRIANGLE_ACCELERATION: f64 = 100.0;
pub const TRIANGLE_RATE: f64 = 3.0;

pub const SQUARE_SPEED: f64 = 160.0;
pub const SQUARE_ACCELERATION: f64 = 200.0;
pub const SQUARE_RATE: f64 = 5.0;
pub const SQUARE_LIFETIME: f64 = 5.0;

pub const PENTAGON_HEAL: f64 = 20.0;
pub const PENTAGON_SPEED: f64 = 100.0;
pub const PENTAGON_ACCELERATION: f64 = 300.0;
pub const PENTAGON_RATE: f64 = 7.5;

// --- Battle control ---

/// Upper bound for the engine time scale.
pub const MAX_TIME_SCALE: f64 = 4.0;

/// Default time limit for headless battles (seconds).
pub const DEFAULT_TIME_LIMIT_SECS: f64 = 120.0;
