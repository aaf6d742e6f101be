use serde::{Deserialize, Serialize};

use super::config::PlatformerConfig;

/// Axis-aligned rectangle in world pixels, top-left anchored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// True if the two rects share any horizontal span.
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// True if the two rects share any vertical span. Strict on both ends,
    /// so a body standing exactly on a surface does not count as inside it.
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// True if the point lies inside this rect.
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.left() && px < self.right() && py >= self.top() && py < self.bottom()
    }
}

/// The player's physics body. The controller writes its velocities; the
/// arcade world does everything else.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Body {
    pub rect: Rect,
    pub vel_x: f32,
    pub vel_y: f32,
    /// Grounded signal maintained by the world; the controller reads it to
    /// gate jumps.
    pub on_floor: bool,
}

impl Body {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            vel_x: 0.0,
            vel_y: 0.0,
            on_floor: false,
        }
    }
}

/// Stand-in for the host engine's arcade physics: gravity, integration, and
/// collision against static platforms and the world edges. Nothing here is
/// scene logic; the platformer scene only forwards velocities into the body
/// and hands it to `step`.
#[derive(Debug, Clone)]
pub struct ArcadeWorld {
    width: f32,
    height: f32,
    gravity: f32,
    platforms: Vec<Rect>,
}

impl ArcadeWorld {
    pub fn new(config: &PlatformerConfig) -> Self {
        Self {
            width: config.world_width,
            height: config.world_height,
            gravity: config.gravity,
            platforms: config.platforms.clone(),
        }
    }

    /// Spawn the player body at the config's spawn point.
    pub fn spawn_body(config: &PlatformerConfig) -> Body {
        Body::new(Rect::new(
            config.spawn_x,
            config.spawn_y,
            config.player_width,
            config.player_height,
        ))
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// Advance the body by `dt` seconds: apply gravity, integrate each axis,
    /// then resolve against platform sides, tops and bottoms, and the world
    /// edges. Landing (from above, or resting on the world floor) raises
    /// `on_floor`; anything else lowers it.
    pub fn step(&self, body: &mut Body, dt: f32) {
        body.vel_y += self.gravity * dt;

        // Horizontal axis: integrate, push back out of any platform entered
        // from the side, then keep the body inside the world.
        let prev_left = body.rect.left();
        let prev_right = body.rect.right();
        body.rect.x += body.vel_x * dt;

        for platform in &self.platforms {
            if !body.rect.overlaps_x(platform) || !body.rect.overlaps_y(platform) {
                continue;
            }

            if body.vel_x > 0.0 && prev_right <= platform.left() {
                body.rect.x = platform.left() - body.rect.w;
                body.vel_x = 0.0;
            } else if body.vel_x < 0.0 && prev_left >= platform.right() {
                body.rect.x = platform.right();
                body.vel_x = 0.0;
            }
        }

        if body.rect.left() < 0.0 {
            body.rect.x = 0.0;
            body.vel_x = 0.0;
        } else if body.rect.right() > self.width {
            body.rect.x = self.width - body.rect.w;
            body.vel_x = 0.0;
        }

        // Vertical axis: remember where the body came from so a fast fall
        // cannot pass through a surface within one frame.
        let prev_bottom = body.rect.bottom();
        let prev_top = body.rect.top();
        body.rect.y += body.vel_y * dt;
        body.on_floor = false;

        for platform in &self.platforms {
            if !body.rect.overlaps_x(platform) {
                continue;
            }

            let falling_onto = body.vel_y >= 0.0
                && prev_bottom <= platform.top()
                && body.rect.bottom() >= platform.top();
            if falling_onto {
                body.rect.y = platform.top() - body.rect.h;
                body.vel_y = 0.0;
                body.on_floor = true;
                continue;
            }

            let rising_into = body.vel_y < 0.0
                && prev_top >= platform.bottom()
                && body.rect.top() <= platform.bottom();
            if rising_into {
                body.rect.y = platform.bottom();
                body.vel_y = 0.0;
            }
        }

        // World edges: the floor is solid ground, the ceiling just stops
        // upward motion.
        if body.rect.bottom() > self.height {
            body.rect.y = self.height - body.rect.h;
            body.vel_y = 0.0;
            body.on_floor = true;
        } else if body.rect.top() < 0.0 {
            body.rect.y = 0.0;
            body.vel_y = 0.0;
        }
    }
}
