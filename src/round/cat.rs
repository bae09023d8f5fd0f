// Player-controlled cat: kinematics, jump/pounce actions, animation state.

use super::Playfield;

pub const WALK_SPEED: f64 = 260.0;
pub const GRAVITY: f64 = 1600.0;
pub const JUMP_SPEED: f64 = 620.0;
pub const POUNCE_SECS: f64 = 0.35;
/// Idle input time after which a standing cat falls asleep.
pub const SLEEP_AFTER_SECS: f64 = 3.0;
pub const WALK_FRAME_SECS: f64 = 0.14;
pub const WALK_FRAMES: u8 = 2;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AnimState {
    #[default]
    Idle,
    Walk,
    Jump,
    Pounce,
    Sleep,
}

/// Animation state from the cat's physical state. First match wins:
/// pounce, airborne, asleep, walking, idle.
pub fn anim_state(pounce_timer: f64, on_ground: bool, idle_secs: f64, vx: f64) -> AnimState {
    if pounce_timer > 0.0 {
        AnimState::Pounce
    } else if !on_ground {
        AnimState::Jump
    } else if idle_secs > SLEEP_AFTER_SECS && vx == 0.0 {
        AnimState::Sleep
    } else if vx != 0.0 {
        AnimState::Walk
    } else {
        AnimState::Idle
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cat {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    /// -1 facing left, 1 facing right.
    pub facing: f64,
    pub state: AnimState,
    pub pounce_timer: f64,
    pub on_ground: bool,
    pub anim_frame: u8,
    anim_timer: f64,
}

impl Cat {
    /// A grounded, idle cat centered on the playfield.
    pub fn new(field: &Playfield) -> Self {
        Self {
            x: field.width * 0.5,
            y: field.ground_y(),
            vx: 0.0,
            vy: 0.0,
            facing: 1.0,
            state: AnimState::Idle,
            pounce_timer: 0.0,
            on_ground: true,
            anim_frame: 0,
            anim_timer: 0.0,
        }
    }

    /// Advances one tick. `horizontal` is the held direction (-1, 0, 1).
    pub fn step(&mut self, field: &Playfield, horizontal: f64, idle_secs: f64, dt: f64) {
        self.vx = horizontal * WALK_SPEED;
        self.x = (self.x + self.vx * dt).clamp(field.left_bound(), field.right_bound());
        if self.vx != 0.0 {
            self.facing = self.vx.signum();
        }

        self.vy += GRAVITY * dt;
        self.y += self.vy * dt;
        let ground = field.ground_y();
        if self.y >= ground {
            self.y = ground;
            self.vy = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }

        if self.pounce_timer > 0.0 {
            self.pounce_timer = (self.pounce_timer - dt).max(0.0);
        }
        self.state = anim_state(self.pounce_timer, self.on_ground, idle_secs, self.vx);
        self.advance_frames(dt);
    }

    fn advance_frames(&mut self, dt: f64) {
        if self.state != AnimState::Walk {
            self.anim_frame = 0;
            self.anim_timer = 0.0;
            return;
        }
        self.anim_timer += dt;
        if self.anim_timer > WALK_FRAME_SECS {
            self.anim_frame = (self.anim_frame + 1) % WALK_FRAMES;
            self.anim_timer = 0.0;
        }
    }

    /// Leaves the ground if standing on it. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if !self.on_ground {
            return false;
        }
        self.vy = -JUMP_SPEED;
        self.on_ground = false;
        self.state = AnimState::Jump;
        true
    }

    pub fn pounce(&mut self) {
        self.pounce_timer = POUNCE_SECS;
        self.state = AnimState::Pounce;
    }

    pub fn is_pouncing(&self) -> bool {
        self.pounce_timer > 0.0
    }
}
