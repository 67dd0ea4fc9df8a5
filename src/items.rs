use rvec::library::*;
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::pixels::Color;
use sdl2::render::{Canvas, RenderTarget};

fn to_abgr(color: Color) -> Color {
    Color::RGBA(color.a, color.b, color.g, color.r)
}

pub struct Wall {
    pub a: Vector,
    pub b: Vector,
    pub width: i32,
    pub color: Color,
    pub normal: Vector,
}

impl Wall {
    pub fn new(a: Vector, b: Vector, width: Option<i32>, color: Option<Color>) -> Wall {
        Wall {
            a,
            b,
            width: width.unwrap_or(10),
            color: color.unwrap_or(Color::GREEN),
            normal: (b - a).perp().normalize(),
        }
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        let x1 = self.a.x as i16;
        let y1 = self.a.y as i16;
        let x2 = self.b.x as i16;
        let y2 = self.b.y as i16;
        let width = self.width as u8;
        let color = to_abgr(self.color);
        let _ = canvas.thick_line(x1, y1, x2, y2, width, color);
    }
}

pub struct Beacon {
    pub position: Vector,
    pub radius: f32,
    pub color: Color,
}

impl Beacon {
    pub fn new(position: Vector, radius: Option<f32>, color: Option<Color>) -> Beacon {
        Beacon {
            position,
            radius: radius.unwrap_or(12.0),
            color: color.unwrap_or(Color::YELLOW),
        }
    }

    /// Whether something moving from `from` to `to` during one frame passed within
    /// `reach` of the beacon.
    pub fn swept_by(&self, from: Vector, to: Vector, reach: f32) -> bool {
        let r = self.radius + reach;
        let start = from - self.position;
        let end = to - self.position;
        start.closest_dist(end) < r * r
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        let x = self.position.x as i16;
        let y = self.position.y as i16;
        let color = to_abgr(self.color);
        let _ = canvas.filled_circle(x, y, self.radius as i16, color);
    }
}

pub struct Walker {
    pub position: Vector,
    pub heading: Vector,
    pub radius: f32,
    pub speed: f32,
    pub turn_rate: f32,
    pub color: Color,
}

impl Walker {
    pub fn new(
        position: Vector,
        radius: Option<f32>,
        speed: Option<f32>,
        turn_rate: Option<f32>,
        color: Option<Color>,
    ) -> Walker {
        Walker {
            position,
            heading: vec(1.0, 0.0),
            radius: radius.unwrap_or(20.0),
            speed: speed.unwrap_or(400.0),
            turn_rate: turn_rate.unwrap_or(4.0),
            color: color.unwrap_or(Color::RED),
        }
    }

    /// Moves toward `target` at constant speed while turning the heading at a bounded
    /// angular rate. Returns the position the walker started the frame at.
    pub fn step_toward(&mut self, target: Vector, dt: f32) -> Vector {
        let start = self.position;
        let desired = target - self.position;
        if desired.length_sq() > 0.0 {
            self.heading = self
                .heading
                .slerp_const(desired.normalize(), self.turn_rate * dt)
                .normalize();
        }
        self.position = self.position.lerp_const(target, self.speed * dt);
        start
    }

    /// Pushes the walker out of `wall` along the shortest way. Returns true on contact.
    pub fn resolve_wall(&mut self, wall: &Wall) -> bool {
        let closest = self.position.closest_point_on_segment(wall.a, wall.b);
        let min_dist = self.radius + wall.width as f32 / 2.0;
        if !self.position.near(closest, min_dist) {
            return false;
        }
        let push = self.position - closest;
        let nv = if push.length_sq() > 0.0 {
            push.normalize()
        } else {
            wall.normal
        };
        self.position = closest + nv * min_dist;
        true
    }

    pub fn draw<T: RenderTarget>(&self, canvas: &mut Canvas<T>) {
        let x = self.position.x as i16;
        let y = self.position.y as i16;
        let nose = self.position + self.heading * (self.radius * 1.6);
        let color = to_abgr(self.color);
        let _ = canvas.filled_circle(x, y, self.radius as i16, color);
        let _ = canvas.thick_line(x, y, nose.x as i16, nose.y as i16, 4, to_abgr(Color::WHITE));
    }
}
