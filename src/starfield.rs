use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use rand::{rngs::SmallRng, Rng, SeedableRng};

pub const STAR_COUNT: usize = 5000;
pub const STAR_RADIUS: f64 = 1.5;

const CAMERA_Z: f64 = 1.0;
const FOV_DEGREES: f64 = 75.0;
const NEAR: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[derive(Debug, Clone)]
pub struct Starfield {
    stars: Vec<Star>,
    rot_x: f64,
    rot_y: f64,
    yaw: f64,
    pitch: f64,
}

impl Starfield {
    pub fn generate(count: usize, radius: f64, seed: u64) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let stars = (0..count)
            .map(|_| {
                let theta = 2.0 * PI * rng.random::<f64>();
                let phi = (2.0 * rng.random::<f64>() - 1.0).acos();
                let r = radius * rng.random::<f64>().cbrt();
                Star {
                    x: r * phi.sin() * theta.cos(),
                    y: r * phi.sin() * theta.sin(),
                    z: r * phi.cos(),
                }
            })
            .collect();
        Self {
            stars,
            rot_x: 0.0,
            rot_y: 0.0,
            yaw: 0.0,
            pitch: 0.0,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn rotation(&self) -> (f64, f64) {
        (self.rot_x, self.rot_y)
    }

    pub fn advance(&mut self, delta_secs: f64) {
        self.rot_x -= delta_secs / 10.0;
        self.rot_y -= delta_secs / 15.0;
    }

    pub fn orbit_angles(&self) -> (f64, f64) {
        (self.yaw, self.pitch)
    }

    /// Turns the view by a pointer drag: a drag the height of the canvas is
    /// one full turn. Pitch stops at straight up and straight down.
    pub fn orbit(&mut self, dx: f64, dy: f64, height: f64) {
        if height <= 0.0 {
            return;
        }
        self.yaw += 2.0 * PI * dx / height;
        self.pitch = (self.pitch + 2.0 * PI * dy / height).clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    fn transform(&self, s: &Star) -> Star {
        let (sx, cx) = self.rot_x.sin_cos();
        let (sy, cy) = self.rot_y.sin_cos();
        let (sz, cz) = FRAC_PI_4.sin_cos();
        // about x
        let (y, z) = (s.y * cx - s.z * sx, s.y * sx + s.z * cx);
        // about y
        let (x, z) = (s.x * cy + z * sy, -s.x * sy + z * cy);
        // fixed roll about z
        let (x, y) = (x * cz - y * sz, x * sz + y * cz);
        // user orbit: yaw about y, then pitch about x
        let (sw, cw) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        let (x, z) = (x * cw + z * sw, -x * sw + z * cw);
        let (y, z) = (y * cp - z * sp, y * sp + z * cp);
        Star { x, y, z }
    }

    pub fn project(&self, width: f64, height: f64) -> impl Iterator<Item = Projected> + '_ {
        let focal = (height / 2.0) / (FOV_DEGREES.to_radians() / 2.0).tan();
        let (cx, cy) = (width / 2.0, height / 2.0);
        self.stars.iter().filter_map(move |s| {
            let p = self.transform(s);
            let depth = CAMERA_Z - p.z;
            if depth <= NEAR {
                return None;
            }
            Some(Projected {
                x: cx + focal * p.x / depth,
                y: cy - focal * p.y / depth,
                depth,
            })
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Drag {
    last: Option<(f64, f64)>,
    pending: (f64, f64),
}

impl Drag {
    pub fn press(&mut self, x: f64, y: f64) {
        self.last = Some((x, y));
    }

    pub fn moved(&mut self, x: f64, y: f64) {
        if let Some((lx, ly)) = self.last {
            self.pending.0 += x - lx;
            self.pending.1 += y - ly;
            self.last = Some((x, y));
        }
    }

    pub fn release(&mut self) {
        self.last = None;
    }

    /// Movement since the last call.
    pub fn take(&mut self) -> (f64, f64) {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stars_stay_inside_radius() {
        let field = Starfield::generate(500, STAR_RADIUS, 7);
        assert_eq!(field.stars().len(), 500);
        assert!(field
            .stars()
            .iter()
            .all(|s| (s.x * s.x + s.y * s.y + s.z * s.z).sqrt() <= STAR_RADIUS + 1e-9));
    }

    #[test]
    fn test_same_seed_same_field() {
        let a = Starfield::generate(32, 1.0, 42);
        let b = Starfield::generate(32, 1.0, 42);
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_advance_rotates_both_axes() {
        let mut field = Starfield::generate(1, 1.0, 1);
        field.advance(1.5);
        let (x, y) = field.rotation();
        assert!((x + 0.15).abs() < 1e-12);
        assert!((y + 0.1).abs() < 1e-12);
    }

    #[test]
    fn test_projection_centres_and_culls() {
        let field = Starfield {
            stars: vec![
                Star {
                    x: 0.0,
                    y: 0.0,
                    z: -1.0,
                },
                Star {
                    x: 0.0,
                    y: 0.0,
                    z: 1.2,
                },
            ],
            rot_x: 0.0,
            rot_y: 0.0,
            yaw: 0.0,
            pitch: 0.0,
        };
        let projected = field.project(800.0, 600.0).collect::<Vec<_>>();
        assert_eq!(projected.len(), 1);
        assert!((projected[0].x - 400.0).abs() < 1e-9);
        assert!((projected[0].y - 300.0).abs() < 1e-9);
        assert!((projected[0].depth - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_drag_accumulates_only_while_pressed() {
        let mut drag = Drag::default();
        drag.moved(50.0, 50.0);
        assert_eq!(drag.take(), (0.0, 0.0));

        drag.press(10.0, 10.0);
        drag.moved(15.0, 8.0);
        drag.moved(25.0, 4.0);
        assert_eq!(drag.take(), (15.0, -6.0));
        assert_eq!(drag.take(), (0.0, 0.0));

        drag.release();
        drag.moved(100.0, 100.0);
        assert_eq!(drag.take(), (0.0, 0.0));
    }

    #[test]
    fn test_orbit_turns_and_clamps_pitch() {
        let mut field = Starfield::generate(1, 1.0, 3);
        field.orbit(300.0, 0.0, 600.0);
        let (yaw, pitch) = field.orbit_angles();
        assert!((yaw - PI).abs() < 1e-12);
        assert_eq!(pitch, 0.0);

        field.orbit(0.0, 10_000.0, 600.0);
        assert_eq!(field.orbit_angles().1, FRAC_PI_2);
        field.orbit(0.0, -20_000.0, 600.0);
        assert_eq!(field.orbit_angles().1, -FRAC_PI_2);

        // a zero-height canvas is ignored
        field.orbit(50.0, 50.0, 0.0);
        assert_eq!(field.orbit_angles().1, -FRAC_PI_2);
    }

    #[test]
    fn test_half_turn_orbit_flips_star_behind_camera() {
        let mut field = Starfield {
            stars: vec![Star {
                x: 0.0,
                y: 0.0,
                z: 0.5,
            }],
            rot_x: 0.0,
            rot_y: 0.0,
            yaw: 0.0,
            pitch: 0.0,
        };
        assert!((field.project(800.0, 600.0).next().map(|p| p.depth).unwrap() - 0.5).abs() < 1e-9);
        field.orbit(300.0, 0.0, 600.0);
        assert!((field.project(800.0, 600.0).next().map(|p| p.depth).unwrap() - 1.5).abs() < 1e-9);
    }
}
