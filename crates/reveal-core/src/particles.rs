//! Ambient particle backdrop.
//!
//! Particles drift with a constant velocity on a torus the size of the
//! viewport and flicker by random-walking their opacity. Rendering draws every
//! particle as a glowing disc and links every pair closer than
//! [`LINK_DISTANCE`]. The pair pass is O(n²) per frame; n stays at or below
//! [`PARTICLE_COUNT_WIDE`], and the look depends on that density, so it is
//! left naive.

use crate::constants::*;
use crate::host::Surface;
use glam::Vec2;
use rand::prelude::*;

/// Viewport extent in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bounds {
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(0.0),
            height: height.max(0.0),
        }
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= 0.0 && p.x < self.width && p.y >= 0.0 && p.y < self.height
    }

    /// Wrap a point onto the torus spanned by these bounds.
    #[inline]
    pub fn wrap(&self, p: Vec2) -> Vec2 {
        Vec2::new(wrap_axis(p.x, self.width), wrap_axis(p.y, self.height))
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }
}

// rem_euclid can round up to `extent` for tiny negative inputs; fold that back to 0.
#[inline]
fn wrap_axis(v: f32, extent: f32) -> f32 {
    if extent <= 0.0 || !v.is_finite() {
        return 0.0;
    }
    let w = v.rem_euclid(extent);
    if w >= extent {
        0.0
    } else {
        w
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub opacity: f32,
}

/// A connective line between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub from: Vec2,
    pub to: Vec2,
    pub distance: f32,
    pub opacity: f32,
}

/// Opacity of the line joining two particles `distance` apart, or `None` when
/// they are too far apart to be linked.
#[inline]
pub fn link_opacity(distance: f32, max_distance: f32, max_opacity: f32) -> Option<f32> {
    (distance < max_distance).then(|| (1.0 - distance / max_distance) * max_opacity)
}

#[derive(Clone, Debug)]
pub struct FieldConfig {
    pub narrow_breakpoint: f32,
    pub narrow_count: usize,
    pub wide_count: usize,
    pub max_speed: f32,
    pub radius_min: f32,
    pub radius_max: f32,
    pub spawn_opacity_min: f32,
    pub spawn_opacity_max: f32,
    pub opacity_floor: f32,
    pub opacity_ceil: f32,
    pub opacity_walk: f32,
    pub link_distance: f32,
    pub link_opacity: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            narrow_breakpoint: NARROW_VIEWPORT_WIDTH,
            narrow_count: PARTICLE_COUNT_NARROW,
            wide_count: PARTICLE_COUNT_WIDE,
            max_speed: PARTICLE_MAX_SPEED,
            radius_min: PARTICLE_RADIUS_MIN,
            radius_max: PARTICLE_RADIUS_MAX,
            spawn_opacity_min: PARTICLE_OPACITY_SPAWN_MIN,
            spawn_opacity_max: PARTICLE_OPACITY_SPAWN_MAX,
            opacity_floor: PARTICLE_OPACITY_FLOOR,
            opacity_ceil: PARTICLE_OPACITY_CEIL,
            opacity_walk: OPACITY_WALK_STEP,
            link_distance: LINK_DISTANCE,
            link_opacity: LINK_OPACITY_MAX,
        }
    }
}

impl FieldConfig {
    /// Particle count for a viewport of the given width.
    #[inline]
    pub fn count_for(&self, viewport_width: f32) -> usize {
        if viewport_width < self.narrow_breakpoint {
            self.narrow_count
        } else {
            self.wide_count
        }
    }
}

pub struct ParticleField {
    particles: Vec<Particle>,
    bounds: Bounds,
    config: FieldConfig,
    rng: StdRng,
}

impl ParticleField {
    /// Build a field sized for `bounds`, with the count picked by width.
    pub fn new(config: FieldConfig, bounds: Bounds, seed: u64) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            bounds,
            config,
            rng: StdRng::seed_from_u64(seed),
        };
        let count = field.config.count_for(bounds.width);
        field.initialize(count, bounds);
        field
    }

    pub fn initialize(&mut self, count: usize, bounds: Bounds) {
        self.bounds = bounds;
        self.particles.clear();
        self.particles.reserve(count);
        let c = &self.config;
        for _ in 0..count {
            let rng = &mut self.rng;
            let position = bounds.wrap(Vec2::new(
                rng.gen::<f32>() * bounds.width,
                rng.gen::<f32>() * bounds.height,
            ));
            let velocity = Vec2::new(
                (rng.gen::<f32>() - 0.5) * 2.0 * c.max_speed,
                (rng.gen::<f32>() - 0.5) * 2.0 * c.max_speed,
            );
            let radius = c.radius_min + rng.gen::<f32>() * (c.radius_max - c.radius_min);
            let opacity = c.spawn_opacity_min
                + rng.gen::<f32>() * (c.spawn_opacity_max - c.spawn_opacity_min);
            self.particles.push(Particle {
                position,
                velocity,
                radius,
                opacity,
            });
        }
    }

    /// Step every particle by one frame.
    pub fn advance(&mut self) {
        let bounds = self.bounds;
        let walk = self.config.opacity_walk;
        let (floor, ceil) = (self.config.opacity_floor, self.config.opacity_ceil);
        for p in &mut self.particles {
            p.position = bounds.wrap(p.position + p.velocity);
            let drift = (self.rng.gen::<f32>() - 0.5) * 2.0 * walk;
            p.opacity = (p.opacity + drift).clamp(floor, ceil);
        }
    }

    pub fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.clear(self.bounds);
        for p in &self.particles {
            surface.glow_disc(p.position, p.radius, p.opacity);
        }
        for link in self.links() {
            surface.line(link.from, link.to, link.opacity);
        }
    }

    /// Rebuild the field for new viewport bounds. Particles are not carried
    /// over. Returns `false` when the bounds did not change.
    pub fn resize(&mut self, bounds: Bounds) -> bool {
        if bounds == self.bounds {
            return false;
        }
        let count = self.config.count_for(bounds.width);
        self.initialize(count, bounds);
        log::debug!(
            "[field] rebuilt {} particles for {:.0}x{:.0}",
            count,
            bounds.width,
            bounds.height
        );
        true
    }

    /// Lines the next render would draw, one per unordered close pair.
    pub fn links(&self) -> impl Iterator<Item = Link> + '_ {
        let max_d = self.config.link_distance;
        let max_o = self.config.link_opacity;
        self.particles.iter().enumerate().flat_map(move |(i, a)| {
            self.particles[i + 1..].iter().filter_map(move |b| {
                let distance = a.position.distance(b.position);
                link_opacity(distance, max_d, max_o).map(|opacity| Link {
                    from: a.position,
                    to: b.position,
                    distance,
                    opacity,
                })
            })
        })
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[cfg(test)]
    fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }

    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    #[inline]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Lines(Vec<(Vec2, Vec2, f32)>);

    impl Surface for Lines {
        fn clear(&mut self, _bounds: Bounds) {}
        fn glow_disc(&mut self, _center: Vec2, _radius: f32, _opacity: f32) {}
        fn line(&mut self, from: Vec2, to: Vec2, opacity: f32) {
            self.0.push((from, to, opacity));
        }
    }

    fn field(width: f32, height: f32, count: usize) -> ParticleField {
        let bounds = Bounds::new(width, height);
        let mut f = ParticleField::new(FieldConfig::default(), bounds, 3);
        f.initialize(count, bounds);
        f
    }

    #[test]
    fn crossing_an_edge_reenters_on_the_opposite_side() {
        let mut f = field(800.0, 600.0, 4);
        let placed = [
            (Vec2::new(0.05, 300.0), Vec2::new(-0.1, 0.0)),
            (Vec2::new(799.95, 300.0), Vec2::new(0.1, 0.0)),
            (Vec2::new(400.0, 0.05), Vec2::new(0.0, -0.1)),
            (Vec2::new(400.0, 599.95), Vec2::new(0.0, 0.1)),
        ];
        for (p, (pos, vel)) in f.particles_mut().iter_mut().zip(placed) {
            p.position = pos;
            p.velocity = vel;
        }
        f.advance();
        let ps = f.particles();
        assert!((ps[0].position.x - 799.95).abs() < 1e-3);
        assert!((ps[1].position.x - 0.05).abs() < 1e-3);
        assert!((ps[2].position.y - 599.95).abs() < 1e-3);
        assert!((ps[3].position.y - 0.05).abs() < 1e-3);
    }

    #[test]
    fn render_draws_lines_only_for_close_pairs() {
        let mut f = field(1000.0, 1000.0, 3);
        let spots = [
            Vec2::new(100.0, 100.0),
            Vec2::new(190.0, 220.0), // 150 from the first: not linked
            Vec2::new(100.0, 160.0), // 60 from the first, ~108 from the second
        ];
        for (p, pos) in f.particles_mut().iter_mut().zip(spots) {
            p.position = pos;
        }

        let mut s = Lines::default();
        f.render(&mut s);

        assert_eq!(s.0.len(), 2);
        let (from, to, opacity) = s.0[0];
        assert_eq!((from, to), (spots[0], spots[2]));
        assert!((opacity - (1.0 - 60.0 / 150.0) * 0.2).abs() < 1e-6);
        assert_eq!(f.links().count(), 2);
    }
}
