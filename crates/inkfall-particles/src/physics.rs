//! Per-frame particle update rules, one per animation phase.

use inkfall_core::Tuning;

use crate::particle::Particle;

/// Strength of the pointer's push at `distance`, in 0.0-1.0.
///
/// Falls off linearly from 1 at the pointer to 0 at `radius`.
pub fn repulsion_force(distance: f32, radius: f32) -> f32 {
    if radius <= 0.0 || !(distance < radius) {
        return 0.0;
    }
    ((radius - distance) / radius).min(1.0)
}

/// Push `target` away from `pointer` according to the particle's distance from it.
pub fn deflect(
    target: (f32, f32),
    position: (f32, f32),
    pointer: Option<(f32, f32)>,
    tuning: &Tuning,
) -> (f32, f32) {
    let Some((px, py)) = pointer else {
        return target;
    };
    let dx = px - position.0;
    let dy = py - position.1;
    let force = repulsion_force((dx * dx + dy * dy).sqrt(), tuning.repulsion_radius);
    if force == 0.0 {
        return target;
    }
    let angle = dy.atan2(dx);
    (
        target.0 - angle.cos() * force * tuning.repulsion_strength,
        target.1 - angle.sin() * force * tuning.repulsion_strength,
    )
}

/// Falling phase: drop and sway until each particle reaches its line.
///
/// Returns how many particles have landed.
pub(crate) fn fall(particles: &mut [Particle], frame: u64, offset: f32, tuning: &Tuning) -> usize {
    let mut landed = 0;
    for p in particles.iter_mut() {
        let (tx, ty) = (p.origin().0, p.origin().1 + offset);
        if p.landed() {
            p.x += (tx - p.x) * tuning.land_pull;
            p.y = ty;
        } else {
            p.y += p.fall_speed();
            p.x += (frame as f32 * p.sway_speed() + p.sway_phase()).sin() * tuning.sway_amplitude;
            if p.y >= ty {
                p.y = ty;
                p.land();
            }
        }
        if p.landed() {
            landed += 1;
        }
    }
    landed
}

/// Waiting and centering phases: ease every particle toward its shifted origin.
pub(crate) fn settle(particles: &mut [Particle], offset: f32, tuning: &Tuning) {
    for p in particles.iter_mut() {
        let (tx, ty) = (p.origin().0, p.origin().1 + offset);
        p.x += (tx - p.x) * tuning.settle_pull;
        p.y += (ty - p.y) * tuning.settle_pull;
    }
}

/// Interactive phase: damped spring toward the origin, deflected by the pointer.
pub(crate) fn spring(particles: &mut [Particle], pointer: Option<(f32, f32)>, tuning: &Tuning) {
    for p in particles.iter_mut() {
        let (tx, ty) = deflect(p.origin(), p.position(), pointer, tuning);
        p.vx += (tx - p.x) * tuning.spring;
        p.vy += (ty - p.y) * tuning.spring;
        p.vx *= tuning.damping;
        p.vy *= tuning.damping;
        p.x += p.vx;
        p.y += p.vy;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Motion;

    fn particle(origin: (f32, f32), start: (f32, f32)) -> Particle {
        let motion = Motion {
            sway_phase: 0.0,
            sway_speed: 0.03,
            fall_speed: 3.0,
        };
        Particle::new(origin, start, '기', motion)
    }

    #[test]
    fn test_repulsion_force_bounds() {
        assert_eq!(repulsion_force(0.0, 100.0), 1.0);
        assert_eq!(repulsion_force(50.0, 100.0), 0.5);
        assert_eq!(repulsion_force(100.0, 100.0), 0.0);
        assert_eq!(repulsion_force(250.0, 100.0), 0.0);
        assert_eq!(repulsion_force(f32::NAN, 100.0), 0.0);
        assert_eq!(repulsion_force(0.0, 0.0), 0.0);
    }

    #[test]
    fn test_deflect_pushes_away_from_pointer() {
        let tuning = Tuning::default();
        // Pointer 50px to the right: target moves left by half the strength
        let (x, y) = deflect((100.0, 100.0), (100.0, 100.0), Some((150.0, 100.0)), &tuning);
        assert!((x - (100.0 - 0.5 * tuning.repulsion_strength)).abs() < 1e-3);
        assert!((y - 100.0).abs() < 1e-3);
        // Out of range or absent pointer leaves the target alone
        assert_eq!(deflect((1.0, 2.0), (1.0, 2.0), Some((500.0, 500.0)), &tuning), (1.0, 2.0));
        assert_eq!(deflect((1.0, 2.0), (1.0, 2.0), None, &tuning), (1.0, 2.0));
    }

    #[test]
    fn test_fall_lands_and_stays_landed() {
        let tuning = Tuning::default();
        let mut particles = vec![particle((50.0, 10.0), (40.0, 0.0))];
        let mut seen_landed = false;
        for frame in 0..20 {
            let landed = fall(&mut particles, frame, 5.0, &tuning);
            if seen_landed {
                assert_eq!(landed, 1);
            }
            seen_landed |= particles[0].landed();
        }
        assert!(seen_landed);
        // Snapped to the offset line, pulled toward the origin column
        assert_eq!(particles[0].position().1, 15.0);
        assert!((particles[0].position().0 - 50.0).abs() < 1.0);
        assert_eq!(particles[0].velocity(), (0.0, 0.0));
    }

    #[test]
    fn test_settle_converges() {
        let tuning = Tuning::default();
        let mut particles = vec![particle((20.0, 30.0), (0.0, 0.0))];
        for _ in 0..400 {
            settle(&mut particles, 10.0, &tuning);
        }
        let (x, y) = particles[0].position();
        assert!((x - 20.0).abs() < 0.01 && (y - 40.0).abs() < 0.01);
    }

    #[test]
    fn test_spring_repels_then_returns() {
        let tuning = Tuning::default();
        let mut particles = vec![particle((100.0, 100.0), (100.0, 100.0))];
        for _ in 0..30 {
            spring(&mut particles, Some((130.0, 100.0)), &tuning);
        }
        assert!(particles[0].position().0 < 90.0, "pushed left of origin");

        for _ in 0..300 {
            spring(&mut particles, None, &tuning);
        }
        let (x, y) = particles[0].position();
        assert!((x - 100.0).abs() < 0.1 && (y - 100.0).abs() < 0.1);
    }
}
