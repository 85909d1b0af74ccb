use crate::foundation::core::Fps;

/// Damped harmonic oscillator parameters for a 0 -> 1 pop-in.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SpringConfig {
    pub damping: f64,
    pub stiffness: f64,
    pub mass: f64,
}

impl SpringConfig {
    /// Bouncy pop used by the grid cells.
    pub const POP: Self = Self {
        damping: 12.0,
        stiffness: 200.0,
        mass: 0.8,
    };
}

/// Spring value `frame` frames after release, starting at rest at 0 and settling at 1.
pub fn spring(frame: u64, fps: Fps, config: SpringConfig) -> f64 {
    spring_step(
        fps.frames_to_secs(frame),
        config.stiffness,
        config.damping,
        config.mass,
    )
}

fn spring_step(t: f64, stiffness: f64, damping: f64, mass: f64) -> f64 {
    // Step response from 0 to 1 with x(0)=0, v(0)=0.
    let k = stiffness.max(0.0);
    let c = damping.max(0.0);
    let m = mass.max(1e-9);

    let w0 = (k / m).sqrt();
    if w0 == 0.0 {
        return 1.0;
    }
    let zeta = c / (2.0 * (k * m).sqrt()).max(1e-9);

    if (zeta - 1.0).abs() < 1e-6 {
        // Critically damped.
        let e = (-w0 * t).exp();
        1.0 - e * (1.0 + w0 * t)
    } else if zeta < 1.0 {
        // Underdamped.
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let e = (-zeta * w0 * t).exp();
        let c1 = (wd * t).cos();
        let s1 = (wd * t).sin();
        let k = zeta / (1.0 - zeta * zeta).sqrt();
        1.0 - e * (c1 + k * s1)
    } else {
        // Overdamped.
        let z2 = (zeta * zeta - 1.0).sqrt();
        let r1 = -w0 * (zeta - z2);
        let r2 = -w0 * (zeta + z2);
        let c2 = (zeta + z2) / (2.0 * z2);
        let c1 = (zeta - z2) / (2.0 * z2);
        1.0 - (c2 * (r1 * t).exp() - c1 * (r2 * t).exp())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
