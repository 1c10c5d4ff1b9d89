/// Slowly drifting rotation for the animation loop
use log::debug;
use rand::Rng;

use crate::angle::Angle;
use crate::error::Result;
use crate::figure::Figure;

/// Timing and ranges of the drifting rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinConfig {
    /// Ticks per second.
    pub fps: u32,
    /// Seconds spent drifting towards one target increment.
    pub period_secs: u32,
    /// Every component of the starting per-frame increment.
    pub initial: f64,
    /// Component range of the first target, `[-first_spread, first_spread]`.
    pub first_spread: f64,
    /// Component range of every later target.
    pub spread: f64,
}

impl SpinConfig {
    pub fn period(&self) -> u32 {
        self.fps * self.period_secs
    }
}

impl Default for SpinConfig {
    fn default() -> Self {
        Self {
            fps: 60,
            period_secs: 5,
            initial: 0.015,
            first_spread: 0.03,
            spread: 0.02,
        }
    }
}

/// Per-frame rotation increment that drifts linearly towards a random target
/// and picks a new target once per period.
#[derive(Debug, Clone)]
pub struct Spin<R: Rng> {
    config: SpinConfig,
    rng: R,
    increment: Angle,
    target: Angle,
    dif: Angle,
    step: u32,
}

impl<R: Rng> Spin<R> {
    /// Fails with `DivisionByZero` when the period is zero ticks long.
    pub fn new(config: SpinConfig, mut rng: R) -> Result<Self> {
        let increment = Angle::new(config.initial, config.initial, config.initial);
        let target = random_angle(&mut rng, config.first_spread);
        let dif = (target - increment).divide_by(f64::from(config.period()))?;
        Ok(Self {
            config,
            rng,
            increment,
            target,
            dif,
            step: 0,
        })
    }

    pub fn config(&self) -> &SpinConfig {
        &self.config
    }

    /// Rotation applied by the next tick.
    pub fn increment(&self) -> &Angle {
        &self.increment
    }

    /// Increment the drift is heading to.
    pub fn target(&self) -> &Angle {
        &self.target
    }

    pub fn step(&self) -> u32 {
        self.step
    }

    /// Advance one frame: rotate `figure` by the current increment, then move
    /// the increment one step towards the target.
    pub fn tick(&mut self, figure: &mut Figure) {
        let period = self.config.period();
        if self.step == period {
            self.step = 0;
            self.target = random_angle(&mut self.rng, self.config.spread);
            // `new` rejected a zero period
            self.dif = (self.target - self.increment) / f64::from(period);
            debug!("new spin target {:?}", self.target.components());
        }

        figure.rotate(&self.increment);
        self.increment = self.increment + self.dif;
        self.step += 1;
    }
}

fn random_angle<R: Rng>(rng: &mut R, spread: f64) -> Angle {
    let spread = spread.abs();
    let mut component = || rng.random_range(-spread..=spread);
    Angle::new(component(), component(), component())
}
