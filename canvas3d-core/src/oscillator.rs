/// A scalar function of time (or frame count), used to animate parameters
/// such as the focal length from one frame to the next
pub trait Oscillator {
    fn compute(&self, t: f64) -> f64;
}

/// Always the same value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstOscillator {
    pub value: f64,
}

impl ConstOscillator {
    pub fn new(value: f64) -> Self {
        Self { value }
    }
}

impl Oscillator for ConstOscillator {
    fn compute(&self, _t: f64) -> f64 {
        self.value
    }
}

/// Sine wave rescaled from `[-1, 1]` onto `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineOscillator {
    pub min: f64,
    pub max: f64,
    pub theta_offset: f64,
    pub speed: f64,
}

impl SineOscillator {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }
}

impl Default for SineOscillator {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            theta_offset: 0.0,
            speed: 1.0,
        }
    }
}

impl Oscillator for SineOscillator {
    fn compute(&self, t: f64) -> f64 {
        let unit = ((t * self.speed + self.theta_offset).sin() + 1.0) / 2.0;
        unit * (self.max - self.min) + self.min
    }
}

/// Sawtooth: ramps from `min` towards `max`, then restarts at `min`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearOscillator {
    pub min: f64,
    pub max: f64,
    pub speed: f64,
}

impl LinearOscillator {
    pub fn new(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            ..Self::default()
        }
    }
}

impl Default for LinearOscillator {
    fn default() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            speed: 1.0,
        }
    }
}

impl Oscillator for LinearOscillator {
    fn compute(&self, t: f64) -> f64 {
        (t * self.speed) % (self.max - self.min) + self.min
    }
}

/// Sum of several oscillators
#[derive(Default)]
pub struct CompositeOscillator {
    pub components: Vec<Box<dyn Oscillator>>,
}

impl CompositeOscillator {
    pub fn new(components: Vec<Box<dyn Oscillator>>) -> Self {
        Self { components }
    }
}

impl Oscillator for CompositeOscillator {
    fn compute(&self, t: f64) -> f64 {
        self.components.iter().map(|c| c.compute(t)).sum()
    }
}
