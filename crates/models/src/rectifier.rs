//! Output ripple of a capacitor-smoothed bridge rectifier.
//!
//! A full-wave bridge charges the smoothing capacitor to the mains peak
//! `V̂ = √2 V_rms`. Once the mains voltage falls past the peak the capacitor
//! discharges through the load, `v_c(t) = V̂ exp(-t / RC)`, until the rectified
//! mains voltage `-V̂ cos(2π f t)` catches up with it again. Ignoring diode
//! drops, that instant is the root of
//!
//! ```text
//! exp(-t / RC) + cos(2π f t) = 0
//! ```
//!
//! within the first half period, and `V̂ - v_c(t)` is the peak-to-peak ripple.

use std::{convert::Infallible, f64::consts::PI};

use uom::si::{
    f64::{Capacitance, ElectricPotential, ElectricalResistance, Frequency, Time},
    time::second,
};
use zeroin_core::{EquationProblem, Model};

/// Mains supply and smoothing circuit of a bridge rectifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BridgeRectifier {
    pub rms_voltage: ElectricPotential,
    pub frequency: Frequency,
    pub resistance: ElectricalResistance,
    pub capacitance: Capacitance,
}

impl BridgeRectifier {
    /// Returns the mains peak voltage, which is also the capacitor's peak.
    #[must_use]
    pub fn amplitude(&self) -> ElectricPotential {
        self.rms_voltage * 2.0_f64.sqrt()
    }

    /// Returns the discharge time constant `RC`.
    #[must_use]
    pub fn time_constant(&self) -> Time {
        self.resistance * self.capacitance
    }

    /// Returns the capacitor voltage `t` after the peak, while discharging.
    #[must_use]
    pub fn capacitor_voltage(&self, t: Time) -> ElectricPotential {
        self.amplitude() * self.decay(t)
    }

    /// Returns the drop from the peak to the capacitor voltage at `t`.
    ///
    /// At the root of [`RippleTime`] this is the peak-to-peak ripple.
    #[must_use]
    pub fn ripple_voltage(&self, t: Time) -> ElectricPotential {
        self.amplitude() - self.capacitor_voltage(t)
    }

    /// Returns the end of the first half period, `1 / (2f)`.
    #[must_use]
    pub fn half_period(&self) -> Time {
        self.frequency.recip() / 2.0
    }

    fn decay(&self, t: Time) -> f64 {
        (-(t / self.time_constant()).value).exp()
    }
}

/// Capacitor and rectified mains voltages, normalized by the peak.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Voltages {
    /// `exp(-t / RC)`.
    pub capacitor: f64,

    /// `-cos(2π f t)`.
    pub mains: f64,
}

impl Model for BridgeRectifier {
    type Input = Time;
    type Output = Voltages;
    type Error = Infallible;

    fn call(&self, t: &Time) -> Result<Voltages, Infallible> {
        let phase = 2.0 * PI * (self.frequency * *t).value;
        Ok(Voltages {
            capacitor: self.decay(*t),
            mains: -phase.cos(),
        })
    }
}

/// Finds when the rectified mains voltage recharges the capacitor.
///
/// The solver variable is the time after the peak in seconds and the
/// residual is `exp(-t / RC) + cos(2π f t)`, the normalized excess of the
/// capacitor voltage over the mains voltage.
#[derive(Debug, Clone, Copy, Default)]
pub struct RippleTime;

impl EquationProblem<1> for RippleTime {
    type Input = Time;
    type Output = Voltages;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Time, Self::Error> {
        Ok(Time::new::<second>(x[0]))
    }

    fn residuals(&self, _input: &Time, output: &Voltages) -> Result<[f64; 1], Self::Error> {
        Ok([output.capacitor - output.mains])
    }
}
