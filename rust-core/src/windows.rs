//! Window functions for spectral analysis
//!
//! Every window is a pure weight `w(index, length)`. Callers multiply the
//! sample by the weight themselves (see `spectrum::windowing`).

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TransformError};

/// Default shape parameter of the Blackman window
pub const BLACKMAN_ALPHA: f64 = 0.16;

/// Default shape parameter of the Gaussian window
pub const GAUSS_ALPHA: f64 = 0.25;

/// Window function types
///
/// In the formulas below `L` is the window length and `M = L - 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindowFunction {
    /// Rectangular window (no windowing): w[n] = 1
    Rectangular,

    /// Triangular window: w[n] = 2/L * (L/2 - |n - M/2|)
    /// Non-zero endpoints
    Triangular,

    /// Bartlett window: w[n] = 2/M * (M/2 - |n - M/2|)
    /// Zero endpoints
    Bartlett,

    /// Bartlett-Hann window: w[n] = 0.62 - 0.48*|n/M - 0.5| - 0.38*cos(2πn/M)
    BartlettHann,

    /// Blackman window: w[n] = (1-α)/2 - 0.5*cos(2πn/M) + α/2*cos(4πn/M)
    /// With α = 0.16 this is the classic 0.42 / 0.5 / 0.08 Blackman,
    /// sidelobe attenuation ~74 dB
    Blackman { alpha: f64 },

    /// Cosine (sine) window: w[n] = cos(πn/M - π/2)
    Cosine,

    /// Gaussian window: w[n] = exp(-0.5 * ((n - M/2) / (α*M/2))^2)
    Gauss { alpha: f64 },

    /// Hamming window: w[n] = 0.54 - 0.46*cos(2πn/M)
    /// Sidelobe attenuation ~53 dB
    Hamming,

    /// Hann window: w[n] = 0.5 * (1 - cos(2πn/M))
    /// Sidelobe attenuation ~44 dB
    Hann,

    /// Lanczos window: w[n] = sinc(2n/M - 1)
    Lanczos,
}

impl WindowFunction {
    /// All window variants, parametrised windows with their default shape
    pub const ALL: [WindowFunction; 10] = [
        WindowFunction::Rectangular,
        WindowFunction::Triangular,
        WindowFunction::Bartlett,
        WindowFunction::BartlettHann,
        WindowFunction::Blackman { alpha: BLACKMAN_ALPHA },
        WindowFunction::Cosine,
        WindowFunction::Gauss { alpha: GAUSS_ALPHA },
        WindowFunction::Hamming,
        WindowFunction::Hann,
        WindowFunction::Lanczos,
    ];

    /// Blackman window with the default α = 0.16
    pub fn blackman() -> Self {
        WindowFunction::Blackman { alpha: BLACKMAN_ALPHA }
    }

    /// Gaussian window with the default α = 0.25
    pub fn gauss() -> Self {
        WindowFunction::Gauss { alpha: GAUSS_ALPHA }
    }

    /// Canonical lower-case name
    pub fn name(&self) -> &'static str {
        match self {
            WindowFunction::Rectangular => "rectangular",
            WindowFunction::Triangular => "triangular",
            WindowFunction::Bartlett => "bartlett",
            WindowFunction::BartlettHann => "bartlett-hann",
            WindowFunction::Blackman { .. } => "blackman",
            WindowFunction::Cosine => "cosine",
            WindowFunction::Gauss { .. } => "gauss",
            WindowFunction::Hamming => "hamming",
            WindowFunction::Hann => "hann",
            WindowFunction::Lanczos => "lanczos",
        }
    }

    /// Weight of sample `index` in a window of `length` samples
    ///
    /// # Arguments
    /// * `index` - Sample index n, expected in 0..length
    /// * `length` - Window length L (must be at least 2)
    ///
    /// # Returns
    /// Weight w[n], or `DegenerateWindow` if `length < 2`
    pub fn weight(&self, index: usize, length: usize) -> Result<f64> {
        check_length(length)?;
        Ok(self.evaluate(index as f64, length as f64))
    }

    /// Generate window coefficients
    ///
    /// # Arguments
    /// * `length` - Number of samples (L)
    ///
    /// # Returns
    /// Vector of window coefficients w[n] for n = 0..L-1
    pub fn generate(&self, length: usize) -> Result<Vec<f64>> {
        check_length(length)?;

        let l = length as f64;
        Ok((0..length).map(|n| self.evaluate(n as f64, l)).collect())
    }

    /// Length already validated
    fn evaluate(&self, n: f64, l: f64) -> f64 {
        let m = l - 1.0;

        match *self {
            WindowFunction::Rectangular => 1.0,

            WindowFunction::Triangular => (2.0 / l) * (l / 2.0 - (n - m / 2.0).abs()),

            WindowFunction::Bartlett => (2.0 / m) * (m / 2.0 - (n - m / 2.0).abs()),

            WindowFunction::BartlettHann => {
                0.62 - 0.48 * (n / m - 0.5).abs() - 0.38 * (2.0 * PI * n / m).cos()
            }

            WindowFunction::Blackman { alpha } => {
                let a0 = (1.0 - alpha) / 2.0;
                let a1 = 0.5;
                let a2 = alpha / 2.0;
                a0 - a1 * (2.0 * PI * n / m).cos() + a2 * (4.0 * PI * n / m).cos()
            }

            WindowFunction::Cosine => (PI * n / m - PI / 2.0).cos(),

            WindowFunction::Gauss { alpha } => {
                let x = (n - m / 2.0) / (alpha * m / 2.0);
                (-0.5 * x * x).exp()
            }

            WindowFunction::Hamming => 0.54 - 0.46 * (2.0 * PI * n / m).cos(),

            WindowFunction::Hann => 0.5 * (1.0 - (2.0 * PI * n / m).cos()),

            WindowFunction::Lanczos => {
                let x = 2.0 * n / m - 1.0;
                // sin(πx)/(πx) is 0/0 at the centre
                if x == 0.0 {
                    1.0
                } else {
                    (PI * x).sin() / (PI * x)
                }
            }
        }
    }
}

impl fmt::Display for WindowFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for WindowFunction {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rectangular" | "rect" => Ok(WindowFunction::Rectangular),
            "triangular" => Ok(WindowFunction::Triangular),
            "bartlett" => Ok(WindowFunction::Bartlett),
            "bartlett-hann" | "bartlett_hann" | "bartletthann" => Ok(WindowFunction::BartlettHann),
            "blackman" => Ok(WindowFunction::blackman()),
            "cosine" => Ok(WindowFunction::Cosine),
            "gauss" | "gaussian" => Ok(WindowFunction::gauss()),
            "hamming" => Ok(WindowFunction::Hamming),
            "hann" | "hanning" => Ok(WindowFunction::Hann),
            "lanczos" => Ok(WindowFunction::Lanczos),
            _ => Err(TransformError::UnknownWindow(s.to_string())),
        }
    }
}

fn check_length(length: usize) -> Result<()> {
    if length < 2 {
        return Err(TransformError::DegenerateWindow(length));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_window() {
        let window = WindowFunction::Rectangular.generate(100).unwrap();
        assert_eq!(window.len(), 100);
        assert!(window.iter().all(|&w| w == 1.0));

        for length in 2..20 {
            for index in 0..length {
                assert_eq!(WindowFunction::Rectangular.weight(index, length).unwrap(), 1.0);
            }
        }
    }

    #[test]
    fn test_hann_endpoints() {
        for length in [2, 3, 8, 161, 1024] {
            let first = WindowFunction::Hann.weight(0, length).unwrap();
            let last = WindowFunction::Hann.weight(length - 1, length).unwrap();
            assert!(first.abs() < 1e-12);
            assert!(last.abs() < 1e-12);
        }
    }

    #[test]
    fn test_lanczos_centre() {
        // Odd length puts a sample exactly on x == 0
        for length in [3, 5, 161, 1025] {
            let centre = WindowFunction::Lanczos.weight(length / 2, length).unwrap();
            assert_eq!(centre, 1.0);
        }

        let window = WindowFunction::Lanczos.generate(161).unwrap();
        assert!(window.iter().all(|w| w.is_finite()));
        assert!(window[0].abs() < 1e-12);
    }

    #[test]
    fn test_window_generation() {
        let length = 161;
        let center = length / 2;

        for window_type in [
            WindowFunction::Hann,
            WindowFunction::Hamming,
            WindowFunction::blackman(),
            WindowFunction::Bartlett,
            WindowFunction::gauss(),
            WindowFunction::Cosine,
            WindowFunction::Lanczos,
        ] {
            let window = window_type.generate(length).unwrap();
            assert_eq!(window.len(), length);

            // Symmetric
            for n in 0..length {
                assert!((window[n] - window[length - 1 - n]).abs() < 1e-10, "{window_type}");
            }

            // Peak of 1.0 in the centre
            assert!((window[center] - 1.0).abs() < 1e-10, "{window_type}");
        }

        // Hamming should have non-zero endpoints (0.08)
        let hamming = WindowFunction::Hamming.generate(length).unwrap();
        assert!(hamming[0] > 0.07 && hamming[0] < 0.09);
    }

    #[test]
    fn test_blackman_alpha() {
        let classic = WindowFunction::blackman();
        // a0 - a1 + a2 = 0.42 - 0.5 + 0.08
        assert!(classic.weight(0, 64).unwrap().abs() < 1e-12);

        let wide = WindowFunction::Blackman { alpha: 0.0 };
        // α = 0 degenerates to Hann
        for n in 0..64 {
            let a = wide.weight(n, 64).unwrap();
            let b = WindowFunction::Hann.weight(n, 64).unwrap();
            assert!((a - b).abs() < 1e-12);
        }
    }

    #[test]
    fn test_triangular_vs_bartlett() {
        // Triangular keeps non-zero endpoints, Bartlett does not
        let tri = WindowFunction::Triangular.generate(8).unwrap();
        let bart = WindowFunction::Bartlett.generate(8).unwrap();
        assert!((tri[0] - 0.125).abs() < 1e-12);
        assert!(bart[0].abs() < 1e-12);
    }

    #[test]
    fn test_degenerate_length() {
        for window_type in WindowFunction::ALL {
            assert_eq!(window_type.weight(0, 1), Err(TransformError::DegenerateWindow(1)));
            assert_eq!(window_type.generate(0), Err(TransformError::DegenerateWindow(0)));
        }
    }

    #[test]
    fn test_parse_names() {
        for window_type in WindowFunction::ALL {
            let parsed: WindowFunction = window_type.name().parse().unwrap();
            assert_eq!(parsed, window_type);
        }

        assert_eq!("Hanning".parse::<WindowFunction>(), Ok(WindowFunction::Hann));
        assert_eq!(
            "kaiser".parse::<WindowFunction>(),
            Err(TransformError::UnknownWindow("kaiser".to_string()))
        );
    }
}
