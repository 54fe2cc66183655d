//! Value formatting honoring a configured unit system.
//!
//! [`FormatUtils`] converts raw metric values (time, distance, height, heart
//! rate, speed, temperature) into display strings. All raw values are stored
//! metric; conversion to English units happens at formatting time only.

/// Miles per kilometer.
const MILES_PER_KM: f64 = 0.621_371_192;

/// Feet per meter.
const FEET_PER_M: f64 = 3.280_839_9;

/// Unit system for displayed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    /// Kilometers, meters, Celsius.
    Metric,
    /// Miles, feet, Fahrenheit.
    English,
}

impl UnitSystem {
    /// Parse from a configuration file string.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "metric" => Some(UnitSystem::Metric),
            "english" => Some(UnitSystem::English),
            _ => None,
        }
    }
}

/// How speed values are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedMode {
    /// Distance per hour (km/h or mph).
    Speed,
    /// Time per distance unit (min/km or min/mi).
    Pace,
}

impl SpeedMode {
    /// Parse from a configuration file string.
    pub fn from_config_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "speed" => Some(SpeedMode::Speed),
            "pace" => Some(SpeedMode::Pace),
            _ => None,
        }
    }
}

/// Formatter for sample metrics.
#[derive(Debug, Clone, Copy)]
pub struct FormatUtils {
    unit_system: UnitSystem,
}

impl FormatUtils {
    /// Create a formatter for the given unit system.
    pub fn new(unit_system: UnitSystem) -> Self {
        Self { unit_system }
    }

    /// The configured unit system.
    pub fn unit_system(&self) -> UnitSystem {
        self.unit_system
    }

    /// Format a duration in seconds as `h:mm:ss`.
    pub fn seconds_to_time_string(seconds: u64) -> String {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;
        format!("{}:{:02}:{:02}", hours, minutes, secs)
    }

    /// Format a distance given in kilometers.
    pub fn distance_to_string(&self, distance_km: f64, decimals: usize) -> String {
        match self.unit_system {
            UnitSystem::Metric => format!("{:.*} km", decimals, distance_km),
            UnitSystem::English => {
                format!("{:.*} mi", decimals, distance_km * MILES_PER_KM)
            }
        }
    }

    /// Format a height given in meters.
    pub fn height_to_string(&self, height_m: i32) -> String {
        match self.unit_system {
            UnitSystem::Metric => format!("{} m", height_m),
            UnitSystem::English => {
                format!("{} ft", (height_m as f64 * FEET_PER_M).round() as i64)
            }
        }
    }

    /// Format a heart rate in beats per minute.
    pub fn heart_rate_to_string(&self, heart_rate: u32) -> String {
        format!("{} bpm", heart_rate)
    }

    /// Format a speed given in km/h, honoring the speed mode.
    ///
    /// In pace mode a non-positive speed formats as a zero pace rather than
    /// dividing by zero.
    pub fn speed_to_string(&self, speed_kmh: f64, decimals: usize, mode: SpeedMode) -> String {
        let (value, distance_unit) = match self.unit_system {
            UnitSystem::Metric => (speed_kmh, "km"),
            UnitSystem::English => (speed_kmh * MILES_PER_KM, "mi"),
        };

        match mode {
            SpeedMode::Speed => match self.unit_system {
                UnitSystem::Metric => format!("{:.*} km/h", decimals, value),
                UnitSystem::English => format!("{:.*} mph", decimals, value),
            },
            SpeedMode::Pace => {
                if value <= 0.0 {
                    return format!("0:00 min/{}", distance_unit);
                }
                let total_seconds = (3600.0 / value).round() as u64;
                format!(
                    "{}:{:02} min/{}",
                    total_seconds / 60,
                    total_seconds % 60,
                    distance_unit
                )
            }
        }
    }

    /// Format a temperature given in degrees Celsius.
    pub fn temperature_to_string(&self, temperature_c: i32) -> String {
        match self.unit_system {
            UnitSystem::Metric => format!("{} °C", temperature_c),
            UnitSystem::English => {
                format!("{} °F", (temperature_c as f64 * 1.8 + 32.0).round() as i64)
            }
        }
    }
}
