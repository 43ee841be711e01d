use k8s_openapi::apimachinery::pkg::apis::meta::v1::Time;

const MILLI_SCALES: [&str; 6] = ["k", "M", "G", "T", "P", "E"];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum UnitPrefix {
    #[default]
    Decimal,
    Binary,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct UnitSelection {
    pub bytes: bool,
    pub kilo: bool,
    pub mega: bool,
    pub giga: bool,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct MemoryUnit {
    pub divisor: i64,
    pub suffix: &'static str,
}

impl MemoryUnit {
    pub fn select(selection: UnitSelection, prefix: UnitPrefix) -> Self {
        let (base, names): (i64, [&'static str; 3]) = match prefix {
            UnitPrefix::Decimal => (1_000, ["K", "M", "G"]),
            UnitPrefix::Binary => (1_024, ["Ki", "Mi", "Gi"]),
        };

        if selection.giga {
            Self::new(base * base * base, names[2])
        } else if selection.mega {
            Self::new(base * base, names[1])
        } else if selection.kilo {
            Self::new(base, names[0])
        } else if selection.bytes {
            Self::new(1, "B")
        } else {
            Self::new(base, names[0])
        }
    }

    fn new(divisor: i64, suffix: &'static str) -> Self {
        Self { divisor, suffix }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct UnitFormatter {
    unit: MemoryUnit,
    without_unit: bool,
}

impl UnitFormatter {
    pub fn new(selection: UnitSelection, prefix: UnitPrefix, without_unit: bool) -> Self {
        Self {
            unit: MemoryUnit::select(selection, prefix),
            without_unit,
        }
    }

    pub fn to_unit(&self, value: i64) -> String {
        let amount = value / self.unit.divisor;
        if self.without_unit {
            amount.to_string()
        } else {
            format!("{amount}{}", self.unit.suffix)
        }
    }

    pub fn to_unit_or_dash(&self, value: i64) -> String {
        if value == 0 {
            return "-".to_string();
        }

        self.to_unit(value)
    }

    pub fn to_milli_unit_or_dash(&self, value: i64) -> String {
        if value == 0 {
            return "-".to_string();
        }

        if self.without_unit {
            return value.to_string();
        }

        milli_quantity(value)
    }
}

pub fn milli_quantity(value: i64) -> String {
    if value % 1_000 != 0 {
        return format!("{value}m");
    }

    let mut amount = value / 1_000;
    let mut suffix = "";
    for scale in MILLI_SCALES {
        if amount == 0 || amount % 1_000 != 0 {
            break;
        }
        amount /= 1_000;
        suffix = scale;
    }

    format!("{amount}{suffix}")
}

pub fn percentage(used: i64, allocatable: i64) -> i64 {
    if allocatable == 0 {
        return 0;
    }

    let ratio = i128::from(used) * 100 / i128::from(allocatable);
    i64::try_from(ratio).unwrap_or(if ratio < 0 { i64::MIN } else { i64::MAX })
}

pub fn format_percent(value: i64) -> String {
    format!("{value}%")
}

pub fn pod_age(created: Option<&Time>, now_seconds: i64) -> String {
    let Some(created) = created else {
        return "<unknown>".to_string();
    };

    human_duration(now_seconds.saturating_sub(created.0.as_second()))
}

pub fn human_duration(seconds: i64) -> String {
    if seconds < -1 {
        return "<invalid>".to_string();
    }
    if seconds < 0 {
        return "0s".to_string();
    }
    if seconds < 60 * 2 {
        return format!("{seconds}s");
    }

    let minutes = seconds / 60;
    if minutes < 10 {
        let rest = seconds % 60;
        if rest == 0 {
            return format!("{minutes}m");
        }
        return format!("{minutes}m{rest}s");
    }
    if minutes < 60 * 3 {
        return format!("{minutes}m");
    }

    let hours = seconds / 3_600;
    if hours < 8 {
        let rest = minutes % 60;
        if rest == 0 {
            return format!("{hours}h");
        }
        return format!("{hours}h{rest}m");
    }
    if hours < 48 {
        return format!("{hours}h");
    }

    let days = hours / 24;
    if hours < 24 * 8 {
        let rest = hours % 24;
        if rest == 0 {
            return format!("{days}d");
        }
        return format!("{days}d{rest}h");
    }
    if hours < 24 * 365 * 2 {
        return format!("{days}d");
    }

    let years = days / 365;
    if hours < 24 * 365 * 8 {
        let rest = days % 365;
        if rest == 0 {
            return format!("{years}y");
        }
        return format!("{years}y{rest}d");
    }

    format!("{years}y")
}
