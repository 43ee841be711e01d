use k8s_openapi::api::core::v1::{Container, Node};
use k8s_openapi::apimachinery::pkg::api::resource::Quantity;
use std::collections::BTreeMap;
use tracing::warn;

const BINARY_SUFFIXES: [(&str, u32); 6] = [
    ("Ki", 1),
    ("Mi", 2),
    ("Gi", 3),
    ("Ti", 4),
    ("Pi", 5),
    ("Ei", 6),
];

const DECIMAL_SUFFIXES: [(&str, i32); 10] = [
    ("n", -9),
    ("u", -6),
    ("m", -3),
    ("k", 3),
    ("K", 3),
    ("M", 6),
    ("G", 9),
    ("T", 12),
    ("P", 15),
    ("E", 18),
];

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct NodeAllocatable {
    pub cpu_millicores: i64,
    pub memory_bytes: i64,
    pub pods: i64,
}

impl NodeAllocatable {
    pub fn from_node(node: &Node) -> Self {
        let allocatable = node
            .status
            .as_ref()
            .and_then(|status| status.allocatable.as_ref());

        Self {
            cpu_millicores: cpu_of(allocatable, "cpu"),
            memory_bytes: bytes_of(allocatable, "memory"),
            pods: bytes_of(allocatable, "pods"),
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct ContainerResources {
    pub cpu_requested: i64,
    pub cpu_limit: i64,
    pub memory_requested: i64,
    pub memory_limit: i64,
}

impl ContainerResources {
    pub fn from_container(container: &Container) -> Self {
        let resources = container.resources.as_ref();
        let requests = resources.and_then(|value| value.requests.as_ref());
        let limits = resources.and_then(|value| value.limits.as_ref());

        Self {
            cpu_requested: cpu_of(requests, "cpu"),
            cpu_limit: cpu_of(limits, "cpu"),
            memory_requested: bytes_of(requests, "memory"),
            memory_limit: bytes_of(limits, "memory"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cpu_requested == 0
            && self.cpu_limit == 0
            && self.memory_requested == 0
            && self.memory_limit == 0
    }

    pub fn add(&mut self, other: &Self) {
        self.cpu_requested = self.cpu_requested.saturating_add(other.cpu_requested);
        self.cpu_limit = self.cpu_limit.saturating_add(other.cpu_limit);
        self.memory_requested = self.memory_requested.saturating_add(other.memory_requested);
        self.memory_limit = self.memory_limit.saturating_add(other.memory_limit);
    }
}

fn cpu_of(list: Option<&BTreeMap<String, Quantity>>, key: &str) -> i64 {
    quantity_of(list, key, parse_cpu_millicores)
}

fn bytes_of(list: Option<&BTreeMap<String, Quantity>>, key: &str) -> i64 {
    quantity_of(list, key, parse_memory_bytes)
}

fn quantity_of(
    list: Option<&BTreeMap<String, Quantity>>,
    key: &str,
    parse: fn(&str) -> Option<i64>,
) -> i64 {
    let Some(quantity) = list.and_then(|list| list.get(key)) else {
        return 0;
    };

    parse(&quantity.0).unwrap_or_else(|| {
        warn!(key, value = %quantity.0, "ignoring unparsable quantity");
        0
    })
}

pub fn parse_cpu_millicores(value: &str) -> Option<i64> {
    parse_scaled(value, 3)
}

pub fn parse_memory_bytes(value: &str) -> Option<i64> {
    parse_scaled(value, 0)
}

fn parse_scaled(value: &str, scale: i32) -> Option<i64> {
    let raw = value.trim();
    if raw.is_empty() {
        return None;
    }

    let (number, binary_power, decimal_exponent) = split_suffix(raw);
    let (mantissa, exponent) = parse_decimal(number)?;
    let mantissa = mantissa.checked_mul(1024i128.pow(binary_power))?;
    let exponent = exponent.checked_add(decimal_exponent)?.checked_add(scale)?;

    let scaled = if exponent >= 0 {
        10i128
            .checked_pow(exponent.unsigned_abs())
            .and_then(|factor| mantissa.checked_mul(factor))
            .unwrap_or(if mantissa < 0 { i128::MIN } else { i128::MAX })
    } else {
        match 10i128.checked_pow(exponent.unsigned_abs()) {
            Some(divisor) => {
                let quotient = mantissa / divisor;
                if mantissa % divisor > 0 {
                    quotient + 1
                } else {
                    quotient
                }
            }
            None => i128::from(mantissa > 0),
        }
    };

    Some(i64::try_from(scaled).unwrap_or(if scaled < 0 { i64::MIN } else { i64::MAX }))
}

fn split_suffix(raw: &str) -> (&str, u32, i32) {
    for (suffix, power) in BINARY_SUFFIXES {
        if let Some(number) = raw.strip_suffix(suffix) {
            return (number, power, 0);
        }
    }

    for (suffix, exponent) in DECIMAL_SUFFIXES {
        if let Some(number) = raw.strip_suffix(suffix) {
            return (number, 0, exponent);
        }
    }

    (raw, 0, 0)
}

// Returns (mantissa, exponent) with value = mantissa * 10^exponent.
fn parse_decimal(number: &str) -> Option<(i128, i32)> {
    let (number, exponent) = match number.find(['e', 'E']) {
        Some(index) => (&number[..index], number[index + 1..].parse::<i32>().ok()?),
        None => (number, 0),
    };

    let (negative, digits) = match number.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, number.strip_prefix('+').unwrap_or(number)),
    };
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits, ""));
    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut mantissa = 0i128;
    for byte in whole.bytes().chain(fraction.bytes()) {
        if !byte.is_ascii_digit() {
            return None;
        }
        mantissa = mantissa
            .checked_mul(10)?
            .checked_add(i128::from(byte - b'0'))?;
    }

    let fraction_digits = i32::try_from(fraction.len()).ok()?;
    let mantissa = if negative { -mantissa } else { mantissa };
    Some((mantissa, exponent.checked_sub(fraction_digits)?))
}
