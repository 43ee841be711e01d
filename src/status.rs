use crate::model::{ColorClass, PodPhase};
use crossterm::style::{Color, Stylize};
use k8s_openapi::api::core::v1::Node;

const EMOJI_READY: &str = "😃";
const EMOJI_NOT_READY: &str = "😭";
const EMOJI_POD_RUNNING: &str = "✅";
const EMOJI_POD_SUCCEEDED: &str = "⭕";
const EMOJI_POD_PENDING: &str = "🚫";
const EMOJI_POD_FAILED: &str = "❌";
const EMOJI_POD_UNKNOWN: &str = "❓";

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Thresholds {
    pub warn: i64,
    pub crit: i64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self { warn: 25, crit: 50 }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct LabelStyle {
    pub color: bool,
    pub emoji: bool,
}

pub fn node_ready(node: &Node) -> bool {
    node.status
        .as_ref()
        .and_then(|status| status.conditions.as_ref())
        .is_some_and(|conditions| {
            conditions
                .iter()
                .any(|condition| condition.type_ == "Ready" && condition.status == "True")
        })
}

pub fn node_status_label(ready: bool, emoji: bool) -> &'static str {
    match (ready, emoji) {
        (true, false) => "Ready",
        (false, false) => "NotReady",
        (true, true) => EMOJI_READY,
        (false, true) => EMOJI_NOT_READY,
    }
}

pub fn node_status(ready: bool, style: LabelStyle) -> String {
    let label = node_status_label(ready, style.emoji);
    if !style.color {
        return label.to_string();
    }

    let class = if ready {
        ColorClass::Success
    } else {
        ColorClass::Failure
    };
    colorize(label, class)
}

pub fn pod_phase_label(phase: PodPhase, emoji: bool) -> &'static str {
    if !emoji {
        return phase.label();
    }

    match phase {
        PodPhase::Running => EMOJI_POD_RUNNING,
        PodPhase::Succeeded => EMOJI_POD_SUCCEEDED,
        PodPhase::Pending => EMOJI_POD_PENDING,
        PodPhase::Failed => EMOJI_POD_FAILED,
        PodPhase::Unknown => EMOJI_POD_UNKNOWN,
    }
}

pub fn pod_phase_class(phase: PodPhase) -> ColorClass {
    match phase {
        PodPhase::Running | PodPhase::Succeeded => ColorClass::Success,
        PodPhase::Pending => ColorClass::Warning,
        PodPhase::Failed => ColorClass::Failure,
        PodPhase::Unknown => ColorClass::Neutral,
    }
}

pub fn pod_status(phase: PodPhase, style: LabelStyle) -> String {
    let label = pod_phase_label(phase, style.emoji);
    if !style.color {
        return label.to_string();
    }

    colorize(label, pod_phase_class(phase))
}

pub fn threshold_class(value: i64, thresholds: Thresholds) -> ColorClass {
    if value < thresholds.warn {
        ColorClass::Success
    } else if value < thresholds.crit {
        ColorClass::Warning
    } else {
        ColorClass::Failure
    }
}

pub fn colorize(text: &str, class: ColorClass) -> String {
    let styled = match class {
        ColorClass::Success => text.green(),
        ColorClass::Warning => text.yellow(),
        ColorClass::Failure => text.red(),
        ColorClass::Neutral => text.with(Color::Reset),
    };
    styled.to_string()
}
