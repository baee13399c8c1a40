// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Capture-info and live/replay label rendering.

use tracing::trace;

use crate::config::{FrameConfig, StatusLabels, StatusSlots};
use crate::context::BrowsingContext;

/// Which status slots were present and written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusOutcome {
    /// The capture-info slot received the capture label.
    pub capture_written: bool,
    /// The label slot received the live/replay text.
    pub label_written: bool,
}

/// Writes status text into the two optional slots of the wrapper page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusNotifier {
    labels: StatusLabels,
    slots: StatusSlots,
}

impl StatusNotifier {
    /// Notifier using the labels and slot ids of `config`.
    pub fn new(config: &FrameConfig) -> Self {
        Self {
            labels: config.labels.clone(),
            slots: config.slots.clone(),
        }
    }

    /// Label text shown for the given live flag.
    pub fn label_for(&self, is_live: bool) -> &str {
        if is_live {
            &self.labels.live
        } else {
            &self.labels.replay
        }
    }

    /// Show `capture_label` and the live/replay label. Missing slots are
    /// skipped independently.
    pub fn update_status(
        &self,
        ctx: &mut dyn BrowsingContext,
        capture_label: &str,
        is_live: bool,
    ) -> StatusOutcome {
        let capture_written = ctx.set_element_text(&self.slots.capture_info, capture_label);
        if !capture_written {
            trace!(slot = %self.slots.capture_info, "capture info slot absent");
        }

        let label_written = ctx.set_element_text(&self.slots.label, self.label_for(is_live));
        if !label_written {
            trace!(slot = %self.slots.label, "label slot absent");
        }

        StatusOutcome {
            capture_written,
            label_written,
        }
    }
}
