// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use serde_json::Value;

/// Rewrite settings written by older versions into the current shape.
///
/// Early builds stored the listing path as a top-level `sessions_file`;
/// it now lives under `history`.
pub(super) fn migrate_on_load(mut value: Value) -> Value {
    let Some(map) = value.as_object_mut() else {
        return value;
    };

    if let Some(legacy) = map.remove("sessions_file") {
        let history = map
            .entry("history")
            .or_insert_with(|| Value::Object(Default::default()));
        if let Some(history) = history.as_object_mut() {
            history.entry("sessions_file").or_insert(legacy);
        }
    }

    value
}

/// Deep-merge two JSON values.
/// `base` is existing file content, `overlay` is serialized current struct.
/// Overlay values take priority.
pub(super) fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_val) in overlay_map {
                let merged = if let Some(base_val) = base_map.remove(&key) {
                    deep_merge(base_val, overlay_val)
                } else {
                    overlay_val
                };
                base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_base, overlay) => overlay,
    }
}
