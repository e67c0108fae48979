use core_types::ColorKey;

/// Resolves the palette entry for an allocation label.
///
/// Matching ignores case and surrounding whitespace. Unknown labels get
/// `ColorKey::Neutral`.
pub fn color_key_for(label: &str) -> ColorKey {
    match label.trim().to_ascii_lowercase().as_str() {
        "invested" => ColorKey::Invested,
        "returns" => ColorKey::Returns,
        "equity" => ColorKey::Equity,
        "debt" => ColorKey::Debt,
        "hybrid" => ColorKey::Hybrid,
        _ => {
            tracing::debug!(label, "No palette entry for label, using neutral colour.");
            ColorKey::Neutral
        }
    }
}

/// The stroke colour of a palette entry.
pub fn stroke_color(key: ColorKey) -> &'static str {
    match key {
        ColorKey::Invested => "#16a34a",
        ColorKey::Returns => "#3b82f6",
        ColorKey::Equity => "#2563eb",
        ColorKey::Debt => "#059669",
        ColorKey::Hybrid => "#9333ea",
        ColorKey::Neutral => "#9ca3af",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_labels_resolve_case_insensitively() {
        assert_eq!(color_key_for("Equity"), ColorKey::Equity);
        assert_eq!(color_key_for(" debt "), ColorKey::Debt);
        assert_eq!(color_key_for("HYBRID"), ColorKey::Hybrid);
        assert_eq!(color_key_for("Invested"), ColorKey::Invested);
        assert_eq!(color_key_for("Returns"), ColorKey::Returns);
    }

    #[test]
    fn unknown_labels_fall_back() {
        assert_eq!(color_key_for("Gold"), ColorKey::Neutral);
        assert_eq!(color_key_for(""), ColorKey::Neutral);
        assert_eq!(stroke_color(color_key_for("Gold")), "#9ca3af");
    }
}
