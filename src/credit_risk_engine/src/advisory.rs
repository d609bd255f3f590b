use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::types::RiskLabel;

/// Shown for any label the map does not cover.
pub const FALLBACK_ADVISORY: &str = "Risiko tidak dikenali";

/// Operator-facing recommendation per risk category.
static ADVISORIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (
            RiskLabel::LOW,
            "✅ Nasabah tergolong aman, dapat dipertimbangkan untuk pengajuan baru.",
        ),
        (
            RiskLabel::MEDIUM,
            "⚠️ Perlu pemantauan, review histori pembayaran dan kondisi ekonomi nasabah.",
        ),
        (
            RiskLabel::HIGH,
            "❌ Hindari pemberian pinjaman tambahan. Tinjau ulang profil risiko dan histori kredit.",
        ),
    ])
});

/// Advisory text for `label`, `None` if the label has no entry.
pub fn lookup(label: &RiskLabel) -> Option<&'static str> {
    ADVISORIES.get(label.as_str()).copied()
}

pub fn advisory_for(label: &RiskLabel) -> &'static str {
    lookup(label).unwrap_or_else(|| {
        log::warn!("no advisory for risk label '{label}', using fallback");
        FALLBACK_ADVISORY
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_labels_have_advisories() {
        for label in [RiskLabel::LOW, RiskLabel::MEDIUM, RiskLabel::HIGH] {
            let text = advisory_for(&RiskLabel::new(label));
            assert_ne!(text, FALLBACK_ADVISORY, "{label}");
        }
        assert!(advisory_for(&RiskLabel::new("Tinggi")).starts_with("❌ Hindari"));
    }

    #[test]
    fn unknown_label_falls_back() {
        assert_eq!(advisory_for(&RiskLabel::new("Sangat Tinggi")), FALLBACK_ADVISORY);
        assert_eq!(lookup(&RiskLabel::new("")), None);
    }
}
