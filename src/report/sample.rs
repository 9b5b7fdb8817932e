pub struct ReportMetadata {
    pub generated_on: &'static str,
    pub client_name: &'static str,
    pub email: &'static str,
}

pub struct SampleScore {
    pub value: u8,
    pub label: &'static str,
    pub description: &'static str,
}

pub struct SampleMetric {
    pub label: &'static str,
    pub value: u8,
    pub description: &'static str,
}

pub struct RoutineStep {
    pub step: &'static str,
    pub summary: &'static str,
    pub note: &'static str,
}

pub const REPORT_METADATA: ReportMetadata = ReportMetadata {
    generated_on: "April 12, 2025",
    client_name: "Lana B.",
    email: "demo@ailanabuddy.app",
};

pub const SAMPLE_SCORE: SampleScore = SampleScore {
    value: 82,
    label: "Radiant baseline",
    description: "Balanced hydration, calm barrier, and even tone overall. Keep consistent moisturizing, add targeted actives only where needed, and maintain SPF diligence for sustained glow.",
};

pub const SAMPLE_METRICS: [SampleMetric; 3] = [
    SampleMetric {
        label: "Hydration balance",
        value: 84,
        description: "Moisture barrier looks supported; keep lightweight humectants in rotation.",
    },
    SampleMetric {
        label: "Texture smoothness",
        value: 78,
        description: "Minor dry patches along cheeks. Pair chemical exfoliant with barrier repair.",
    },
    SampleMetric {
        label: "Tone evenness",
        value: 74,
        description: "Subtle hyperpigmentation around jawline. Target with vitamin C + SPF diligence.",
    },
];

pub const SAMPLE_ROUTINE: [RoutineStep; 4] = [
    RoutineStep {
        step: "Cleanser",
        summary: "Amino-gel cleanser for sensitive skin",
        note: "AM & PM · Massage 60 seconds, lukewarm rinse",
    },
    RoutineStep {
        step: "Target",
        summary: "5% niacinamide + panthenol serum",
        note: "AM · Calm redness and support moisture barrier",
    },
    RoutineStep {
        step: "Moisturizer",
        summary: "Barrier-repair cream with ceramides",
        note: "AM & PM · Press onto damp skin for better absorption",
    },
    RoutineStep {
        step: "SPF",
        summary: "Mineral SPF 30 with zinc + tint",
        note: "AM · Shake well, apply two fingers for full coverage",
    },
];

pub const SAMPLE_TIPS: [&str; 3] = [
    "Opt for soft microfiber towel pats instead of rubbing to minimize irritation.",
    "Layer humectants (mist + serum) beneath moisturizer when flying or in dry climates.",
    "Schedule a routine check-in every 6 weeks to adjust actives with seasonal shifts.",
];

pub const SAMPLE_BADGES: [&str; 3] = [
    "5s mock analysis",
    "Dermatologist reviewed playbook",
    "Local product matches",
];
