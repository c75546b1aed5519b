//! Static reference tables: defect response times, road class weights and the
//! step functions that turn days and report counts into 0-100 scores.

/// Response time used for a report or road with no recognized defect.
pub const DEFAULT_RESPONSE_DAYS: u32 = 7;

/// Defect labels offered by the report form, with their standard response time.
pub const DEFECT_CATALOG: &[(&str, u32)] = &[
    ("Potholes", 3),
    ("Alligator Cracks", 3),
    ("Major Scaling", 30),
    ("Shoving and Corrugation", 10),
    ("Pumping and Depression", 30),
    ("No/Faded Road Markings", 15),
    ("Defects on Shoulders", 7),
    ("Lush Vegetation", 3),
    ("Clogged Drains", 3),
    ("Open Manhole", 10),
    ("No/Inadequate Sealant in Joints", 3),
    ("Cracks", 3),
    ("Raveling", 7),
    ("Unmaintained Signages and Road Markers", 15),
    ("Unmaintained Bridges", 15),
    ("Unmaintained Guardrails", 15),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoadClass {
    National,
    Municipal,
    Provincial,
    Barangay,
    Bypass,
    Unclassified,
}

impl RoadClass {
    pub const ALL: [RoadClass; 6] = [
        RoadClass::National,
        RoadClass::Municipal,
        RoadClass::Provincial,
        RoadClass::Barangay,
        RoadClass::Bypass,
        RoadClass::Unclassified,
    ];

    /// Classifies a free-form road type label. Unknown or missing labels are
    /// `Unclassified` rather than an error.
    pub fn from_label(label: Option<&str>) -> Self {
        let Some(label) = label else {
            return RoadClass::Unclassified;
        };
        let normalized = label.trim().to_lowercase();
        let base = normalized.strip_suffix(" road").unwrap_or(&normalized).trim();

        match base {
            "national" => RoadClass::National,
            "municipal" => RoadClass::Municipal,
            "provincial" => RoadClass::Provincial,
            "barangay" => RoadClass::Barangay,
            "bypass" => RoadClass::Bypass,
            _ => RoadClass::Unclassified,
        }
    }

    /// Road Type Score (RTS).
    pub fn weight(&self) -> u32 {
        match self {
            RoadClass::National => 100,
            RoadClass::Municipal => 75,
            RoadClass::Provincial => 60,
            RoadClass::Barangay => 50,
            RoadClass::Bypass => 25,
            RoadClass::Unclassified => 50,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RoadClass::National => "national road",
            RoadClass::Municipal => "municipal",
            RoadClass::Provincial => "provincial road",
            RoadClass::Barangay => "barangay road",
            RoadClass::Bypass => "bypass road",
            RoadClass::Unclassified => "unclassified",
        }
    }
}

pub fn response_days(label: &str) -> Option<u32> {
    let label = label.trim();
    DEFECT_CATALOG
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, days)| *days)
}

/// Maps a defect's response time onto its urgency score.
pub fn defect_score(days: u32) -> u32 {
    match days {
        0..=3 => 20,
        4..=7 => 40,
        8..=10 => 60,
        11..=15 => 80,
        _ => 100,
    }
}

/// Report Frequency Score (RFS), bucketed in tens.
pub fn frequency_score(report_count: u32) -> u32 {
    match report_count {
        0 => 10,
        1..=90 => report_count.div_ceil(10) * 10,
        _ => 100,
    }
}
