//! Static region hints for known investors.

use timeline_model::DEFAULT_REGION;

const REGIONS: &[(&str, &str)] = &[
    ("wyckoff", "us"),
    ("livermore", "us"),
    ("buffett", "us"),
    ("lynch", "us"),
    ("soros", "global"),
    ("simons", "us"),
    ("rogers", "global"),
    ("ackman", "us"),
    ("burry", "us"),
    ("wood", "us"),
    ("griffin", "us"),
    ("dalio", "us"),
    ("ptj", "us"),
    ("druckenmiller", "us"),
    ("graham", "us"),
    ("templeton", "global"),
    ("munger", "us"),
    ("bogle", "us"),
    ("tepper", "us"),
    ("klarman", "us"),
    ("icahn", "us"),
    ("gross", "us"),
];

/// Region for an investor id, `"global"` when unknown.
pub fn region_for(id: &str) -> &'static str {
    REGIONS
        .iter()
        .find(|(known, _)| *known == id)
        .map_or(DEFAULT_REGION, |(_, region)| *region)
}
