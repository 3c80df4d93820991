use quickscope_core::motion::within_band;

/// DOM ids of the pitch sections, in scroll order.
pub const PITCH_SECTIONS: [&str; 7] = [
    "hero", "problem", "solution", "why-now", "market", "vision", "ask",
];

#[must_use]
pub fn pitch_section_class(index: usize, active: usize) -> &'static str {
    if within_band(active, index) {
        "pitch-section pitch-section--visible"
    } else {
        "pitch-section pitch-section--faded"
    }
}
