use quickscope_core::model::ContentItem;
use quickscope_core::motion::{AnimationPhase, card_offset};

/// Render data for one headline card in the desktop mockup.
#[derive(Clone, Debug, PartialEq)]
pub struct HeadlineCardVm {
    pub title: String,
    pub summary: String,
    pub why_it_matters: String,
    pub style: String,
}

/// Maps the catalog to cards slid horizontally around `active`.
#[must_use]
pub fn map_headline_cards(items: &[ContentItem], active: usize) -> Vec<HeadlineCardVm> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| HeadlineCardVm {
            title: item.title.clone(),
            summary: item.summary.clone(),
            why_it_matters: item.why_it_matters.clone(),
            style: headline_card_style(index, active),
        })
        .collect()
}

#[must_use]
pub fn headline_card_style(index: usize, active: usize) -> String {
    let offset = card_offset(active, index);
    let is_active = offset == 0;
    let offset = offset * 100;
    let opacity = if is_active { 1 } else { 0 };
    let position = if is_active { "relative" } else { "absolute" };
    format!("transform: translateX({offset}%); opacity: {opacity}; position: {position};")
}

#[must_use]
pub fn pagination_dot_class(index: usize, active: usize) -> &'static str {
    if index == active {
        "dot dot--active"
    } else {
        "dot"
    }
}

#[must_use]
pub fn question_card_class(phase: AnimationPhase) -> &'static str {
    if phase.question_visible() {
        "chat-card chat-card--shown"
    } else {
        "chat-card chat-card--hidden"
    }
}

#[must_use]
pub fn answer_card_class(phase: AnimationPhase) -> &'static str {
    if phase.answer_visible() {
        "chat-card chat-card--answer chat-card--shown"
    } else {
        "chat-card chat-card--answer chat-card--hidden"
    }
}

/// Entrance transition class for reveal-gated blocks.
#[must_use]
pub fn reveal_class(revealed: bool) -> &'static str {
    if revealed { "reveal reveal--shown" } else { "reveal" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickscope_core::model::headline_catalog;

    #[test]
    fn only_the_active_card_is_opaque_and_in_flow() {
        let cards = map_headline_cards(&headline_catalog(), 1);
        assert_eq!(
            cards[0].style,
            "transform: translateX(-100%); opacity: 0; position: absolute;"
        );
        assert_eq!(
            cards[1].style,
            "transform: translateX(0%); opacity: 1; position: relative;"
        );
        assert_eq!(
            cards[2].style,
            "transform: translateX(100%); opacity: 0; position: absolute;"
        );
    }

    #[test]
    fn cards_slide_by_whole_widths_from_the_active_one() {
        assert!(headline_card_style(0, 3).starts_with("transform: translateX(-300%);"));
        assert!(headline_card_style(4, 3).starts_with("transform: translateX(100%);"));
        assert!(headline_card_style(3, 3).ends_with("opacity: 1; position: relative;"));
    }

    #[test]
    fn chat_cards_follow_the_phase() {
        assert!(question_card_class(AnimationPhase::Initial).ends_with("--hidden"));
        assert!(question_card_class(AnimationPhase::ShowQuestion).ends_with("--shown"));
        assert!(answer_card_class(AnimationPhase::ShowQuestion).ends_with("--hidden"));
        assert!(answer_card_class(AnimationPhase::ShowAnswer).ends_with("--shown"));
    }

    #[test]
    fn pagination_marks_active_dot() {
        assert_eq!(pagination_dot_class(2, 2), "dot dot--active");
        assert_eq!(pagination_dot_class(0, 2), "dot");
    }
}
