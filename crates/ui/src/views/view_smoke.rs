use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn landing_view_renders_first_headline_and_hidden_chat() {
    let mut harness = setup_view_harness(ViewKind::Landing);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Global Climate Summit"), "missing headline in {html}");
    assert!(html.contains("translateX(0%)"), "active card not centred in {html}");
    assert!(html.contains("translateX(100%)"), "next card not offset in {html}");
    assert!(html.contains("dot dot--active"), "missing active dot in {html}");
    assert!(
        html.contains("class=\"chat-card chat-card--hidden\""),
        "question should start hidden in {html}"
    );
    assert!(html.contains("id=\"mockup-scroll\""), "missing scroll container in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn landing_view_renders_waitlist_form() {
    let mut harness = setup_view_harness(ViewKind::Landing);
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("id=\"waitlist\""), "missing waitlist anchor in {html}");
    assert!(html.contains("Get Early Access"), "missing call to action in {html}");
    assert!(!html.contains("Loading..."), "form should start idle in {html}");
    assert!(
        !html.contains("There was an error"),
        "no error before a submission in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn pitch_view_starts_with_the_first_band_visible() {
    let mut harness = setup_view_harness(ViewKind::Pitch);
    harness.rebuild();
    let html = harness.render();

    for id in ["hero", "problem", "solution", "why-now", "market", "vision", "ask"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing section {id} in {html}");
    }
    assert_eq!(html.matches("pitch-section pitch-section--visible").count(), 2);
    assert_eq!(html.matches("pitch-section pitch-section--faded").count(), 5);
    assert!(html.contains("id=\"pitch-scroll\""), "missing scroll container in {html}");
}
