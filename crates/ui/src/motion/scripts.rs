use quickscope_core::model::SectionId;
use quickscope_core::motion::{ObserverOptions, ScrollRequest};

/// Scrolls `element_id` to the requested offset. A missing element is ignored.
pub(crate) fn scroll_to_script(element_id: &str, request: ScrollRequest) -> String {
    format!(
        r#"(function() {{
            const el = document.getElementById({element_id:?});
            if (!el) {{ return; }}
            el.scrollTo({{ top: {offset}, behavior: {behavior:?} }});
        }})();"#,
        offset = request.offset,
        behavior = request.behavior.as_str(),
    )
}

/// Smoothly brings `element_id` into view, e.g. the waitlist section.
pub(crate) fn scroll_into_view_script(element_id: &str) -> String {
    format!(
        r#"(function() {{
            const el = document.getElementById({element_id:?});
            if (el) {{ el.scrollIntoView({{ behavior: "smooth" }}); }}
        }})();"#
    )
}

/// Installs one IntersectionObserver under `key` watching `targets`, and
/// forwards every batch as `[{{ target, ratio, isIntersecting }}]` in delivery order.
pub(crate) fn observer_script(key: &str, targets: &[SectionId], options: &ObserverOptions) -> String {
    let ids = serde_json::to_string(targets).unwrap_or_else(|_| "[]".to_string());
    format!(
        r#"
        const registry = window.__quickscopeObservers || (window.__quickscopeObservers = {{}});
        const key = {key:?};
        if (registry[key]) {{ registry[key].disconnect(); }}
        const observer = new IntersectionObserver((entries) => {{
            dioxus.send(entries.map((entry) => ({{
                target: entry.target.id,
                ratio: entry.intersectionRatio,
                isIntersecting: entry.isIntersecting,
            }})));
        }}, {{ threshold: {threshold}, rootMargin: {margin:?} }});
        registry[key] = observer;
        for (const id of {ids}) {{
            const el = document.getElementById(id);
            if (el) {{ observer.observe(el); }}
        }}
        await new Promise(() => {{}});
        "#,
        threshold = options.threshold,
        margin = options.root_margin(),
    )
}

pub(crate) fn disconnect_script(key: &str) -> String {
    format!(
        r#"(function() {{
            const registry = window.__quickscopeObservers;
            const key = {key:?};
            if (registry && registry[key]) {{
                registry[key].disconnect();
                delete registry[key];
            }}
        }})();"#
    )
}
