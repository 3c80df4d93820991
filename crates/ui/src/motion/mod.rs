mod dom;
mod hooks;
mod scripts;

pub use dom::{DomObserver, ScrollAnchor};
pub use hooks::{
    use_content_rotator, use_phase_sequencer, use_reveal_on_mount, use_reveal_on_visible,
    use_visibility_tracker,
};
pub(crate) use scripts::scroll_into_view_script;
