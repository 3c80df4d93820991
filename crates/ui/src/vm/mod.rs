mod mockup_vm;
mod pitch_vm;
mod waitlist_vm;

pub use mockup_vm::{
    HeadlineCardVm, answer_card_class, headline_card_style, map_headline_cards,
    pagination_dot_class, question_card_class, reveal_class,
};
pub use pitch_vm::{PITCH_SECTIONS, pitch_section_class};
pub use waitlist_vm::{
    INVALID_EMAIL_MESSAGE, SUBMIT_ERROR_MESSAGE, SUBMITTED_NOTICE, SubmissionStatus,
    WaitlistFormVm,
};
