mod hero;
mod mockup;
mod sections;
mod view;
mod waitlist;

pub use view::LandingView;
