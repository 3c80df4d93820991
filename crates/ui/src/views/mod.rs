mod landing;
mod pitch;

pub use landing::LandingView;
pub use pitch::PitchView;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
