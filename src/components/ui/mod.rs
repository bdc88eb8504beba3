// UI primitives - base building blocks shared by every other component

mod badge;
mod button;

pub use badge::Badge;
pub use button::Button;
