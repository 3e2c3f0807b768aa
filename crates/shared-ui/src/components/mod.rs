// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod spinner;

// Primitive wrappers
pub mod toast;
pub mod tooltip;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use spinner::*;
pub use toast::*;
pub use tooltip::*;
