mod layout;
pub use layout::{GuestLayout, MemberLayout};

mod login;
pub use login::{Login, LoginFallback};

mod register;
pub use register::Register;

mod notes;
pub use notes::{Archive, Home, NoteAdd, NoteDetail};

mod not_found;
pub use not_found::NotFound;
