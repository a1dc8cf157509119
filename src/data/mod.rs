pub mod municipalities;

pub use municipalities::MUNICIPALITIES;
