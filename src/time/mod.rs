pub mod clock;
pub mod midnight;
pub mod system_clock;
