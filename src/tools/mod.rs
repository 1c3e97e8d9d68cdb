//! Manual tooling layered on top of the rendered scene.
//!
//! One tool exists today: frame capture, which turns the off-screen cursor
//! copy into the numbered PNG frames a cursor-theme generator consumes.

pub mod capture;
