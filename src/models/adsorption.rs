//! Adsorbent retention models.

pub mod retention;
