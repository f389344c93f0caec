pub mod buckets;
pub mod cards;
pub mod events;
pub mod progress;
pub mod study;
