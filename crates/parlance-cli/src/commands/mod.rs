pub mod ask;
pub mod demo;
pub mod dump;
pub mod input;
pub mod matching;
