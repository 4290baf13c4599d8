// Command handlers module
// Each handler takes its store (and launcher) explicitly so tests can swap them

pub mod add;
pub mod completion;
pub mod jump;
pub mod remove;
pub mod view;
