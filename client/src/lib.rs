mod app;
mod canvas;
mod dom;
mod palette;
mod persistence;
mod storage;
mod timer;
mod util;

pub use app::run;
