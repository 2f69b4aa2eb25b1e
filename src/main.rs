mod app;
mod config;
mod interrupt;
mod model;
mod render;
mod sim;

use anyhow::Result;

fn main() -> Result<()> {
    env_logger::init();
    app::run()
}
