use crate::core::app::AppSettings;
use crate::core::runtime::{Runtime, RuntimeSettings};

mod core;
mod logging;
mod render;

fn main() -> anyhow::Result<()> {
    logging::init();

    let settings = RuntimeSettings {
        app_settings: AppSettings::from_env(),
        ..Default::default()
    };

    let mut runtime = Runtime::new(&settings)?;
    runtime.run()?;

    Ok(())
}
