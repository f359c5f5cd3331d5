//! Main application entry point.

use std::io;
use widgetlens_app::{App, AppConfig};

fn main() -> io::Result<()> {
    #[cfg(feature = "native")]
    env_logger::init();
    log::info!("Starting WidgetLens");

    let mut app = App::new(AppConfig::from_env());
    app.run(io::stdin().lock(), io::stdout().lock())
}
