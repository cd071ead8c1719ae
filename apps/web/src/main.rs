use flagdeck_logger::{LevelFilter, Logger};
use flagdeck_web::{App, WebApp};

fn main() -> anyhow::Result<()> {
    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .console(true)
        .level(LevelFilter::INFO)
        .init()?;

    WebApp::new().launch(App);

    Ok(())
}
