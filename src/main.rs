use factura_pdf::{
    config::ServiceConfig,
    observability::init_tracing,
    startup::Application,
    types::Error,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = ServiceConfig::load()?;
    init_tracing(&config.log_level);

    let application = Application::build(config).await?;
    application.run_until_stopped().await
}
