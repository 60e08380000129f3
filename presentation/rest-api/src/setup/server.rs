use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;

use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = OpenApiService::new(
            (
                container.health_api,
                container.shopping_list_api,
                container.user_preferences_api,
                container.store_api,
                container.item_api,
                container.basket_api,
                container.price_alert_api,
                container.inflation_report_api,
            ),
            "Pricewise Backend API",
            env!("CARGO_PKG_VERSION"),
        )
        .server(format!("http://{}", addr));
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", api_service)
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .data(config.auth)
            .with(config.cors)
            .with(Tracing);
        tracing::info!("Server running at http://{addr}");
        tracing::info!("Swagger UI at http://{addr}/docs");
        tracing::info!("OpenAPI JSON at http://{addr}/openapi.json");
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}
