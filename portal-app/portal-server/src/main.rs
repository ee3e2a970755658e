use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};
use tracing::{error, info};

use kitchen_api::{
    handlers::{admin, auth, catalog, health},
    middleware::require_admin,
    state::AppState,
};
use kitchen_core::repositories::{
    KitchenRepository, LocationRepository, MenuItemRepository, OrderingLinkRepository,
    ProfileRepository, SessionRepository,
};
use kitchen_core::services::{AdminService, AuthService, CatalogService, DirectoryService};
use kitchen_infrastructure::{
    GatewayClient, GatewayKitchenRepository, GatewayLocationRepository,
    GatewayMenuItemRepository, GatewayOrderingLinkRepository, GatewayProfileRepository,
    InMemorySessionRepository,
};
use kitchen_shared::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenvy::dotenv().ok();

    // Initialize telemetry
    kitchen_shared::telemetry::init_telemetry();

    info!("Portal server starting...");

    // Load configuration
    let config = match AppConfig::load() {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Gateway client and repositories
    info!("Using table gateway at {}", config.gateway.base_url);
    let gateway = GatewayClient::new(&config.gateway)?;

    let kitchens: Arc<dyn KitchenRepository> =
        Arc::new(GatewayKitchenRepository::new(gateway.clone()));
    let menu_items: Arc<dyn MenuItemRepository> =
        Arc::new(GatewayMenuItemRepository::new(gateway.clone()));
    let ordering_links: Arc<dyn OrderingLinkRepository> =
        Arc::new(GatewayOrderingLinkRepository::new(gateway.clone()));
    let locations: Arc<dyn LocationRepository> =
        Arc::new(GatewayLocationRepository::new(gateway.clone()));
    let profiles: Arc<dyn ProfileRepository> =
        Arc::new(GatewayProfileRepository::new(gateway.clone()));
    let sessions: Arc<dyn SessionRepository> = Arc::new(InMemorySessionRepository::new());

    // Services
    let auth_service = Arc::new(AuthService::new(
        profiles,
        sessions,
        config.session.ttl_seconds,
    ));
    let catalog_service = Arc::new(CatalogService::new(kitchens.clone()));
    let directory_service = Arc::new(DirectoryService::new(
        locations.clone(),
        kitchens.clone(),
        config.directory.default_location_id,
    ));
    let admin_service = Arc::new(AdminService::new(
        kitchens,
        menu_items,
        ordering_links,
        locations,
    ));

    let state = AppState {
        auth: auth_service,
        catalog: catalog_service,
        directory: directory_service,
        admin: admin_service,
        config: config.clone(),
    };

    // Build router
    let app = build_router(state);

    // Bind address
    let host: std::net::IpAddr = config.app.host.parse()?;
    let addr = SocketAddr::from((host, config.app.port));
    info!("Listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_router(state: AppState) -> Router {
    // Public routes
    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/api/kitchens", get(catalog::list_kitchens))
        .route("/api/kitchens/{id}", get(catalog::kitchen_menu))
        .route("/api/locations", get(catalog::list_locations))
        .route(
            "/api/locations/{nick}/kitchens",
            get(catalog::location_kitchens),
        )
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout));

    // Admin routes, all behind the admin gate
    let admin_routes = Router::new()
        .route(
            "/api/admin/kitchens",
            get(admin::list_kitchens).post(admin::create_kitchen),
        )
        .route(
            "/api/admin/kitchens/{id}",
            get(admin::kitchen_detail)
                .put(admin::update_kitchen)
                .delete(admin::delete_kitchen),
        )
        .route(
            "/api/admin/kitchens/{id}/menu-items",
            get(admin::list_menu_items),
        )
        .route(
            "/api/admin/kitchens/{id}/ordering-links",
            get(admin::list_ordering_links).put(admin::replace_ordering_links),
        )
        .route("/api/admin/menu-items", post(admin::create_menu_item))
        .route(
            "/api/admin/menu-items/{id}",
            put(admin::update_menu_item).delete(admin::delete_menu_item),
        )
        .route(
            "/api/admin/ordering-links/{id}",
            delete(admin::delete_ordering_link),
        )
        .route(
            "/api/admin/locations",
            get(admin::list_locations).post(admin::create_location),
        )
        .route(
            "/api/admin/locations/{id}",
            put(admin::update_location).delete(admin::delete_location),
        )
        .layer(middleware::from_fn_with_state(state.clone(), require_admin));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        // Static assets
        .nest_service("/assets", ServeDir::new("static/assets"))
        // Landing shell
        .route_service("/", ServeFile::new("static/index.html"))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
