use anyhow::Result;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};
use dotenvy::dotenv;

use vehicle_registry::app::create_app;
use vehicle_registry::config::environment::EnvironmentConfig;
use vehicle_registry::services::vehicle_loader::seed_from_file;
use vehicle_registry::services::vehicle_service::VehicleService;
use vehicle_registry::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();
    let config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Vehicle Registry - API REST de vehículos");
    info!("============================================");

    let vehicles = VehicleService::default();
    if let Some(path) = &config.vehicles_file {
        if let Err(e) = seed_from_file(&vehicles, path).await {
            error!("❌ Error cargando vehículos iniciales: {:#}", e);
            return Err(e);
        }
    }

    let addr: SocketAddr = config.server_url().parse()?;
    let development = config.is_development();
    let app = create_app(AppState::new(config, vehicles));

    info!("🌐 Servidor iniciando en http://{}", addr);
    if development {
        log_endpoints();
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("❌ Servidor terminó con error: {}", e);
        return Err(e.into());
    }

    info!("👋 Servidor terminado");
    Ok(())
}

/// Listar las rutas disponibles (solo en desarrollo)
fn log_endpoints() {
    info!("🔍 Endpoints disponibles:");
    info!("   GET    /health - Health check");
    info!("   GET    /vehicles - Listar vehículos");
    info!("   POST   /vehicles - Crear vehículo");
    info!("   POST   /vehicles/batch - Crear varios vehículos");
    info!("   GET    /vehicles/:id - Obtener vehículo");
    info!("   DELETE /vehicles/:id - Eliminar vehículo");
    info!("   PUT    /vehicles/:id/update_speed - Actualizar velocidad máxima");
    info!("   PUT    /vehicles/:id/update_fuel - Actualizar combustible");
    info!("   GET    /vehicles/color/:color/year/:year - Buscar por color y año");
    info!("   GET    /vehicles/brand/:brand - Buscar por marca");
    info!("   GET    /vehicles/brand/:brand/between/:start_year/:end_year - Marca y rango de años");
    info!("   GET    /vehicles/average_speed/brand/:brand - Velocidad media por marca");
    info!("   GET    /vehicles/fuel_type/:fuel_type - Buscar por combustible");
    info!("   GET    /vehicles/transmission/:transmission - Buscar por transmisión");
    info!("   GET    /vehicles/dimensions - Buscar por dimensiones");
    info!("   GET    /vehicles/weight - Buscar por peso");
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
